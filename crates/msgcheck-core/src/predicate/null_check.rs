use crate::filter::FilterOperation;
use crate::model::DynamicValue;

/// EMPTY / NOT_EMPTY
///
/// Absent fields and native nulls are empty. The null marker counts as
/// empty only when `null_marker_as_empty` is set.
#[derive(Debug, Clone)]
pub struct NullCheck {
    expect_empty: bool,
    null_marker_as_empty: bool,
}

impl NullCheck {
    pub fn new(expect_empty: bool, null_marker_as_empty: bool) -> Self {
        Self {
            expect_empty,
            null_marker_as_empty,
        }
    }

    pub fn validate(&self, actual: Option<&DynamicValue>) -> bool {
        let empty = match actual {
            None | Some(DynamicValue::Null) => true,
            Some(DynamicValue::NullMarker) => self.null_marker_as_empty,
            Some(_) => false,
        };
        empty == self.expect_empty
    }

    pub fn condition(&self) -> String {
        self.operation().to_string()
    }

    pub fn operation(&self) -> FilterOperation {
        if self.expect_empty {
            FilterOperation::Empty
        } else {
            FilterOperation::NotEmpty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_marker_respects_setting() {
        let marker = Some(&DynamicValue::NullMarker);
        assert!(!NullCheck::new(true, false).validate(marker));
        assert!(NullCheck::new(true, true).validate(marker));
        assert!(NullCheck::new(false, false).validate(marker));
        assert!(!NullCheck::new(false, true).validate(marker));
    }

    #[test]
    fn test_absent_and_values() {
        assert!(NullCheck::new(true, false).validate(None));
        assert!(NullCheck::new(true, false).validate(Some(&DynamicValue::Null)));
        assert!(NullCheck::new(false, false).validate(Some(&DynamicValue::from("x"))));
        assert!(NullCheck::new(false, false).validate(Some(&DynamicValue::List(vec![]))));
        assert_eq!(NullCheck::new(true, false).condition(), "EMPTY");
    }
}
