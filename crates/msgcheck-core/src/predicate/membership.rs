use indexmap::IndexSet;

use crate::errors::ValidationError;
use crate::filter::FilterOperation;
use crate::model::DynamicValue;

use super::present_scalar;

/// IN / NOT_IN: exact membership in a set of literals
#[derive(Debug, Clone)]
pub struct ListContainment {
    values: IndexSet<String>,
    negated: bool,
}

impl ListContainment {
    pub fn new(values: IndexSet<String>, negated: bool) -> Self {
        Self { values, negated }
    }

    /// Typed scalars are compared by their canonical text.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for message or collection actuals.
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = present_scalar(actual)? else {
            return Ok(false);
        };
        let contained = match scalar.as_str() {
            Some(text) => self.values.contains(text),
            None => self.values.contains(&scalar.to_string()),
        };
        Ok(contained != self.negated)
    }

    pub fn condition(&self) -> String {
        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        format!("{} [{}]", self.operation(), values.join(", "))
    }

    pub fn operation(&self) -> FilterOperation {
        if self.negated {
            FilterOperation::NotIn
        } else {
            FilterOperation::In
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DynamicMessage, Scalar};

    fn abc(negated: bool) -> ListContainment {
        ListContainment::new(["A", "B", "C"].into_iter().map(String::from).collect(), negated)
    }

    #[test]
    fn test_in_and_not_in() {
        assert!(abc(false).validate(Some(&DynamicValue::from("A"))).unwrap());
        assert!(!abc(false).validate(Some(&DynamicValue::from("D"))).unwrap());
        assert!(abc(true).validate(Some(&DynamicValue::from("D"))).unwrap());
        assert!(!abc(true).validate(Some(&DynamicValue::from("A"))).unwrap());
    }

    #[test]
    fn test_typed_scalar_uses_canonical_text() {
        let p = ListContainment::new(["1", "2"].into_iter().map(String::from).collect(), false);
        assert!(p.validate(Some(&DynamicValue::Scalar(Scalar::Int(2)))).unwrap());
    }

    #[test]
    fn test_message_actual_is_type_mismatch() {
        let err = abc(false)
            .validate(Some(&DynamicValue::Message(DynamicMessage::new("M"))))
            .unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_condition() {
        assert_eq!(abc(false).condition(), "IN [A, B, C]");
        assert_eq!(abc(true).condition(), "NOT_IN [A, B, C]");
    }
}
