use crate::coercion::Comparable;
use crate::errors::ValidationError;
use crate::filter::FilterOperation;
use crate::model::DynamicValue;

use super::present_scalar;

/// EQUAL / NOT_EQUAL against a single value
#[derive(Debug, Clone)]
pub struct Equality {
    raw: String,
    expected: Comparable,
    negated: bool,
}

impl Equality {
    pub fn new(expected: &str, negated: bool) -> Self {
        Self {
            raw: expected.to_string(),
            expected: Comparable::infer(expected),
            negated,
        }
    }

    /// # Errors
    ///
    /// `TypeMismatch` when the actual value is a message or a collection.
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = present_scalar(actual)? else {
            return Ok(false);
        };
        let equal = Comparable::from_scalar(scalar).same_as(&self.expected);
        Ok(equal != self.negated)
    }

    pub fn condition(&self) -> String {
        if self.negated {
            format!("!={}", self.raw)
        } else {
            self.raw.clone()
        }
    }

    pub fn operation(&self) -> FilterOperation {
        if self.negated {
            FilterOperation::NotEqual
        } else {
            FilterOperation::Equal
        }
    }
}

/// EQUAL / NOT_EQUAL against the null marker
#[derive(Debug, Clone)]
pub struct ExactNull {
    negated: bool,
}

impl ExactNull {
    pub fn new(negated: bool) -> Self {
        Self { negated }
    }

    /// # Errors
    ///
    /// `MissingValue` when the field is absent or natively null.
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        match actual {
            None | Some(DynamicValue::Null) => Err(ValidationError::MissingValue),
            Some(value) => Ok(value.is_null_marker() != self.negated),
        }
    }

    pub fn condition(&self) -> String {
        if self.negated {
            "is not null".to_string()
        } else {
            "is null".to_string()
        }
    }

    pub fn operation(&self) -> FilterOperation {
        if self.negated {
            FilterOperation::NotEqual
        } else {
            FilterOperation::Equal
        }
    }
}
