//! Comparison predicates compiled from value filters
//!
//! Every predicate answers `validate(actual)` for one field of a dynamic
//! message and describes itself through `condition()`. `None` as the actual
//! value means the field is absent. Value-bearing predicates fail (return
//! `false`) for absent and null actuals instead of raising.

pub mod compare;
pub mod equality;
pub mod membership;
pub mod null_check;
pub mod pattern;
pub mod precision;

pub use compare::Compare;
pub use equality::{Equality, ExactNull};
pub use membership::ListContainment;
pub use null_check::NullCheck;
pub use pattern::{RegexMatch, WildcardMatch};
pub use precision::{DecimalPrecision, TimePrecision};

use crate::errors::ValidationError;
use crate::filter::FilterOperation;
use crate::model::{DynamicValue, Scalar};

/// Closed set of predicates the filter builder produces
#[derive(Debug, Clone)]
pub enum Predicate {
    Equality(Equality),
    ExactNull(ExactNull),
    Compare(Compare),
    Regex(RegexMatch),
    Wildcard(WildcardMatch),
    ListContainment(ListContainment),
    NullCheck(NullCheck),
    DecimalPrecision(DecimalPrecision),
    TimePrecision(TimePrecision),
}

impl Predicate {
    /// Check `actual` against this predicate
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] when the actual value cannot be compared at all;
    /// a plain mismatch is `Ok(false)`.
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        match self {
            Predicate::Equality(p) => p.validate(actual),
            Predicate::ExactNull(p) => p.validate(actual),
            Predicate::Compare(p) => p.validate(actual),
            Predicate::Regex(p) => p.validate(actual),
            Predicate::Wildcard(p) => p.validate(actual),
            Predicate::ListContainment(p) => p.validate(actual),
            Predicate::NullCheck(p) => Ok(p.validate(actual)),
            Predicate::DecimalPrecision(p) => p.validate(actual),
            Predicate::TimePrecision(p) => p.validate(actual),
        }
    }

    /// Human-readable expectation, reproducing operator and operand
    pub fn condition(&self) -> String {
        match self {
            Predicate::Equality(p) => p.condition(),
            Predicate::ExactNull(p) => p.condition(),
            Predicate::Compare(p) => p.condition(),
            Predicate::Regex(p) => p.condition(),
            Predicate::Wildcard(p) => p.condition(),
            Predicate::ListContainment(p) => p.condition(),
            Predicate::NullCheck(p) => p.condition(),
            Predicate::DecimalPrecision(p) => p.condition(),
            Predicate::TimePrecision(p) => p.condition(),
        }
    }

    pub fn operation(&self) -> FilterOperation {
        match self {
            Predicate::Equality(p) => p.operation(),
            Predicate::ExactNull(p) => p.operation(),
            Predicate::Compare(p) => p.operation(),
            Predicate::Regex(p) => p.operation(),
            Predicate::Wildcard(p) => p.operation(),
            Predicate::ListContainment(p) => p.operation(),
            Predicate::NullCheck(p) => p.operation(),
            Predicate::DecimalPrecision(_) => FilterOperation::EqDecimalPrecision,
            Predicate::TimePrecision(_) => FilterOperation::EqTimePrecision,
        }
    }
}

/// Scalar behind `actual`, `None` when absent or null
///
/// Messages and collections raise a type mismatch against a single-value
/// operand.
fn present_scalar(actual: Option<&DynamicValue>) -> Result<Option<&Scalar>, ValidationError> {
    match actual {
        None | Some(DynamicValue::Null) | Some(DynamicValue::NullMarker) => Ok(None),
        Some(DynamicValue::Scalar(s)) => Ok(Some(s)),
        Some(other) => Err(ValidationError::TypeMismatch {
            actual: other.shape_name().to_string(),
            expected: "String".to_string(),
        }),
    }
}
