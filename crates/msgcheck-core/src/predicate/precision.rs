use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;
use chrono::Duration;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::coercion::number::{cmp_decimal, decimal_from_scalar, magnitude};
use crate::coercion::Temporal;
use crate::errors::ValidationError;
use crate::model::{DynamicValue, Scalar};

/// Scalar for a tolerance check; messages and collections cannot be compared
fn comparable_scalar<'a>(
    actual: Option<&'a DynamicValue>,
    expected: &str,
) -> Result<Option<&'a Scalar>, ValidationError> {
    match actual {
        None | Some(DynamicValue::Null) | Some(DynamicValue::NullMarker) => Ok(None),
        Some(DynamicValue::Scalar(s)) => Ok(Some(s)),
        Some(other) => Err(ValidationError::Incomparable {
            actual: other.shape_name().to_string(),
            expected: expected.to_string(),
        }),
    }
}

/// EQ_DECIMAL_PRECISION: `|actual - expected| <= epsilon`
#[derive(Debug, Clone)]
pub struct DecimalPrecision {
    raw: String,
    expected: BigDecimal,
    epsilon: BigDecimal,
}

impl DecimalPrecision {
    /// # Errors
    ///
    /// `NumberParse` when `expected` is not a decimal literal.
    pub fn new(expected: &str, epsilon: BigDecimal) -> Result<Self, ValidationError> {
        let parsed = BigDecimal::from_str(expected).map_err(|_| ValidationError::NumberParse {
            value: expected.to_string(),
        })?;
        Ok(Self {
            raw: expected.to_string(),
            expected: parsed,
            epsilon,
        })
    }

    /// # Errors
    ///
    /// - `NumberParse` for a string that is not a decimal literal
    /// - `Incomparable` for non-numeric typed values, messages and collections
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = comparable_scalar(actual, "BigDecimal")? else {
            return Ok(false);
        };
        let value = match scalar {
            Scalar::String(raw) => {
                BigDecimal::from_str(raw).map_err(|_| ValidationError::NumberParse {
                    value: raw.clone(),
                })?
            }
            other => decimal_from_scalar(other).ok_or_else(|| ValidationError::Incomparable {
                actual: other.target_type().to_string(),
                expected: "BigDecimal".to_string(),
            })?,
        };
        Ok(within(&value, &self.expected, &self.epsilon))
    }

    pub fn condition(&self) -> String {
        format!("{} ± {}", self.raw, self.epsilon.to_plain_string())
    }
}

/// `|actual - expected| <= epsilon` without aligning far-apart exponents
///
/// Subtraction only runs on operands whose magnitudes are within one of
/// each other. Otherwise the larger operand dominates the distance and
/// epsilon is measured against it.
fn within(actual: &BigDecimal, expected: &BigDecimal, epsilon: &BigDecimal) -> bool {
    if epsilon.sign() == Sign::Minus {
        return false;
    }
    let no_more_than = |distance: &BigDecimal| cmp_decimal(distance, epsilon) != Ordering::Greater;
    let (large, small, top) = match (magnitude(actual), magnitude(expected)) {
        (None, None) => return true,
        (Some(_), None) => return no_more_than(&actual.abs()),
        (None, Some(_)) => return no_more_than(&expected.abs()),
        (Some(ma), Some(me)) if (ma - me).abs() <= 1 => {
            return no_more_than(&(actual - expected).abs());
        }
        (Some(ma), Some(me)) if ma > me => (actual, expected, ma),
        (Some(_), Some(me)) => (expected, actual, me),
    };
    // |small| < 10^(top-1), so the distance lies in (0.9 * 10^top, 1.1 * 10^(top+1))
    match magnitude(epsilon) {
        Some(m) if m >= top + 2 => true,
        Some(m) if m >= top - 1 => {
            // |large - small| = |large| - toward, toward being small signed along large
            let toward = if large.sign() == Sign::Minus {
                -small.clone()
            } else {
                small.clone()
            };
            let slack = large.abs() - epsilon;
            cmp_decimal(&slack, &toward) != Ordering::Greater
        }
        _ => false,
    }
}

/// EQ_TIME_PRECISION: `|actual - expected| <= epsilon` as a duration
#[derive(Debug, Clone)]
pub struct TimePrecision {
    raw: String,
    expected: Temporal,
    epsilon: Duration,
}

impl TimePrecision {
    /// # Errors
    ///
    /// `DateParse` when `expected` is not a date, time or date-time literal.
    pub fn new(expected: &str, epsilon: Duration) -> Result<Self, ValidationError> {
        let parsed = Temporal::parse(expected).ok_or_else(|| ValidationError::DateParse {
            value: expected.to_string(),
        })?;
        Ok(Self {
            raw: expected.to_string(),
            expected: parsed,
            epsilon,
        })
    }

    /// # Errors
    ///
    /// - `DateParse` for a string that is not a temporal literal
    /// - `TemporalMismatch` when granularities differ
    /// - `Incomparable` for messages and collections
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = comparable_scalar(actual, self.expected.kind_name())? else {
            return Ok(false);
        };
        let value = Temporal::from_scalar(scalar).ok_or_else(|| ValidationError::DateParse {
            value: scalar.to_string(),
        })?;
        let delta = value
            .duration_since(&self.expected)
            .ok_or_else(|| ValidationError::TemporalMismatch {
                actual: scalar.to_string(),
                expected: self.raw.clone(),
            })?;
        let distance = if delta < Duration::zero() { -delta } else { delta };
        Ok(distance <= self.epsilon)
    }

    pub fn condition(&self) -> String {
        format!("{} ± {}", self.raw, self.epsilon)
    }
}
