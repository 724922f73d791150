use std::cmp::Ordering;

use crate::coercion::{Number, Temporal};
use crate::errors::ValidationError;
use crate::filter::FilterOperation;
use crate::model::DynamicValue;

use super::present_scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Less,
    NotLess,
    More,
    NotMore,
}

impl Direction {
    fn symbol(&self) -> &'static str {
        match self {
            Direction::Less => "<",
            Direction::NotLess => ">=",
            Direction::More => ">",
            Direction::NotMore => "<=",
        }
    }

    /// `ordering` is actual compared with expected
    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Direction::Less => ordering == Ordering::Less,
            Direction::NotLess => ordering != Ordering::Less,
            Direction::More => ordering == Ordering::Greater,
            Direction::NotMore => ordering != Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone)]
enum Operand {
    Number(Number),
    Temporal(Temporal),
}

/// LESS / NOT_LESS / MORE / NOT_MORE against a number or a temporal value
#[derive(Debug, Clone)]
pub struct Compare {
    direction: Direction,
    raw: String,
    operand: Operand,
}

impl Compare {
    /// Parse the operand: number first, then date / time / date-time
    ///
    /// # Errors
    ///
    /// `DateParse` when the operand is neither a number nor a temporal
    /// literal, or `operation` is not an ordering operator.
    pub fn new(operation: FilterOperation, operand: &str) -> Result<Self, ValidationError> {
        let direction = match operation {
            FilterOperation::Less => Direction::Less,
            FilterOperation::NotLess => Direction::NotLess,
            FilterOperation::More => Direction::More,
            FilterOperation::NotMore => Direction::NotMore,
            other => {
                return Err(ValidationError::Incomparable {
                    actual: operand.to_string(),
                    expected: other.to_string(),
                })
            }
        };
        let parsed = match Number::parse(operand) {
            Some(n) => Operand::Number(n),
            None => Temporal::parse(operand)
                .map(Operand::Temporal)
                .ok_or_else(|| ValidationError::DateParse {
                    value: operand.to_string(),
                })?,
        };
        Ok(Self {
            direction,
            raw: operand.to_string(),
            operand: parsed,
        })
    }

    /// # Errors
    ///
    /// - `NumberParse` / `DateParse` when the actual is not of the operand's family
    /// - `TemporalMismatch` when date, time and date-time are mixed
    /// - `TypeMismatch` for message or collection actuals
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = present_scalar(actual)? else {
            return Ok(false);
        };
        let ordering = match &self.operand {
            Operand::Number(expected) => {
                let actual = Number::from_scalar(scalar).ok_or_else(|| {
                    ValidationError::NumberParse {
                        value: scalar.to_string(),
                    }
                })?;
                actual.compare(expected)
            }
            Operand::Temporal(expected) => {
                let actual = Temporal::from_scalar(scalar).ok_or_else(|| {
                    ValidationError::DateParse {
                        value: scalar.to_string(),
                    }
                })?;
                actual
                    .compare(expected)
                    .ok_or_else(|| ValidationError::TemporalMismatch {
                        actual: scalar.to_string(),
                        expected: self.raw.clone(),
                    })?
            }
        };
        Ok(self.direction.accepts(ordering))
    }

    pub fn condition(&self) -> String {
        format!("{}{}", self.direction.symbol(), self.raw)
    }

    pub fn operation(&self) -> FilterOperation {
        match self.direction {
            Direction::Less => FilterOperation::Less,
            Direction::NotLess => FilterOperation::NotLess,
            Direction::More => FilterOperation::More,
            Direction::NotMore => FilterOperation::NotMore,
        }
    }
}
