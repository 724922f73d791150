use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;
use chrono::Duration;
use std::str::FromStr;

use crate::errors::{MsgCheckError, Result};

/// Tolerances and null handling applied while building predicates
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSettings {
    decimal_precision: BigDecimal,
    time_precision: Duration,
    check_null_value_as_empty: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            decimal_precision: BigDecimal::from(0),
            time_precision: Duration::zero(),
            check_null_value_as_empty: false,
        }
    }
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the decimal epsilon; a blank string keeps the current one
    ///
    /// # Errors
    ///
    /// - `ValueParse` when `precision` is not a decimal literal
    /// - `InvalidConfiguration` when it is negative
    pub fn with_decimal_precision(mut self, precision: &str) -> Result<Self> {
        let precision = precision.trim();
        if precision.is_empty() {
            return Ok(self);
        }
        let parsed = BigDecimal::from_str(precision).map_err(|e| MsgCheckError::ValueParse {
            target: "BigDecimal".to_string(),
            value: precision.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.sign() == Sign::Minus {
            return Err(MsgCheckError::InvalidConfiguration {
                reason: format!("decimal precision must not be negative, got {}", precision),
            }
            .into());
        }
        self.decimal_precision = parsed;
        Ok(self)
    }

    pub fn with_time_precision(mut self, precision: Duration) -> Self {
        self.time_precision = precision;
        self
    }

    /// Treat `NullMarker` as empty in EMPTY / NOT_EMPTY checks
    pub fn with_null_value_as_empty(mut self, enabled: bool) -> Self {
        self.check_null_value_as_empty = enabled;
        self
    }

    pub fn decimal_precision(&self) -> &BigDecimal {
        &self.decimal_precision
    }

    pub fn time_precision(&self) -> Duration {
        self.time_precision
    }

    pub fn check_null_value_as_empty(&self) -> bool {
        self.check_null_value_as_empty
    }
}
