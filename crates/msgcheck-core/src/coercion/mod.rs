//! String to typed-value coercion
//!
//! Wire scalars always arrive as strings. Schema-aware conversion coerces
//! them to the field's [`TargetType`]; predicates use the best-effort
//! [`Comparable::infer`] instead.

pub mod number;
pub mod temporal;

use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::errors::MsgCheckError;
use crate::model::Scalar;
use crate::schema::TargetType;

pub use number::Number;
pub use temporal::Temporal;

/// Boolean literal, case-insensitive
///
/// Accepts `true/false`, `yes/no`, `on/off`, `y/n` and `t/f`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "y" | "t" => Some(true),
        "false" | "no" | "off" | "n" | "f" => Some(false),
        _ => None,
    }
}

/// Coerce a raw wire string to `target`
///
/// # Errors
///
/// [`MsgCheckError::ValueParse`] naming the target type, the literal and the
/// parser's reason.
pub fn coerce(raw: &str, target: TargetType) -> Result<Scalar, MsgCheckError> {
    let fail = |reason: String| MsgCheckError::ValueParse {
        target: target.name().to_string(),
        value: raw.to_string(),
        reason,
    };

    let scalar = match target {
        TargetType::Boolean => Scalar::Bool(
            parse_bool(raw).ok_or_else(|| fail("not a boolean literal".to_string()))?,
        ),
        TargetType::Byte => Scalar::Byte(raw.parse::<i8>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::Short => Scalar::Short(raw.parse::<i16>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::Integer => Scalar::Int(raw.parse::<i32>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::Long => Scalar::Long(raw.parse::<i64>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::Float => Scalar::Float(raw.parse::<f32>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::Double => Scalar::Double(raw.parse::<f64>().map_err(|e| fail(format!("{}", e)))?),
        TargetType::BigDecimal => {
            Scalar::Decimal(BigDecimal::from_str(raw).map_err(|e| fail(e.to_string()))?)
        }
        TargetType::Character => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Scalar::Char(c),
                _ => {
                    return Err(fail(format!(
                        "expected exactly one character, got {}",
                        raw.chars().count()
                    )))
                }
            }
        }
        TargetType::String => Scalar::String(raw.to_string()),
        TargetType::LocalDate => {
            Scalar::Date(temporal::parse_date(raw).map_err(|e| fail(e.to_string()))?)
        }
        TargetType::LocalTime => {
            Scalar::Time(temporal::parse_time(raw).map_err(|e| fail(e.to_string()))?)
        }
        TargetType::LocalDateTime => {
            Scalar::DateTime(temporal::parse_date_time(raw).map_err(|e| fail(e.to_string()))?)
        }
    };
    Ok(scalar)
}

/// Value normalised for equality checks
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    Number(Number),
    Temporal(Temporal),
    Text(String),
}

impl Comparable {
    /// Number if it parses as one, else date/time, else the raw text
    pub fn infer(raw: &str) -> Self {
        if let Some(n) = Number::parse(raw) {
            return Comparable::Number(n);
        }
        if let Some(t) = Temporal::parse(raw) {
            return Comparable::Temporal(t);
        }
        Comparable::Text(raw.to_string())
    }

    pub fn from_scalar(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::String(raw) => Self::infer(raw),
            Scalar::Bool(_) | Scalar::Char(_) => Comparable::Text(scalar.to_string()),
            Scalar::Date(_) | Scalar::Time(_) | Scalar::DateTime(_) => Temporal::from_scalar(scalar)
                .map(Comparable::Temporal)
                .unwrap_or_else(|| Comparable::Text(scalar.to_string())),
            _ => Number::from_scalar(scalar)
                .map(Comparable::Number)
                .unwrap_or_else(|| Comparable::Text(scalar.to_string())),
        }
    }

    /// Numbers compare numerically; other families must match exactly
    pub fn same_as(&self, other: &Comparable) -> bool {
        match (self, other) {
            (Comparable::Number(a), Comparable::Number(b)) => a.compare(b) == Ordering::Equal,
            (Comparable::Temporal(a), Comparable::Temporal(b)) => a == b,
            (Comparable::Text(a), Comparable::Text(b)) => a == b,
            _ => false,
        }
    }
}
