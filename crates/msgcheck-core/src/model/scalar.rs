use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::coercion::temporal;
use crate::schema::TargetType;

/// Typed leaf value of a dynamic message
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(BigDecimal),
    Char(char),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl Scalar {
    /// Target type this scalar was coerced to
    pub fn target_type(&self) -> TargetType {
        match self {
            Scalar::Bool(_) => TargetType::Boolean,
            Scalar::Byte(_) => TargetType::Byte,
            Scalar::Short(_) => TargetType::Short,
            Scalar::Int(_) => TargetType::Integer,
            Scalar::Long(_) => TargetType::Long,
            Scalar::Float(_) => TargetType::Float,
            Scalar::Double(_) => TargetType::Double,
            Scalar::Decimal(_) => TargetType::BigDecimal,
            Scalar::Char(_) => TargetType::Character,
            Scalar::String(_) => TargetType::String,
            Scalar::Date(_) => TargetType::LocalDate,
            Scalar::Time(_) => TargetType::LocalTime,
            Scalar::DateTime(_) => TargetType::LocalDateTime,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Byte(v) => write!(f, "{}", v),
            Scalar::Short(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Long(v) => write!(f, "{}", v),
            Scalar::Float(v) => write_float(f, v.to_string(), v.is_finite()),
            Scalar::Double(v) => write_float(f, v.to_string(), v.is_finite()),
            Scalar::Decimal(v) => write!(f, "{}", v.to_plain_string()),
            Scalar::Char(v) => write!(f, "{}", v),
            Scalar::String(v) => write!(f, "{}", v),
            Scalar::Date(v) => write!(f, "{}", temporal::format_date(v)),
            Scalar::Time(v) => write!(f, "{}", temporal::format_time(v)),
            Scalar::DateTime(v) => write!(f, "{}", temporal::format_date_time(v)),
        }
    }
}

/// Plain notation, whole values keep a trailing `.0`
fn write_float(f: &mut fmt::Formatter<'_>, plain: String, finite: bool) -> fmt::Result {
    if finite && !plain.contains('.') {
        write!(f, "{}.0", plain)
    } else {
        f.write_str(&plain)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}
