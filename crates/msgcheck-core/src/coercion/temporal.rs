//! Local date / time / date-time parsing and rendering

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, Timelike};
use std::cmp::Ordering;
use std::fmt;

use crate::model::Scalar;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse_date(raw: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}

pub fn parse_time(raw: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMATS[0])
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMATS[1]))
}

pub fn parse_date_time(raw: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMATS[1]))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `HH:MM:SS` followed by a 3, 6 or 9 digit fraction, whichever is the
/// shortest that keeps the full sub-second precision
pub fn format_time(time: &NaiveTime) -> String {
    let nanos = time.nanosecond() % 1_000_000_000;
    let base = time.format("%H:%M:%S");
    if nanos % 1_000_000 == 0 {
        format!("{}.{:03}", base, nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!("{}.{:06}", base, nanos / 1_000)
    } else {
        format!("{}.{:09}", base, nanos)
    }
}

pub fn format_date_time(value: &NaiveDateTime) -> String {
    format!("{}T{}", format_date(&value.date()), format_time(&value.time()))
}

/// A parsed temporal operand or actual value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl Temporal {
    /// Pick the granularity from the separators present in `raw`
    ///
    /// Both `:` and `-` mean date-time, `:` alone a time, anything else a
    /// date.
    pub fn parse(raw: &str) -> Option<Self> {
        let has_colon = raw.contains(':');
        let has_dash = raw.contains('-');
        match (has_colon, has_dash) {
            (true, true) => parse_date_time(raw).ok().map(Temporal::DateTime),
            (true, false) => parse_time(raw).ok().map(Temporal::Time),
            _ => parse_date(raw).ok().map(Temporal::Date),
        }
    }

    pub fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::String(raw) => Self::parse(raw),
            Scalar::Date(d) => Some(Temporal::Date(*d)),
            Scalar::Time(t) => Some(Temporal::Time(*t)),
            Scalar::DateTime(dt) => Some(Temporal::DateTime(*dt)),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Temporal::Date(_) => "LocalDate",
            Temporal::Time(_) => "LocalTime",
            Temporal::DateTime(_) => "LocalDateTime",
        }
    }

    /// Ordering against a value of the same granularity
    pub fn compare(&self, other: &Temporal) -> Option<Ordering> {
        match (self, other) {
            (Temporal::Date(a), Temporal::Date(b)) => Some(a.cmp(b)),
            (Temporal::Time(a), Temporal::Time(b)) => Some(a.cmp(b)),
            (Temporal::DateTime(a), Temporal::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Signed `self - other` for values of the same granularity
    pub fn duration_since(&self, other: &Temporal) -> Option<Duration> {
        match (self, other) {
            (Temporal::Date(a), Temporal::Date(b)) => Some(a.signed_duration_since(*b)),
            (Temporal::Time(a), Temporal::Time(b)) => Some(a.signed_duration_since(*b)),
            (Temporal::DateTime(a), Temporal::DateTime(b)) => Some(a.signed_duration_since(*b)),
            _ => None,
        }
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Date(d) => f.write_str(&format_date(d)),
            Temporal::Time(t) => f.write_str(&format_time(t)),
            Temporal::DateTime(dt) => f.write_str(&format_date_time(dt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32, nanos: u32) -> NaiveTime {
        NaiveTime::from_hms_nano_opt(h, m, s, nanos).unwrap()
    }

    #[test]
    fn test_format_time_fraction_widths() {
        assert_eq!(format_time(&time(0, 0, 0, 0)), "00:00:00.000");
        assert_eq!(format_time(&time(12, 42, 1, 1_000_000)), "12:42:01.001");
        assert_eq!(format_time(&time(12, 42, 1, 1_000)), "12:42:01.000001");
        assert_eq!(format_time(&time(12, 42, 1, 1)), "12:42:01.000000001");
    }

    #[test]
    fn test_format_date_time() {
        let dt = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_time(time(12, 42, 1, 1_000));
        assert_eq!(format_date_time(&dt), "1970-01-01T12:42:01.000001");
    }

    #[test]
    fn test_parse_picks_granularity() {
        assert!(matches!(Temporal::parse("2007-12-03"), Some(Temporal::Date(_))));
        assert!(matches!(Temporal::parse("10:15:30"), Some(Temporal::Time(_))));
        assert!(matches!(Temporal::parse("10:15"), Some(Temporal::Time(_))));
        assert!(matches!(
            Temporal::parse("2007-12-03T10:15:30.5"),
            Some(Temporal::DateTime(_))
        ));
        assert!(Temporal::parse("2007-12-03T10-15-30").is_none());
        assert!(Temporal::parse("10,1").is_none());
    }

    #[test]
    fn test_compare_requires_same_granularity() {
        let date = Temporal::parse("2007-12-03").unwrap();
        let date_time = Temporal::parse("2007-12-03T10:15:30").unwrap();
        assert!(date.compare(&date_time).is_none());
        assert_eq!(date.compare(&date), Some(Ordering::Equal));
    }

    #[test]
    fn test_duration_since() {
        let a = Temporal::parse("10:15:30").unwrap();
        let b = Temporal::parse("10:15:35.1").unwrap();
        assert_eq!(b.duration_since(&a), Some(Duration::milliseconds(5100)));
        assert_eq!(a.duration_since(&b), Some(Duration::milliseconds(-5100)));
    }
}
