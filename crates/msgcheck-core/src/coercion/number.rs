//! Numeric operands with integer to big-integer to decimal promotion

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::Scalar;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInteger(BigInt),
    Decimal(BigDecimal),
}

impl Number {
    /// A literal containing `.` is a decimal; otherwise an integer that
    /// widens to a big integer when it overflows `i64`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.contains('.') {
            return BigDecimal::from_str(raw).ok().map(Number::Decimal);
        }
        if let Ok(v) = raw.parse::<i64>() {
            return Some(Number::Integer(v));
        }
        BigInt::from_str(raw).ok().map(Number::BigInteger)
    }

    pub fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::String(raw) => Self::parse(raw),
            Scalar::Byte(v) => Some(Number::Integer(i64::from(*v))),
            Scalar::Short(v) => Some(Number::Integer(i64::from(*v))),
            Scalar::Int(v) => Some(Number::Integer(i64::from(*v))),
            Scalar::Long(v) => Some(Number::Integer(*v)),
            Scalar::Float(v) => decimal_from_float(&v.to_string()).map(Number::Decimal),
            Scalar::Double(v) => decimal_from_float(&v.to_string()).map(Number::Decimal),
            Scalar::Decimal(v) => Some(Number::Decimal(v.clone())),
            _ => None,
        }
    }

    pub fn to_decimal(&self) -> BigDecimal {
        match self {
            Number::Integer(v) => BigDecimal::from(*v),
            Number::BigInteger(v) => BigDecimal::new(v.clone(), 0),
            Number::Decimal(v) => v.clone(),
        }
    }

    /// Numeric ordering, promoting the narrower operand
    pub fn compare(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::BigInteger(a), Number::BigInteger(b)) => a.cmp(b),
            (Number::Integer(a), Number::BigInteger(b)) => BigInt::from(*a).cmp(b),
            (Number::BigInteger(a), Number::Integer(b)) => a.cmp(&BigInt::from(*b)),
            _ => cmp_decimal(&self.to_decimal(), &other.to_decimal()),
        }
    }
}

/// Arbitrary-precision decimal from any numeric scalar or numeric string
///
/// Unlike [`Number::parse`] this accepts exponent notation (`5E-3`).
pub fn decimal_from_scalar(scalar: &Scalar) -> Option<BigDecimal> {
    match scalar {
        Scalar::String(raw) => BigDecimal::from_str(raw).ok(),
        other => Number::from_scalar(other).map(|n| n.to_decimal()),
    }
}

/// Decimal exponent of the leading digit, `None` for zero
///
/// A nonzero `x` satisfies `10^m <= |x| < 10^(m+1)`.
pub fn magnitude(value: &BigDecimal) -> Option<i64> {
    if value.sign() == Sign::NoSign {
        return None;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    Some(value.digits() as i64 - 1 - scale)
}

/// Ordering decided by sign and magnitude before any scale alignment
///
/// Only operands of equal magnitude reach the exact comparison, so the
/// work stays proportional to their digit counts whatever the exponents.
pub fn cmp_decimal(a: &BigDecimal, b: &BigDecimal) -> Ordering {
    let (sa, sb) = (a.sign(), b.sign());
    if sa != sb {
        return sign_rank(sa).cmp(&sign_rank(sb));
    }
    match (magnitude(a), magnitude(b)) {
        (None, None) => Ordering::Equal,
        (Some(ma), Some(mb)) if ma != mb => {
            if sa == Sign::Minus {
                mb.cmp(&ma)
            } else {
                ma.cmp(&mb)
            }
        }
        _ => a.cmp(b),
    }
}

fn sign_rank(sign: Sign) -> i8 {
    match sign {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

fn decimal_from_float(rendered: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(rendered).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_families() {
        assert_eq!(Number::parse("10"), Some(Number::Integer(10)));
        assert!(matches!(Number::parse("10.1"), Some(Number::Decimal(_))));
        assert!(matches!(
            Number::parse("92233720368547758070"),
            Some(Number::BigInteger(_))
        ));
        assert_eq!(Number::parse("10,2"), None);
        assert_eq!(Number::parse("2007-12-03"), None);
    }

    #[test]
    fn test_compare_promotes_mixed_operands() {
        let int = Number::parse("10").unwrap();
        let dec = Number::parse("10.2").unwrap();
        let big = Number::parse("92233720368547758070").unwrap();
        assert_eq!(int.compare(&dec), Ordering::Less);
        assert_eq!(dec.compare(&int), Ordering::Greater);
        assert_eq!(int.compare(&big), Ordering::Less);
        assert_eq!(big.compare(&dec), Ordering::Greater);
        assert_eq!(
            Number::parse("10.0").unwrap().compare(&int),
            Ordering::Equal
        );
    }

    #[test]
    fn test_typed_scalars_become_numbers() {
        assert_eq!(Number::from_scalar(&Scalar::Short(3)), Some(Number::Integer(3)));
        assert_eq!(
            Number::from_scalar(&Scalar::Double(2.5)).map(|n| n.to_decimal()),
            Some(BigDecimal::from_str("2.5").unwrap())
        );
        assert_eq!(Number::from_scalar(&Scalar::Bool(true)), None);
    }

    fn dec(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_magnitude_of_leading_digit() {
        assert_eq!(magnitude(&dec("10.0")), Some(1));
        assert_eq!(magnitude(&dec("9.99")), Some(0));
        assert_eq!(magnitude(&dec("-0.005")), Some(-3));
        assert_eq!(magnitude(&dec("1E+30000000")), Some(30_000_000));
        assert_eq!(magnitude(&dec("0E-30000000")), None);
        assert_eq!(magnitude(&dec("0")), None);
    }

    #[test]
    fn test_cmp_decimal_orders_far_exponents() {
        assert_eq!(cmp_decimal(&dec("1E+30000000"), &dec("1")), Ordering::Greater);
        assert_eq!(cmp_decimal(&dec("-1E+30000000"), &dec("1")), Ordering::Less);
        assert_eq!(cmp_decimal(&dec("-1E+30000000"), &dec("-1")), Ordering::Less);
        assert_eq!(cmp_decimal(&dec("1E-30000000"), &dec("0")), Ordering::Greater);
        assert_eq!(cmp_decimal(&dec("0E-30000000"), &dec("0E+5")), Ordering::Equal);
        assert_eq!(cmp_decimal(&dec("0.0050"), &dec("5E-3")), Ordering::Equal);
        assert_eq!(cmp_decimal(&dec("0.0051"), &dec("5E-3")), Ordering::Greater);
    }

    #[test]
    fn test_decimal_from_scalar_accepts_exponent() {
        assert_eq!(
            decimal_from_scalar(&Scalar::from("5E-3")),
            Some(BigDecimal::from_str("0.005").unwrap())
        );
        assert_eq!(decimal_from_scalar(&Scalar::from("abc")), None);
    }
}
