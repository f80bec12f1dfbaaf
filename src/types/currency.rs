use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{CheckedSub, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of base units ("hastings") in one siacoin, as a power of ten.
pub const SIACOIN_PRECISION: u32 = 24;

/// Number of base units in one ScPrime coin, as a power of ten.
pub const SCPRIME_PRECISION: u32 = 27;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCurrencyError {
    #[error("currency string is empty")]
    Empty,
    #[error("invalid character in currency string: {0:?}")]
    InvalidDigit(String),
}

/// An exact, unbounded, non-negative amount in the network's smallest unit.
///
/// On-chain amounts regularly exceed `u64`, so this wraps a [`BigUint`].
/// It travels over JSON as a decimal string and round-trips losslessly.
/// A bare JSON integer is accepted on input only up to `u64::MAX`; larger
/// values arrive as floats from the JSON parser and are rejected rather than
/// rounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(BigUint);

impl Currency {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn new(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// `n` whole siacoins expressed in hastings.
    pub fn siacoins(n: u64) -> Self {
        Self(BigUint::from(n) * BigUint::from(10u8).pow(SIACOIN_PRECISION))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn checked_sub(&self, other: &Currency) -> Option<Currency> {
        self.0.checked_sub(&other.0).map(Currency)
    }

    /// Renders the amount as a decimal number with `decimals` fractional
    /// digits shifted out, trimming trailing zeros. Exact for any size.
    ///
    /// ```rust
    /// use siacentral::types::Currency;
    ///
    /// let amount: Currency = "1500000000000000000000000".parse().unwrap();
    /// assert_eq!(amount.format_units(24), "1.5");
    /// ```
    pub fn format_units(&self, decimals: u32) -> String {
        let digits = self.0.to_str_radix(10);
        let decimals = decimals as usize;
        if decimals == 0 {
            return digits;
        }

        let padded = if digits.len() <= decimals {
            format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
        } else {
            digits
        };
        let (whole, frac) = padded.split_at(padded.len() - decimals);
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{frac}")
        }
    }
}

impl From<u64> for Currency {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<BigUint> for Currency {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCurrencyError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCurrencyError::InvalidDigit(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Currency)
            .ok_or_else(|| ParseCurrencyError::InvalidDigit(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Currency {
    type Output = Currency;

    fn add(self, rhs: Currency) -> Currency {
        Currency(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Currency> for &'a Currency {
    type Output = Currency;

    fn add(self, rhs: &'a Currency) -> Currency {
        Currency(&self.0 + &rhs.0)
    }
}

impl Mul<u64> for Currency {
    type Output = Currency;

    fn mul(self, rhs: u64) -> Currency {
        Currency(self.0 * BigUint::from(rhs))
    }
}

impl Sum for Currency {
    fn sum<I: Iterator<Item = Currency>>(iter: I) -> Currency {
        iter.fold(Currency::zero(), |acc, c| acc + c)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_str_radix(10))
    }
}

struct CurrencyVisitor;

impl Visitor<'_> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal currency string or non-negative integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Currency, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Currency, E> {
        Ok(Currency::new(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Currency, E> {
        Ok(Currency(BigUint::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Currency, E> {
        u64::try_from(v)
            .map(Currency::new)
            .map_err(|_| E::custom("currency cannot be negative"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Currency, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
            Err(E::custom(
                "currency integer exceeds u64 and would lose precision, encode it as a decimal string",
            ))
        } else {
            Err(E::invalid_type(de::Unexpected::Float(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Currency, D::Error> {
        deserializer.deserialize_any(CurrencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOVE_U64: &str = "123456789012345678901234567890";

    #[test]
    fn test_large_value_round_trips_through_string() {
        let c: Currency = ABOVE_U64.parse().unwrap();
        assert!(c.as_biguint() > &BigUint::from(u64::MAX));
        assert_eq!(c.to_string(), ABOVE_U64);
    }

    #[test]
    fn test_json_is_decimal_string() {
        let c: Currency = ABOVE_U64.parse().unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, format!("\"{ABOVE_U64}\""));

        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_json_integer_is_accepted() {
        let c: Currency = serde_json::from_str("42").unwrap();
        assert_eq!(c, Currency::new(42));
        assert!(serde_json::from_str::<Currency>("-1").is_err());
        assert!(serde_json::from_str::<Currency>("1.5").is_err());
    }

    #[test]
    fn test_json_integer_above_u64_is_rejected_with_hint() {
        let err = serde_json::from_str::<Currency>(ABOVE_U64).unwrap_err();
        assert!(err.to_string().contains("decimal string"), "{err}");

        let max: Currency = serde_json::from_str(&u64::MAX.to_string()).unwrap();
        assert_eq!(max, Currency::new(u64::MAX));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Currency>(), Err(ParseCurrencyError::Empty));
        assert!(matches!("12a".parse::<Currency>(), Err(ParseCurrencyError::InvalidDigit(_))));
        assert!("-5".parse::<Currency>().is_err());
        assert!("+5".parse::<Currency>().is_err());
        assert!(" 5".parse::<Currency>().is_err());
    }

    #[test]
    fn test_exact_arithmetic() {
        let a: Currency = "18446744073709551615".parse().unwrap();
        let b = Currency::new(1);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.to_string(), "18446744073709551616");
        assert_eq!(sum.checked_sub(&b), Some(a.clone()));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!((Currency::new(3) * 4).to_string(), "12");

        let total: Currency = vec![Currency::new(1), Currency::new(2), Currency::new(3)].into_iter().sum();
        assert_eq!(total, Currency::new(6));
    }

    #[test]
    fn test_siacoins_and_format_units() {
        let one = Currency::siacoins(1);
        assert_eq!(one.to_string(), format!("1{}", "0".repeat(24)));
        assert_eq!(one.format_units(SIACOIN_PRECISION), "1");
        assert_eq!(Currency::new(1).format_units(SIACOIN_PRECISION), "0.000000000000000000000001");
        assert_eq!(Currency::zero().format_units(SIACOIN_PRECISION), "0");
        assert_eq!(Currency::new(1234).format_units(0), "1234");
        assert_eq!(Currency::new(1234).format_units(2), "12.34");
    }

    #[test]
    fn test_ordering() {
        assert!(Currency::siacoins(2) > Currency::siacoins(1));
        assert!(Currency::zero().is_zero());
    }
}
