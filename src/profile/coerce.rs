//! Numeric coercion for user-entered values
//!
//! Form inputs arrive as numbers, numeric strings, blanks or garbage. Everything
//! that is not a usable number becomes 0, the same way a browser number input
//! reports an empty or invalid field.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Parse a raw text value into a number, falling back to 0
pub fn coerce_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => {
            log::warn!("non-numeric value {:?} coerced to 0", raw);
            0.0
        }
    }
}

/// Coerce an arbitrary number into an age, clamping to the u32 range
pub fn coerce_age(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        log::warn!("age {} out of range, saturated to {}", value, u32::MAX);
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, a boolean or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<f64, E> {
        Ok(if value { 1.0 } else { 0.0 })
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        Ok(coerce_str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

/// `deserialize_with` target for amount and rate fields
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

/// `deserialize_with` target for age fields
pub fn age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor).map(coerce_age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_str() {
        assert_eq!(coerce_str("1250.5"), 1250.5);
        assert_eq!(coerce_str("  42 "), 42.0);
        assert_eq!(coerce_str(""), 0.0);
        assert_eq!(coerce_str("abc"), 0.0);
        assert_eq!(coerce_str("NaN"), 0.0);
        assert_eq!(coerce_str("-3"), -3.0);
    }

    #[test]
    fn test_coerce_age() {
        assert_eq!(coerce_age(30.0), 30);
        assert_eq!(coerce_age(30.9), 30);
        assert_eq!(coerce_age(-5.0), 0);
        assert_eq!(coerce_age(f64::NAN), 0);
    }
}
