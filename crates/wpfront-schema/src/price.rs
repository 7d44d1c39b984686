//! Menu price coercion.
//!
//! ACF stores prices as text fields, so WordPress usually sends `"12.50"`,
//! but numeric values are accepted as well.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

use crate::error::PriceError;

/// Parse a price string into a finite number.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`PriceError`] for empty, non-numeric, or non-finite input.
pub fn parse_price(text: &str) -> Result<f64, PriceError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PriceError(text.to_owned()))
}

/// Deserialize a price from either a JSON number or a numeric string.
pub(crate) fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PriceVisitor)
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        parse_price(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
