use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::errors::FieldError;

const DATE_FORMAT: &str = "%Y/%m/%d";
const DATE_LENGTH: usize = "YYYY/MM/DD".len();
const THOUSANDS_SEPARATOR: char = ',';

/// Parses a locale formatted amount such as `1,234.56` into an exact decimal.
///
/// Surrounding whitespace and thousands separators are removed before parsing.
/// A blank value becomes zero when `allow_null` is set, and is an error otherwise.
/// Values that cannot be held without rounding are rejected.
pub fn parse_amount(raw: &str, allow_null: bool) -> Result<Decimal, FieldError> {
    let cleaned: String = raw.trim()
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    if cleaned.is_empty() {
        return if allow_null { Ok(Decimal::ZERO) } else { Err(FieldError::Blank) };
    }

    Decimal::from_str_exact(&cleaned).map_err(|source| FieldError::InvalidDecimal {
        raw: raw.to_string(),
        source
    })
}

/// Parses a zero-padded `YYYY/MM/DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(FieldError::Blank);
    }

    if value.len() != DATE_LENGTH {
        return Err(FieldError::DateLayout { raw: raw.to_string() });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| FieldError::InvalidDate {
        raw: raw.to_string(),
        source
    })
}
