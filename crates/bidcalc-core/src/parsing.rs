use crate::error::BidError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-entered amount into a Decimal.
///
/// Handles formats like:
/// - "1500" -> 1500
/// - "0.68" -> 0.68
/// - "$1,200.50" -> 1200.50 (currency sign and thousands separators)
/// - "20%" -> 20
/// - "  42  " -> 42
pub fn parse_amount(s: &str) -> Result<Decimal, BidError> {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let bare = unsigned.strip_suffix('%').unwrap_or(unsigned).trim();

    if bare.is_empty() {
        return Err(BidError::ParseError(format!("empty amount '{}'", s)));
    }

    let normalized = bare.replace(',', "");
    Decimal::from_str(&normalized)
        .map_err(|e| BidError::ParseError(format!("invalid number '{}': {}", s, e)))
}

/// Parse a `KEY=VALUE` rate override.
pub fn parse_override(s: &str) -> Result<(String, Decimal), BidError> {
    let (key, value) = s.split_once('=').ok_or_else(|| {
        BidError::ParseError(format!("expected KEY=VALUE, got '{}'", s))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(BidError::ParseError(format!("missing rate key in '{}'", s)));
    }

    Ok((key.to_string(), parse_amount(value)?))
}
