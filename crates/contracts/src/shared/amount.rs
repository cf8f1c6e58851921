//! Lenient currency amount handling.
//!
//! Store payloads are not trusted to carry clean numbers: amounts arrive as
//! JSON numbers or as formatted strings ("1.234,56", "$1,234.56"). A single
//! bad field must never abort an aggregation, so parsing strips decoration
//! and falls back to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Parse a currency string defensively. Returns zero when nothing numeric
/// survives the cleanup.
pub fn parse_lenient(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');
    let normalized = match (last_dot, last_comma) {
        // Both present: the rightmost one is the decimal separator,
        // the other is a thousands separator.
        (Some(d), Some(c)) => {
            if d > c {
                cleaned.replace(',', "")
            } else {
                cleaned.replace('.', "").replace(',', ".")
            }
        }
        // Only commas: decimal separator when the trailing group is not a
        // thousands group, otherwise separators.
        (None, Some(c)) => {
            let trailing = cleaned.len() - c - 1;
            if cleaned.matches(',').count() == 1 && trailing != 3 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        // Only dots: same rule.
        (Some(d), None) => {
            let trailing = cleaned.len() - d - 1;
            if cleaned.matches('.').count() == 1 && trailing != 3 {
                cleaned
            } else if cleaned.matches('.').count() > 1 {
                // Multiple dots can only be thousands separators.
                cleaned.replace('.', "")
            } else {
                // A single dot with a 3-digit tail is ambiguous; the store
                // formats thousands with separators, so treat it as one.
                cleaned.replace('.', "")
            }
        }
        (None, None) => cleaned,
    };

    normalized.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Num(f64),
    Text(String),
    None,
}

/// Serde helper: accepts a JSON number, a formatted string, or null.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Num(n) => Decimal::try_from(n).unwrap_or(Decimal::ZERO),
        RawAmount::Text(s) => parse_lenient(&s),
        RawAmount::None => Decimal::ZERO,
    })
}
