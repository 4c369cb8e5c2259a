//! Field normalization for provider data
//!
//! Numeric fields never fail a row: anything unparsable, including the
//! provider's missing-value token, becomes zero.

/// Literal `\N` the provider writes for a missing value
pub const MISSING_VALUE: &str = "\\N";

#[inline]
pub fn is_missing(raw: &str) -> bool {
    raw == MISSING_VALUE
}

/// Release year, `0` when missing, malformed or out of range.
#[inline]
pub fn year_or_zero(raw: &str) -> u16 {
    raw.parse().unwrap_or(0)
}

/// Vote count, `0` when missing, malformed, negative or out of range.
#[inline]
pub fn votes_or_zero(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

/// Average rating rounded to one decimal, `0.0` when missing or malformed.
///
/// Non-finite spellings such as `NaN` or `inf`, and values too large to
/// round, count as malformed.
pub fn rating_or_zero(raw: &str) -> f64 {
    raw.parse::<f64>()
        .ok()
        .map(round_to_tenth)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Round half away from zero to one decimal place.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Genre list as stored: lowercase with every whitespace character removed.
///
/// The missing-value token becomes an empty string. Separators are kept as-is.
pub fn normalize_genres(raw: &str) -> String {
    if is_missing(raw) {
        return String::new();
    }
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
