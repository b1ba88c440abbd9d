use indexmap::IndexMap;

use super::constants::FALLBACK_ROUND_TYPE;

/// Extracts the round type token from a label such as `"TN-Worlds Day 2"`:
/// everything before the first hyphen, trimmed, then up to the first space.
/// Tokens missing from `weights` classify as the fallback type.
pub fn round_type_from_label(label: &str, weights: &IndexMap<String, f64>) -> String {
    let token = label
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .split(' ')
        .next()
        .unwrap_or_default();

    if weights.contains_key(token) {
        token.to_string()
    } else {
        FALLBACK_ROUND_TYPE.to_string()
    }
}
