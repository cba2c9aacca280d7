//! Custom template filters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use minijinja::Value;

/// Encode the string form of a value as padded standard Base64.
///
/// Undefined and `none` values encode the empty string.
pub fn base64encode(value: Value) -> String {
    if value.is_undefined() || value.is_none() {
        return String::new();
    }
    STANDARD.encode(value.to_string())
}
