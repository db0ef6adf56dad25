//! Environment lookups with fallbacks.

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Value of `key`, or `fallback` when the variable is unset or empty.
///
/// Values that are not valid UTF-8 are converted lossily.
pub fn get_env(key: &str, fallback: &str) -> String {
    lookup(key).unwrap_or_else(|| fallback.to_string())
}

/// Like `get_env`, parsed into `T`. A value that fails to parse yields
/// `fallback`.
pub fn get_env_parsed<T: FromStr>(key: &str, fallback: T) -> T {
    let Some(raw) = lookup(key) else {
        return fallback;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment value");
            fallback
        }
    }
}

fn lookup(key: &str) -> Option<String> {
    env::var_os(key)
        .map(|value| value.to_string_lossy().into_owned())
        .filter(|value| !value.is_empty())
}
