//! Input validation for long URLs, run before any network call.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("static pattern compiles"));

/// Why a submitted URL was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    Empty,
    #[error("Please enter a valid URL starting with http:// or https://")]
    MissingScheme,
}

/// Checks that `raw` is non-empty and starts with `http://` or `https://`
/// followed by at least one character. The input is not trimmed.
pub fn validate_long_url(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !HTTP_URL.is_match(raw) {
        return Err(ValidationError::MissingScheme);
    }
    Ok(())
}
