//! Input validation for caller-supplied styling hooks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ModalError, Result};

/// Longest suffix accepted; long enough for any sane theme name.
pub const MAX_SUFFIX_LEN: usize = 64;

static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("style suffix regex is valid")
});

/// Validates a style suffix so that `<base>-<suffix>` stays a single class name.
pub fn validate_style_suffix(suffix: &str) -> Result<()> {
    let invalid = |reason: &str| ModalError::InvalidStyleSuffix {
        suffix: suffix.to_string(),
        reason: reason.to_string(),
    };

    if suffix.is_empty() {
        return Err(invalid("suffix cannot be empty"));
    }

    if suffix.len() > MAX_SUFFIX_LEN {
        return Err(invalid("suffix too long (max 64 characters)"));
    }

    // Whitespace would split the class attribute into unrelated classes
    if !SUFFIX_RE.is_match(suffix) {
        return Err(invalid("only letters, digits, '-' and '_' are allowed"));
    }

    Ok(())
}
