//! Entity name rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::NAME_PATTERN;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

/// Returns `true` if `name` is a valid entity name (`[A-Za-z0-9_$]+`).
///
/// # Examples
///
/// ```rust
/// use depres::core::is_valid_name;
///
/// assert!(is_valid_name("Lib_A$1"));
/// assert!(!is_valid_name("lib-a"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Split a dependency list into tokens on single spaces.
///
/// Runs of spaces and leading/trailing spaces produce no empty tokens.
pub fn split_tokens(dependencies: &str) -> impl Iterator<Item = &str> {
    dependencies.split(' ').filter(|token| !token.is_empty())
}
