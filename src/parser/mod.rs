//! Line parser for dependency declarations.
//!
//! A declaration line has the shape
//!
//! ```text
//! <entity> depends on <dep> <dep> ...
//! ```
//!
//! where every name matches `[A-Za-z0-9_$]+` and the dependency list may be
//! empty (the line then ends right after `depends on `). Extra spaces inside
//! the dependency list are tolerated.
//!
//! Parsing happens in two steps so the caller can tell the failure kinds apart:
//!
//! 1. The structure `<entity> " depends on "` is checked. Failure yields
//!    [`ParseError::InvalidFormat`].
//! 2. Every dependency token is checked against the name pattern. Failure
//!    yields [`ParseError::MissingDependency`] naming the first bad token.
//!
//! A line passes both steps exactly when it matches
//! `^([A-Za-z0-9_$]+) depends on ([A-Za-z0-9_$ ]*)$`.
//!
//! The parser is a pure function over one line; it never trims or rewrites
//! the entity name.

use thiserror::Error;

use crate::constants::SEPARATOR;
use crate::core::{is_valid_name, split_tokens};

/// Why a line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not `<entity> depends on <deps>`.
    #[error("Invalid format: {line}")]
    InvalidFormat {
        /// The offending line, verbatim
        line: String,
    },

    /// The structure is fine but a dependency token is not a valid name.
    #[error("Invalid dependency name '{dependency}' in line: {line}")]
    MissingDependency {
        /// The first rejected dependency token
        dependency: String,
        /// The offending line, verbatim
        line: String,
    },
}

impl ParseError {
    /// Short label for the failure kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat {
                ..
            } => "invalid format",
            Self::MissingDependency {
                ..
            } => "invalid dependency",
        }
    }

    /// The line that failed to parse.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::InvalidFormat {
                line,
            }
            | Self::MissingDependency {
                line,
                ..
            } => line,
        }
    }
}

/// A successfully parsed declaration line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// The declaring entity
    pub entity: &'a str,
    /// Raw dependency portion after the separator (may be empty or all spaces)
    pub dependencies: &'a str,
}

impl<'a> Declaration<'a> {
    /// Iterate the dependency tokens in the order written.
    ///
    /// Duplicates are preserved; the table builder collapses them.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        split_tokens(self.dependencies)
    }
}

/// Parse one declaration line.
///
/// # Examples
///
/// ```rust
/// use depres::parser::parse_line;
///
/// let decl = parse_line("A depends on B C").unwrap();
/// assert_eq!(decl.entity, "A");
/// assert_eq!(decl.tokens().collect::<Vec<_>>(), vec!["B", "C"]);
///
/// assert_eq!(parse_line("A depends on ").unwrap().tokens().count(), 0);
/// assert!(parse_line("!!!garbage!!!").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormat`] when the entity or the separator is
/// missing or malformed, and [`ParseError::MissingDependency`] when a
/// dependency token contains characters outside `[A-Za-z0-9_$]`.
pub fn parse_line(line: &str) -> Result<Declaration<'_>, ParseError> {
    let Some((entity, dependencies)) = line.split_once(SEPARATOR) else {
        return Err(ParseError::InvalidFormat {
            line: line.to_string(),
        });
    };

    if !is_valid_name(entity) {
        return Err(ParseError::InvalidFormat {
            line: line.to_string(),
        });
    }

    if let Some(bad) = split_tokens(dependencies).find(|token| !is_valid_name(token)) {
        return Err(ParseError::MissingDependency {
            dependency: bad.to_string(),
            line: line.to_string(),
        });
    }

    Ok(Declaration {
        entity,
        dependencies,
    })
}
