//! Error handling for depres
//!
//! This module provides the error types and user-facing error reporting for the
//! resolver. It follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DepresError`] - Enumerated failure cases
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! # Error Categories
//!
//! - **Input**: [`DepresError::InputNotFound`], [`DepresError::IoError`]
//! - **Configuration**: [`DepresError::ConfigError`], [`DepresError::TomlError`]
//! - **Queries**: [`DepresError::UnknownEntity`], [`DepresError::InvalidLines`]
//!
//! Malformed declaration lines are not errors at this level. The table builder
//! records them as diagnostics and moves on; they only surface, as
//! [`DepresError::InvalidLines`], when the CLI runs in strict mode or
//! `depres validate` finds any.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depres::core::{DepresError, ErrorContext, user_friendly_error};
//!
//! let error = DepresError::InputNotFound {
//!     path: "deps.txt".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depres operations.
///
/// # Error Categories
///
/// ## Input and Configuration
/// - [`InputNotFound`] - The declarations file does not exist
/// - [`IoError`] - Standard I/O errors from [`std::io::Error`]
/// - [`ConfigError`] - Configuration file issues
/// - [`TomlError`] - TOML parsing errors from [`toml::de::Error`]
///
/// ## Queries
/// - [`UnknownEntity`] - A requested entity has no declaration
/// - [`InvalidLines`] - Strict mode rejected an input containing skipped lines
///
/// [`InputNotFound`]: DepresError::InputNotFound
/// [`IoError`]: DepresError::IoError
/// [`ConfigError`]: DepresError::ConfigError
/// [`TomlError`]: DepresError::TomlError
/// [`UnknownEntity`]: DepresError::UnknownEntity
/// [`InvalidLines`]: DepresError::InvalidLines
#[derive(Error, Debug)]
pub enum DepresError {
    /// The declarations file could not be found
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// Path that was requested
        path: String,
    },

    /// Configuration file problem
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// An entity was requested that has no declaration
    #[error("Entity '{name}' is not declared in the input")]
    UnknownEntity {
        /// The requested entity name
        name: String,
    },

    /// Strict mode found skipped lines
    #[error("{count} line(s) could not be parsed")]
    InvalidLines {
        /// Number of skipped lines
        count: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Free-form error message
        message: String,
    },
}

impl Clone for DepresError {
    fn clone(&self) -> Self {
        match self {
            Self::InputNotFound {
                path,
            } => Self::InputNotFound {
                path: path.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::UnknownEntity {
                name,
            } => Self::UnknownEntity {
                name: name.clone(),
            },
            Self::InvalidLines {
                count,
            } => Self::InvalidLines {
                count: *count,
            },
            // io and toml errors are not Clone; keep their message
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper carrying a suggestion and extra details for terminal display.
///
/// # Examples
///
/// ```rust,no_run
/// use depres::core::{DepresError, ErrorContext};
///
/// let context = ErrorContext::new(DepresError::UnknownEntity {
///     name: "A".to_string(),
/// })
/// .with_suggestion("Run 'depres validate' to list declared entities");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DepresError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DepresError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Recognizes [`DepresError`], [`std::io::Error`] and [`toml::de::Error`]
/// anywhere in the error chain. Anything else is shown with its full chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(depres_error) = cause.downcast_ref::<DepresError>() {
            return create_error_context(depres_error.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DepresError::Other {
                    message: format!("Permission denied: {error:#}"),
                })
                .with_suggestion("Check the file permissions and ownership");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DepresError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            std::io::ErrorKind::InvalidData => {
                return ErrorContext::new(DepresError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Input must be UTF-8 encoded text");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DepresError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your depres configuration file");
    }

    // Generic error - include the full chain
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DepresError::Other {
        message,
    })
}

fn create_error_context(error: DepresError) -> ErrorContext {
    match &error {
        DepresError::InputNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path, or pass '-' to read declarations from stdin"),
        DepresError::ConfigError {
            ..
        }
        | DepresError::TomlError(_) => ErrorContext::new(error)
            .with_suggestion("Fix or remove the configuration file")
            .with_details("depres reads ~/.depres/config.toml unless --config or DEPRES_CONFIG is set"),
        DepresError::UnknownEntity {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Only entities that appear on the left of 'depends on' can be queried"),
        DepresError::InvalidLines {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'depres validate' to see every skipped line")
            .with_details("Strict mode treats skipped lines as a failure"),
        DepresError::IoError(_)
        | DepresError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DepresError::InvalidLines {
            count: 3,
        };
        assert_eq!(error.to_string(), "3 line(s) could not be parsed");

        let error = DepresError::InputNotFound {
            path: "deps.txt".to_string(),
        };
        assert_eq!(error.to_string(), "Input file not found: deps.txt");
    }

    #[test]
    fn test_error_context_display() {
        let context = ErrorContext::new(DepresError::UnknownEntity {
            name: "Z".to_string(),
        })
        .with_details("details here")
        .with_suggestion("try this");

        let rendered = context.to_string();
        assert!(rendered.contains("Entity 'Z' is not declared"));
        assert!(rendered.contains("Details: details here"));
        assert!(rendered.contains("Suggestion: try this"));
    }

    #[test]
    fn test_clone_io_error_keeps_message() {
        let error = DepresError::from(std::io::Error::other("disk on fire"));
        match error.clone() {
            DepresError::Other {
                message,
            } => assert!(message.contains("disk on fire")),
            other => panic!("Expected Other, got {other:?}"),
        }
    }

    #[test]
    fn test_user_friendly_error_finds_wrapped_error() {
        let error = anyhow::Error::from(DepresError::InvalidLines {
            count: 2,
        })
        .context("while resolving deps.txt");

        let context = user_friendly_error(error);
        assert!(matches!(
            context.error,
            DepresError::InvalidLines {
                count: 2
            }
        ));
        assert!(context.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_generic_chain() {
        let error = anyhow::anyhow!("root cause").context("outer");
        let context = user_friendly_error(error);
        match context.error {
            DepresError::Other {
                message,
            } => {
                assert!(message.starts_with("outer"));
                assert!(message.contains("1: root cause"));
            }
            other => panic!("Expected Other, got {other:?}"),
        }
    }
}
