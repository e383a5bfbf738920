//! Global constants used throughout the depres codebase.
//!
//! Literal pieces of the declaration grammar and the names of the
//! environment variables and files the CLI consults live here so the parser,
//! formatter and configuration layer agree on them.

/// Literal separator between an entity and its dependency list.
///
/// Both the parser and the formatter use this exact text, including the
/// surrounding single spaces.
pub const SEPARATOR: &str = " depends on ";

/// Regular expression for a single entity name.
///
/// Names are made of ASCII letters, digits, `_` and `$`.
pub const NAME_PATTERN: &str = r"^[A-Za-z0-9_$]+$";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "DEPRES_CONFIG";

/// Directory under the user's home that holds the default configuration.
pub const CONFIG_DIR_NAME: &str = ".depres";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path argument that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";
