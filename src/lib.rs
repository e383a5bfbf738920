//! depres - transitive dependency resolver
//!
//! Reads declarations of the form
//!
//! ```text
//! A depends on B C
//! B depends on C E
//! ```
//!
//! and reports, for every declared entity, the full set of entities it
//! reaches through one or more "depends on" edges:
//!
//! ```text
//! A depends on B C E 
//! B depends on C E 
//! ```
//!
//! # Modules
//!
//! ## Core Functionality
//! - [`parser`] - Line grammar and per-line parse errors
//! - [`resolver`] - Declaration table, closure engine, formatting and tree view
//! - [`core`] - Error types and entity name rules
//!
//! ## Command Line
//! - [`cli`] - `resolve`, `validate` and `tree` subcommands
//! - [`config`] - Optional TOML configuration file
//!
//! ## Supporting Modules
//! - [`constants`] - Grammar literals, file names and environment variables
//!
//! # Library Usage
//!
//! ```rust
//! use depres::resolver::{resolve, resolve_dependencies};
//!
//! let report = resolve_dependencies("A depends on B\nB depends on A");
//! assert_eq!(report, "A depends on B \nB depends on A \n");
//!
//! let resolution = resolve("A depends on B\n!!!\nB depends on ");
//! assert_eq!(resolution.diagnostics.len(), 1);
//! assert_eq!(resolution.table.get("A").unwrap(), ["B"]);
//! ```
//!
//! The library never does I/O. Callers strip `\r` from input before handing
//! it over; the CLI does this in [`cli::common::read_input`].

// Core functionality modules
pub mod core;
pub mod parser;
pub mod resolver;

// Command line
pub mod cli;
pub mod config;

// Supporting modules
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
