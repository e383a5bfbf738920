//! Core types and error handling for depres
//!
//! This module holds the pieces every other module leans on:
//!
//! - [`error`] - [`DepresError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`entity`] - entity name validation shared by the parser and queries
//!
//! Entities have no identity beyond their name, so they are passed around as
//! plain `String`/`&str` values. [`is_valid_name`] is the single authority on
//! what counts as a name.

pub mod entity;
pub mod error;

pub use entity::{is_valid_name, split_tokens};
pub use error::{DepresError, ErrorContext, user_friendly_error};
