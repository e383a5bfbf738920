//! Test utilities for depres
//!
//! Helpers shared by unit tests and the CLI integration tests:
//! - [`init_test_logging`] - one-time `tracing` setup for tests
//! - [`fixtures`] - declaration inputs with known closures
//! - [`TestEnvironment`] - temporary directory holding input and config files
//!
//! # Example
//!
//! ```rust,no_run
//! use depres::test_utils::{TestEnvironment, fixtures};
//!
//! let env = TestEnvironment::new().unwrap();
//! let path = env.create_file("deps.txt", fixtures::BASIC).unwrap();
//! assert!(path.exists());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=depres=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
