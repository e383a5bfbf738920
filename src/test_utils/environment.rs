//! Temporary directory for tests that need real files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory for input and configuration files.
///
/// The directory is removed when the environment is dropped.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create a new empty environment.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Create an environment holding `content` as `deps.txt`.
    pub fn with_input(content: &str) -> Result<Self> {
        let env = Self::new()?;
        env.create_file("deps.txt", content)?;
        Ok(env)
    }

    /// Root of the environment.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file relative to the environment root.
    pub fn create_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        Ok(full_path)
    }

    /// Read a file relative to the environment root.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.path().join(path);
        fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {}", full_path.display()))
    }
}
