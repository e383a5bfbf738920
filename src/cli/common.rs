//! Input and output helpers shared by the CLI commands.
//!
//! This is the ingestion boundary: whatever the source, text handed to the
//! resolver has every `\r` removed so only `\n` separates lines.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::constants::STDIN_PATH;
use crate::core::DepresError;

/// Read declarations from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`DepresError::InputNotFound`] when the file does not exist, and
/// an I/O error when it cannot be read or is not valid UTF-8.
pub async fn read_input(path: &Path) -> Result<String> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read declarations from stdin")?;
        buffer
    } else {
        match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DepresError::InputNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }
    };

    tracing::debug!("Read {} bytes of declarations from {}", raw.len(), path.display());
    Ok(normalize_line_endings(&raw))
}

/// Remove every carriage return.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace('\r', "")
}

/// Write `content` to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub async fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote resolution to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await.context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
