//! CLI error types.

use std::io;
use std::path::PathBuf;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} link(s) use a disallowed scheme and will render as plain text")]
    RejectedLinks(usize),
}
