use std::io;
use std::path::PathBuf;

/// Everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Model(#[from] typebind_core::Error),

    #[error(transparent)]
    Pipeline(#[from] typebind_compiler::Error),

    #[error("failed to serialize model: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
