use std::path::PathBuf;
use thiserror::Error;

/// A failure confined to one source file
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render {}: {source}", path.display())]
    Render { path: PathBuf, source: tera::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: no slug can be derived from the file name", path.display())]
    EmptySlug { path: PathBuf },

    #[error(
        "{}: {} was already written from {}",
        path.display(),
        output.display(),
        first.display()
    )]
    DuplicateOutput {
        path: PathBuf,
        output: PathBuf,
        first: PathBuf,
    },
}

impl ItemError {
    /// Map an I/O error from reading `path`, separating "not found"
    pub fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ItemError::NotFound { path }
        } else {
            ItemError::Read { path, source }
        }
    }
}
