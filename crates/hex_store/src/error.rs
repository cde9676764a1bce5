use std::path::PathBuf;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed index file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid name `{0}`")]
    InvalidName(String),

    #[error("folder `{0}` is reserved")]
    ReservedFolder(String),

    #[error("folder `{0}` already exists")]
    FolderExists(String),

    #[error("folder `{0}` does not exist")]
    FolderNotFound(String),

    #[error("no sequence `{name}` in folder `{folder}`")]
    SequenceNotFound { folder: String, name: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(folder: &str, name: &str) -> Self {
        StoreError::SequenceNotFound {
            folder: folder.to_string(),
            name: name.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
