use std::io;
use std::path::PathBuf;

use hex_ir::ParsePatternError;
use hex_registry::LineError;
use hex_store::StoreError;

use crate::host::HostFileError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line; the message is the usage hint.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Host(#[from] HostFileError),

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}:{line}: {source}", path.display())]
    Line {
        path: PathBuf,
        line: usize,
        source: LineError,
    },

    #[error("invalid pattern `{text}`: {source}")]
    Pattern {
        text: String,
        source: ParsePatternError,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub(crate) fn usage(text: impl Into<String>) -> Self {
        CliError::Usage(text.into())
    }
}
