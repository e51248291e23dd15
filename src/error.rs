use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: header (first line) must look like {expected}")]
    Header { path: PathBuf, expected: String },

    #[error("{path}: line {line}: expected {expected} fields, got {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("server returned status {status}")]
    Service { status: u16 },

    #[error("decoder for content type {content_type} not implemented")]
    UnsupportedFormat { content_type: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Response(String),
}

impl Error {
    /// Errors raised by a single lookup, as opposed to file handling.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::Service { .. }
                | Self::UnsupportedFormat { .. }
                | Self::Transport(_)
                | Self::Response(_)
        )
    }
}

impl From<ureq::Error> for Error {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, _) => Self::Service { status },
            ureq::Error::Transport(x) => Self::Transport(x.to_string()),
        }
    }
}
