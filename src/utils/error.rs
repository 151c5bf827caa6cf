use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Cannot open model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read model at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: model format not supported (expected 3 v/t/n corners, 9 references, found {found})")]
    UnsupportedFace { line: usize, found: usize },

    #[error("Line {line}: position index {index} out of range (1..={count})")]
    PositionOutOfRange { line: usize, index: i64, count: usize },

    #[error("Line {line}: malformed '{keyword}' record")]
    InvalidAttribute { line: usize, keyword: &'static str },
}

impl ModelError {
    /// Source line the error was raised on, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            ModelError::Io { .. } => None,
            ModelError::Read { line, .. }
            | ModelError::UnsupportedFace { line, .. }
            | ModelError::PositionOutOfRange { line, .. }
            | ModelError::InvalidAttribute { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
