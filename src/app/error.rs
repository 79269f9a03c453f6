use thiserror::Error;

/// The two ways a file operation can fail. Whatever the OS reports is kept
/// as the source and shown to the user verbatim.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to open file: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to save file: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn path(&self) -> &str {
        match self {
            AppError::Read { path, .. } | AppError::Write { path, .. } => path,
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
