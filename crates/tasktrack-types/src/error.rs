use std::fmt;

/// Result type for tasktrack-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when creating or mutating tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Task text was empty or whitespace-only
    EmptyTaskText,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTaskText => write!(f, "Task cannot be empty"),
        }
    }
}

impl std::error::Error for Error {}
