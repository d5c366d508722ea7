//! Error types for term-list input

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when reading a term list
#[derive(Debug)]
pub enum InputError {
    /// The input ended before the variable count was read
    MissingVariableCount,

    /// A token that is not an integer
    InvalidToken {
        /// The rejected token
        token: Arc<str>,
        /// 1-based line number of the token
        line: usize,
    },

    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingVariableCount => {
                write!(f, "Input ended before the number of variables")
            }
            InputError::InvalidToken { token, line } => {
                write!(f, "Invalid term '{}' on line {}", token, line)
            }
            InputError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_token_display() {
        let err = InputError::InvalidToken {
            token: Arc::from("x3"),
            line: 2,
        };
        assert_eq!(err.to_string(), "Invalid term 'x3' on line 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: InputError = io_err.into();
        assert!(err.to_string().contains("file not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_to_io_error() {
        let io_err: io::Error = InputError::MissingVariableCount.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
