//! Error types for the step engines and their drivers
//!
//! Structural problems inside an engine (empty structure, bad node id) are never
//! errors: they are recorded in the trace with a [`StepStatus`] so the player can
//! explain them. [`Error`] covers the few cases with no meaningful trace to show.
//!
//! [`StepStatus`]: crate::trace::StepStatus

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Algorithm identifier not recognized by a dispatcher
    #[error("unsupported algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Malformed line in a command script
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("session not found: {id}")]
    SessionNotFound { id: u64 },

    /// Replay cursor could not move
    #[error("{message}")]
    Playback { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback {
            message: message.into(),
        }
    }

    /// Process exit code for the binary
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownAlgorithm { .. } | Self::InvalidArgument { .. } | Self::Parse { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unknown_algorithm_message_names_the_algorithm() {
        let error = Error::unknown_algorithm("heap");
        assert_eq!(error.to_string(), "unsupported algorithm: heap");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn parse_error_reports_line() {
        let error = Error::Parse {
            line: 3,
            message: "expected a value".to_string(),
        };
        assert_eq!(error.to_string(), "line 3: expected a value");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.exit_code(), 1);
    }
}
