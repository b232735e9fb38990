//! Error types and exit codes for seedweave
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (graph source failure, IO)
//! - 2: Usage error (bad flags/args, invalid argument)
//! - 3: Data error (unknown node, unreadable graph document)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node, invalid graph document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or sampling them
#[derive(Error, Debug)]
pub enum SeedweaveError {
    // Usage errors (exit code 2)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid graph document: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("graph source failed to {operation} for {node}: {reason}")]
    Source {
        operation: String,
        node: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SeedweaveError {
    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl std::fmt::Display) -> Self {
        SeedweaveError::InvalidArgument(reason.to_string())
    }

    /// Create an error for a failed graph source call
    pub fn source_failure(
        operation: &str,
        node: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        SeedweaveError::Source {
            operation: operation.to_string(),
            node: node.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a node missing from the graph
    pub fn not_found(id: impl Into<String>) -> Self {
        SeedweaveError::NodeNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SeedweaveError::InvalidArgument(_) | SeedweaveError::UsageError(_) => ExitCode::Usage,

            SeedweaveError::NodeNotFound { .. }
            | SeedweaveError::InvalidGraph { .. }
            | SeedweaveError::Json(_)
            | SeedweaveError::Toml(_) => ExitCode::Data,

            SeedweaveError::Source { .. } | SeedweaveError::Io(_) | SeedweaveError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SeedweaveError::InvalidArgument(_) => "invalid_argument",
            SeedweaveError::UsageError(_) => "usage_error",
            SeedweaveError::NodeNotFound { .. } => "node_not_found",
            SeedweaveError::InvalidGraph { .. } => "invalid_graph",
            SeedweaveError::Source { .. } => "source_failure",
            SeedweaveError::Io(_) => "io_error",
            SeedweaveError::Json(_) => "json_error",
            SeedweaveError::Toml(_) => "toml_error",
            SeedweaveError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for seedweave operations
pub type Result<T> = std::result::Result<T, SeedweaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SeedweaveError::invalid_argument("seeds must not be empty").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(SeedweaveError::not_found("n1").exit_code(), ExitCode::Data);
        assert_eq!(
            SeedweaveError::source_failure("fetch neighbors", "n1", "timeout").exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = SeedweaveError::not_found("n42").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(json["error"]["message"], "node not found: n42");
    }

    #[test]
    fn test_bail_invalid_macro() {
        fn check(n: usize) -> Result<usize> {
            if n == 0 {
                crate::bail_invalid!("target must be positive");
            }
            Ok(n)
        }
        assert!(matches!(check(0), Err(SeedweaveError::InvalidArgument(_))));
        assert_eq!(check(3).unwrap(), 3);
    }
}
