//! Error handling for the composite filter
//!
//! Errors are surfaced to the host; nothing here is retried locally.

use thiserror::Error;

/// Result type alias for graph and parameter operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Main error type for parameter, aliasing and wiring operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Parameter Errors
    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    #[error("Invalid value for {name}: expected {expected}, got {got}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        got: String,
    },

    #[error("Value {value} for {name} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown value '{nick}' for enum parameter {name}")]
    UnknownEnumValue { name: String, nick: String },

    // Graph Errors
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    #[error("Node {node} has no {pad} pad")]
    NoSuchPad { node: String, pad: String },

    #[error("Alias {source_name} -> {target}.{target_key} is invalid: {reason}")]
    InvalidAlias {
        source_name: String,
        target: String,
        target_key: String,
        reason: String,
    },

    // Lifecycle Errors
    #[error("Composite node {name} is already attached")]
    AlreadyAttached { name: String },

    // Configuration Errors
    #[error("Invalid assignment '{input}': expected name=value")]
    InvalidAssignment { input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            GraphError::TypeMismatch { .. } => "TYPE_MISMATCH",
            GraphError::OutOfRange { .. } => "OUT_OF_RANGE",
            GraphError::UnknownEnumValue { .. } => "UNKNOWN_ENUM_VALUE",
            GraphError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            GraphError::UnknownNode { .. } => "UNKNOWN_NODE",
            GraphError::NoSuchPad { .. } => "NO_SUCH_PAD",
            GraphError::InvalidAlias { .. } => "INVALID_ALIAS",
            GraphError::AlreadyAttached { .. } => "ALREADY_ATTACHED",
            GraphError::InvalidAssignment { .. } => "INVALID_ASSIGNMENT",
            GraphError::Io(_) => "IO_ERROR",
            GraphError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can fix its input and try again
    ///
    /// Wiring and alias errors come from the operation definition itself,
    /// so retrying with different values cannot help.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownParameter { .. }
                | GraphError::TypeMismatch { .. }
                | GraphError::OutOfRange { .. }
                | GraphError::UnknownEnumValue { .. }
                | GraphError::InvalidAssignment { .. }
                | GraphError::Io(_)
                | GraphError::Serialization(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = GraphError::OutOfRange {
            name: "length".to_string(),
            value: 99.0,
            min: 0.0,
            max: 55.0,
        };
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_wiring_errors_not_recoverable() {
        let err = GraphError::InvalidAlias {
            source_name: "angle".to_string(),
            target: "node-3".to_string(),
            target_key: "angle".to_string(),
            reason: "missing".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_ALIAS");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = GraphError::UnknownEnumValue {
            name: "style".to_string(),
            nick: "sparkly".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown value 'sparkly' for enum parameter style"
        );
    }
}
