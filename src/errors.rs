//! Error types for the TripBuddy assistant
//!
//! Provides typed failures for the tool framework plus a crate-wide
//! error for everything the assistant and CLI surface.

use thiserror::Error;

/// Errors raised by the tool registry and invocation framework
#[derive(Error, Debug)]
pub enum ToolError {
    /// Execute was called with an unregistered tool name
    #[error("tool '{name}' is not registered")]
    NotFound { name: String },

    /// A required parameter was missing or a supplied value failed
    /// both the exact type check and coercion
    #[error("argument validation failed for tool '{name}'")]
    InvalidArguments { name: String },

    /// The underlying tool function raised during invocation
    #[error("tool '{name}' failed: {source}")]
    ExecutionFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Registration was attempted under a name that is already taken
    #[error("tool '{name}' is already registered")]
    DuplicateTool { name: String },

    /// The tool definition itself was rejected by the builder
    #[error("invalid definition for tool '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },
}

/// Main error type for the assistant system
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Tool framework errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Model backend errors
    #[error("backend error: {0}")]
    Backend(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ToolError::NotFound {
            name: "teleport".to_string(),
        };
        assert!(err.to_string().contains("teleport"));
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn test_execution_failed_keeps_source() {
        let err = ToolError::ExecutionFailed {
            name: "calculate_budget".to_string(),
            source: anyhow::anyhow!("division by zero"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("calculate_budget"));
        assert!(rendered.contains("division by zero"));
    }

    #[test]
    fn test_tool_error_converts_to_assistant_error() {
        let err: AssistantError = ToolError::DuplicateTool {
            name: "convert_currency".to_string(),
        }
        .into();
        assert!(err.to_string().contains("convert_currency"));
    }
}
