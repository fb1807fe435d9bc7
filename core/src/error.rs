use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for the Todoist MCP server.
///
/// These errors cover every failure mode between the caller and the remote
/// task service: local validation, missing configuration, transport
/// failures, and error responses from the service itself. The protocol
/// layer maps each variant onto an MCP error response; nothing below it
/// retries or swallows failures.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TaskError;
///
/// let not_found = TaskError::task_not_found("6X7rM8997g3RQmvh");
/// assert!(not_found.is_not_found());
///
/// let rate_limited = TaskError::api(429, "Too Many Requests");
/// assert!(!rate_limited.is_recoverable());
///
/// let outage = TaskError::api(503, "Service Unavailable");
/// assert!(outage.is_recoverable());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task or project not found by the given identifier
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Validation error with details
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid configuration (credential, base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote service answered with a non-success status
    #[error("Todoist API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Remote response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Create a not found error for a task ID
    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound(format!("Task with ID '{id}' not found"))
    }

    /// Create a validation error for an empty required field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create a validation error for a priority outside the 1-4 range
    pub fn invalid_priority(value: u8) -> Self {
        Self::Validation(format!(
            "Priority must be between 1 and 4, got {value}"
        ))
    }

    /// Create a configuration error for a missing credential
    pub fn missing_token() -> Self {
        Self::Configuration("TODOIST_API_TOKEN not set".to_string())
    }

    /// Create an API error from a response status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    /// Check if this error indicates a configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, TaskError::Configuration(_))
    }

    /// Check if retrying the operation could plausibly succeed.
    ///
    /// True for transport failures and server-side (5xx) statuses. This
    /// server never retries on its own; the predicate exists so callers
    /// embedding the client can decide.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TaskError::Network(_) => true,
            TaskError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = TaskError::task_not_found("8485093748");
        assert_eq!(
            error,
            TaskError::NotFound("Task with ID '8485093748' not found".to_string())
        );
        assert!(error.is_not_found());

        let error = TaskError::empty_field("content");
        assert!(error.is_validation());

        let error = TaskError::invalid_priority(7);
        assert_eq!(
            error,
            TaskError::Validation("Priority must be between 1 and 4, got 7".to_string())
        );

        let error = TaskError::api(403, "Forbidden");
        assert_eq!(
            error,
            TaskError::Api {
                status: 403,
                message: "Forbidden".to_string()
            }
        );

        let error = TaskError::missing_token();
        assert!(error.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let error = TaskError::NotFound("Task with ID '42' not found".to_string());
        assert_eq!(format!("{error}"), "Task not found: Task with ID '42' not found");

        let error = TaskError::api(429, "Too Many Requests");
        assert_eq!(format!("{error}"), "Todoist API error (429): Too Many Requests");

        let error = TaskError::Validation("Invalid input".to_string());
        assert_eq!(format!("{error}"), "Validation error: Invalid input");

        let error = TaskError::Network("connection refused".to_string());
        assert_eq!(format!("{error}"), "Network error: connection refused");
    }

    #[test]
    fn test_error_predicates() {
        assert!(TaskError::NotFound("test".to_string()).is_not_found());
        assert!(!TaskError::Validation("test".to_string()).is_not_found());

        assert!(TaskError::Validation("test".to_string()).is_validation());
        assert!(!TaskError::Network("test".to_string()).is_validation());

        assert!(TaskError::Configuration("test".to_string()).is_configuration());
        assert!(!TaskError::Internal("test".to_string()).is_configuration());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(TaskError::Network("timeout".to_string()).is_recoverable());
        assert!(TaskError::api(500, "Internal Server Error").is_recoverable());
        assert!(TaskError::api(503, "Service Unavailable").is_recoverable());

        assert!(!TaskError::api(401, "Unauthorized").is_recoverable());
        assert!(!TaskError::api(404, "Not Found").is_recoverable());
        assert!(!TaskError::Validation("bad".to_string()).is_recoverable());
        assert!(!TaskError::Configuration("no token".to_string()).is_recoverable());
    }
}
