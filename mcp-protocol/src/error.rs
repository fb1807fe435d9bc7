//! Mapping from core task errors to MCP protocol errors.

use rmcp::ErrorData;
use todo_core::TaskError;

/// Convert a core error into the protocol error returned to the client.
///
/// Caller mistakes (a task that does not exist, a validation failure)
/// become invalid-params errors; anything that went wrong on our side of
/// the boundary (configuration, the remote API, the network, decoding)
/// becomes an internal error. The display message is carried over
/// verbatim so the client sees the concrete detail.
pub fn into_mcp_error(err: TaskError) -> ErrorData {
    let message = err.to_string();
    match err {
        TaskError::NotFound(_) | TaskError::Validation(_) => {
            ErrorData::invalid_params(message, None)
        }
        TaskError::Configuration(_)
        | TaskError::Api { .. }
        | TaskError::Network(_)
        | TaskError::Serialization(_)
        | TaskError::Internal(_) => ErrorData::internal_error(message, None),
    }
}
