//! MCP error constructors
//!
//! Tools report failures as [`McpError`] values. The constructors here pick
//! the error code so handlers only supply the message.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// The server failed while handling an otherwise acceptable request
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// The request was understood but refused, e.g. by a policy check.
/// The caller can fix it and retry.
pub fn invalid_request(message: impl Into<String>) -> McpError {
    McpError::invalid_request(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_internal_error() {
        let err = internal_error("spawn failed");
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message, "spawn failed");
    }

    #[test]
    fn test_invalid_request() {
        let err = invalid_request(format!("command '{}' is restricted", "del"));
        assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
        assert!(err.message.contains("'del'"));
    }
}
