//! MCP tool handlers
//!
//! Handlers lock the shared engine, call into it, and translate the outcome
//! into a tool result. Commands share a read lock; a directory change takes
//! the write lock and so waits for running commands to finish.

use mcp_common::{internal_error, invalid_request, json_success, CallToolResult, McpError};
use tokio::sync::RwLock;

use crate::engine::CommandEngine;
use crate::params::*;
use crate::types::{CmdError, DirectoryResponse, ErrorKind};

// ============================================================================
// Helper Functions
// ============================================================================

pub fn cmd_error_to_mcp(err: CmdError) -> McpError {
    match err.kind() {
        ErrorKind::Validation => invalid_request(err.to_string()),
        ErrorKind::Execution | ErrorKind::Config => internal_error(err.to_string()),
    }
}

fn directory_response(engine: &CommandEngine) -> DirectoryResponse {
    DirectoryResponse {
        current_directory: engine.current_directory().display().to_string(),
    }
}

// ============================================================================
// Handler Functions
// ============================================================================

pub async fn execute_command(
    engine: &RwLock<CommandEngine>,
    params: ExecuteCommandParams,
) -> Result<CallToolResult, McpError> {
    let engine = engine.read().await;

    match engine.execute(&params.command).await {
        Ok(result) => json_success(&result),
        Err(e) => {
            tracing::warn!(command = %params.command, "{}", e);
            Err(cmd_error_to_mcp(e))
        }
    }
}

pub async fn change_directory(
    engine: &RwLock<CommandEngine>,
    params: ChangeDirectoryParams,
) -> Result<CallToolResult, McpError> {
    let mut engine = engine.write().await;

    match engine.change_directory(&params.path) {
        Ok(dir) => {
            tracing::info!("Changed directory to {}", dir.display());
            json_success(&directory_response(&engine))
        }
        Err(e) => {
            tracing::warn!(path = %params.path, "{}", e);
            Err(cmd_error_to_mcp(e))
        }
    }
}

pub async fn get_current_directory(
    engine: &RwLock<CommandEngine>,
) -> Result<CallToolResult, McpError> {
    json_success(&directory_response(&*engine.read().await))
}

pub async fn list_restrictions(
    engine: &RwLock<CommandEngine>,
) -> Result<CallToolResult, McpError> {
    json_success(&engine.read().await.restrictions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_invalid_request() {
        let err = cmd_error_to_mcp(CmdError::Validation("empty command".into()));
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_REQUEST);
        assert!(err.message.contains("empty command"));
    }

    #[test]
    fn test_execution_maps_to_internal_error() {
        let err = cmd_error_to_mcp(CmdError::Execution("exited with status 1".into()));
        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
