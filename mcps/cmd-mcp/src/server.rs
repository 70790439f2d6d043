//! MCP Server implementation for policy-gated command execution
//!
//! This module defines the MCP server that exposes the command engine as tools.
//! Handler implementations are in the handlers module.

use std::sync::Arc;

use mcp_common::{CallToolResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;

use crate::engine::CommandEngine;
use crate::handlers;
use crate::params::*;
use crate::types::{CmdResult, Config};

/// The Cmd MCP Server
#[derive(Clone)]
pub struct CmdMcpServer {
    engine: Arc<RwLock<CommandEngine>>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl CmdMcpServer {
    /// Create a server with a fresh engine built from `config`
    pub fn with_config(config: &Config) -> CmdResult<Self> {
        Ok(Self::with_engine(CommandEngine::new(config)?))
    }

    pub fn with_engine(engine: CommandEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Run a command through the host shell in the session's current directory. Pipes, redirects, '&' and ';' are rejected, as are destructive commands such as del, rm and format."
    )]
    async fn execute_command(
        &self,
        Parameters(params): Parameters<ExecuteCommandParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execute_command(&self.engine, params).await
    }

    #[tool(
        description = "Change the session's current directory. Relative paths resolve against the current directory; system directories are refused."
    )]
    async fn change_directory(
        &self,
        Parameters(params): Parameters<ChangeDirectoryParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::change_directory(&self.engine, params).await
    }

    #[tool(description = "Get the session's current directory")]
    async fn get_current_directory(&self) -> Result<CallToolResult, McpError> {
        handlers::get_current_directory(&self.engine).await
    }

    #[tool(description = "List the denied command names and denied path prefixes")]
    async fn list_restrictions(&self) -> Result<CallToolResult, McpError> {
        handlers::list_restrictions(&self.engine).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for CmdMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Runs host shell commands in a per-session working directory. \
                 Commands and directory changes are checked against denylists \
                 and credential-looking output is redacted. The checks are \
                 best-effort and are not a sandbox."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
