//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sends logs to stderr so stdout stays
//!   free for the MCP protocol
//! - **Results**: [`json_success`] for structured tool responses
//! - **Errors**: short constructors for the MCP error codes tools return
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{invalid_request, json_success, CallToolResult, McpError};
//!
//! fn my_tool(&self, input: &str) -> Result<CallToolResult, McpError> {
//!     if input.is_empty() {
//!         return Err(invalid_request("input is empty"));
//!     }
//!     json_success(&compute(input))
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

pub use error::{internal_error, invalid_request, McpResult};
pub use init::init_tracing;
pub use result::json_success;

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
