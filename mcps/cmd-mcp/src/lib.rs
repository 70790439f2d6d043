//! Cmd MCP Library
//!
//! Remote execution of host shell commands with a per-session working
//! directory. Commands and directory changes pass a denylist first, and
//! credential-looking output is redacted before it is returned.
//!
//! The policy is best-effort. It is not a sandbox: there is no isolation, no
//! timeout and no resource limit, and quoting or substitution tricks get past
//! the checks.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use cmd_mcp::{CommandEngine, Config};
//!
//! let mut engine = CommandEngine::new(&Config::default())?;
//! let result = engine.execute("echo Hello World").await?;
//! engine.change_directory("..")?;
//! ```

pub mod config;
pub mod engine;
pub mod executor;
pub mod guard;
pub mod handlers;
pub mod http;
pub mod params;
pub mod sanitize;
pub mod server;
pub mod session;
pub mod types;

// Re-export main types
pub use engine::CommandEngine;
pub use server::CmdMcpServer;
pub use types::{CmdError, CmdResult, CommandResult, Config};

// Re-export parameter types for direct API usage
pub use params::*;
