//! Type definitions for cmd MCP

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Top-level configuration, read from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Denylist additions. The built-in defaults are always applied on top of
/// these; a config can extend the policy but never shrink it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Extra command names denied as the first token of a command
    #[serde(default, alias = "restrictedCommands")]
    pub restricted_commands: Vec<String>,

    /// Extra path prefixes a session may not change into
    #[serde(default, alias = "restrictedPaths")]
    pub restricted_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Host shell used to run every command
    #[serde(default = "default_shell")]
    pub program: String,

    /// Argument that tells the shell to run the next argument as a command
    #[serde(default = "default_shell_arg")]
    pub arg: String,
}

#[cfg(windows)]
fn default_shell() -> String {
    "cmd".to_string()
}

#[cfg(not(windows))]
fn default_shell() -> String {
    "/bin/sh".to_string()
}

#[cfg(windows)]
fn default_shell_arg() -> String {
    "/C".to_string()
}

#[cfg(not(windows))]
fn default_shell_arg() -> String {
    "-c".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell(),
            arg: default_shell_arg(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Output of a command that ran and exited cleanly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// Response for directory tools
#[derive(Debug, Serialize, Deserialize)]
pub struct DirectoryResponse {
    pub current_directory: String,
}

/// Response for list_restrictions
#[derive(Debug, Serialize, Deserialize)]
pub struct RestrictionsResponse {
    pub restricted_commands: Vec<String>,
    pub restricted_paths: Vec<String>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum CmdError {
    /// Policy rejection; nothing was spawned and no state changed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The subprocess could not run or did not exit cleanly
    #[error("Command execution failed: {0}")]
    Execution(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse error category, for transports that map errors onto status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Execution,
    Config,
}

impl CmdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CmdError::Validation(_) => ErrorKind::Validation,
            CmdError::Execution(_) => ErrorKind::Execution,
            CmdError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type CmdResult<T> = Result<T, CmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_camel_case_keys() {
        let config: Config = toml::from_str(
            r#"
            [policy]
            restrictedCommands = ["shutdown"]
            restrictedPaths = ["/opt/secret"]
            "#,
        )
        .unwrap();

        assert_eq!(config.policy.restricted_commands, vec!["shutdown"]);
        assert_eq!(config.policy.restricted_paths, vec!["/opt/secret"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.policy.restricted_commands.is_empty());
        assert_eq!(config.shell.program, default_shell());
        assert_eq!(config.http.port, 3000);
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            CmdError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(CmdError::Execution("x".into()).kind(), ErrorKind::Execution);
    }
}
