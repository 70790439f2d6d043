//! Command engine: one session, its validators and its executor

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::executor::Executor;
use crate::guard::{CommandPolicy, CommandValidator, PathValidator};
use crate::session::SessionState;
use crate::types::{CmdResult, CommandResult, Config, RestrictionsResponse};

/// Ties a [`SessionState`] to the policies guarding it.
///
/// `execute` borrows the engine shared and `change_directory` borrows it
/// mutably, so a single engine can't have a directory change race a running
/// command. Transports that share one engine between requests put it behind a
/// `tokio::sync::RwLock`. Independent sessions use independent engines.
pub struct CommandEngine {
    executor: Executor,
    paths: PathValidator,
    session: SessionState,
}

impl CommandEngine {
    /// Engine using the denylist policy, started in the process directory
    pub fn new(config: &Config) -> CmdResult<Self> {
        let policy = CommandValidator::new(&config.policy.restricted_commands);
        Self::with_policy(Arc::new(policy), config)
    }

    /// Engine using a caller-supplied command policy.
    /// Path restrictions still come from `config`.
    pub fn with_policy(policy: Arc<dyn CommandPolicy>, config: &Config) -> CmdResult<Self> {
        Ok(Self {
            executor: Executor::new(policy, config.shell.clone()),
            paths: PathValidator::new(&config.policy.restricted_paths),
            session: SessionState::from_process()?,
        })
    }

    /// Replace the starting directory. Not validated: this is where the
    /// operator put the session, not a client request.
    pub fn starting_at(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session = SessionState::starting_at(dir);
        self
    }

    pub async fn execute(&self, command: &str) -> CmdResult<CommandResult> {
        self.executor
            .execute(command, self.session.current_directory())
            .await
    }

    pub fn change_directory(&mut self, target: &str) -> CmdResult<&Path> {
        self.session.change_directory(target, &self.paths)
    }

    pub fn current_directory(&self) -> &Path {
        self.session.current_directory()
    }

    pub fn restrictions(&self) -> RestrictionsResponse {
        RestrictionsResponse {
            restricted_commands: self.executor.policy().restricted_commands(),
            restricted_paths: self.paths.restricted_paths().to_vec(),
        }
    }
}
