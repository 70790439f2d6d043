//! Command execution
//!
//! Every command is checked by the policy, then run through the host shell in
//! the given directory. Output is buffered in full and sanitized before it is
//! returned. There is no timeout and no output cap.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;

use tokio::process::Command;

use crate::guard::{CommandPolicy, CommandValidator};
use crate::sanitize::OutputSanitizer;
use crate::types::{CmdError, CmdResult, CommandResult, ShellConfig};

#[derive(Clone)]
pub struct Executor {
    policy: Arc<dyn CommandPolicy>,
    shell: ShellConfig,
    sanitizer: OutputSanitizer,
}

impl Executor {
    pub fn new(policy: Arc<dyn CommandPolicy>, shell: ShellConfig) -> Self {
        Self {
            policy,
            shell,
            sanitizer: OutputSanitizer::new(),
        }
    }

    pub fn policy(&self) -> &dyn CommandPolicy {
        self.policy.as_ref()
    }

    /// Validate and run `command` in `cwd`.
    ///
    /// Only a zero exit produces a [`CommandResult`]. Spawn failures, non-zero
    /// exits and signal terminations are all [`CmdError::Execution`].
    pub async fn execute(&self, command: &str, cwd: &Path) -> CmdResult<CommandResult> {
        // 1. Policy check, before anything is spawned
        self.policy.decide(command).into_result()?;

        // 2. Build the shell invocation
        let mut cmd = Command::new(&self.shell.program);
        cmd.arg(&self.shell.arg);
        #[cfg(windows)]
        cmd.raw_arg(command);
        #[cfg(not(windows))]
        cmd.arg(command);
        cmd.current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // 3. Wait for exit with both streams buffered
        let output = cmd.output().await.map_err(|e| {
            CmdError::Execution(format!(
                "could not run {} in {}: {}",
                self.shell.program,
                cwd.display(),
                e
            ))
        })?;

        let stdout = self.sanitizer.sanitize(&String::from_utf8_lossy(&output.stdout));
        let stderr = self.sanitizer.sanitize(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(CmdError::Execution(failure_message(output.status, &stderr)));
        }

        Ok(CommandResult {
            stdout,
            stderr,
            status: 0,
        })
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Arc::new(CommandValidator::default()), ShellConfig::default())
    }
}

fn failure_message(status: ExitStatus, stderr: &str) -> String {
    let head = match status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "terminated without an exit status".to_string(),
    };

    let stderr = stderr.trim();
    if stderr.is_empty() {
        head
    } else {
        format!("{}: {}", head, stderr)
    }
}
