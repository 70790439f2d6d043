//! Per-engine working directory

use std::path::{Path, PathBuf};

use crate::guard::PathValidator;
use crate::types::{CmdError, CmdResult};

/// Working directory of one session.
///
/// The only writer is [`SessionState::change_directory`], which stores a path
/// only after the validator has accepted it.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_directory: PathBuf,
}

impl SessionState {
    /// Start a session in the process's current directory
    pub fn from_process() -> CmdResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| CmdError::Config(format!("Could not read current directory: {}", e)))?;
        Ok(Self::starting_at(cwd))
    }

    pub fn starting_at(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_directory: dir.into(),
        }
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    /// Validate `target` relative to the current directory and move there.
    ///
    /// The new directory is not checked for existence; a bad path surfaces as
    /// an execution failure on the next command.
    pub fn change_directory(&mut self, target: &str, paths: &PathValidator) -> CmdResult<&Path> {
        let resolved = paths.validate(target, &self.current_directory)?;
        self.current_directory = resolved;
        Ok(&self.current_directory)
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_change_to_parent() {
        let paths = PathValidator::default();
        let mut session = SessionState::starting_at("/home/user/project");

        let dir = session.change_directory("..", &paths).unwrap();
        assert_eq!(dir, Path::new("/home/user"));
        assert_eq!(session.current_directory(), Path::new("/home/user"));
    }

    #[test]
    fn test_rejected_change_keeps_directory() {
        let paths = PathValidator::default();
        let mut session = SessionState::starting_at("/home/user");

        assert!(session.change_directory("/etc/ssh", &paths).is_err());
        assert_eq!(session.current_directory(), Path::new("/home/user"));
    }

    #[test]
    fn test_from_process_matches_env() {
        let session = SessionState::from_process().unwrap();
        assert_eq!(
            session.current_directory(),
            std::env::current_dir().unwrap().as_path()
        );
    }
}
