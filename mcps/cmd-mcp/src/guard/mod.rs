//! Command and path guards
//!
//! Both guards are denylists and only inspect strings. They are a coarse
//! tripwire against obvious mistakes, not a containment boundary: quoting,
//! path-qualified executables, variable expansion and command substitution
//! all pass through untouched.

mod command;
mod path;

pub use command::{CommandValidator, DANGEROUS_CHARS, DEFAULT_RESTRICTED_COMMANDS};
pub use path::{resolve, PathValidator, DEFAULT_RESTRICTED_PATHS};

use crate::types::CmdError;

/// Verdict of a [`CommandPolicy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
}

impl Decision {
    /// Convert into a result, turning a denial into a validation error
    pub fn into_result(self) -> Result<(), CmdError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(CmdError::Validation(reason)),
        }
    }
}

/// Decides whether a command string may be handed to the shell.
///
/// The executor only sees this trait, so a stricter policy (an allowlist,
/// or one that consults an external service) can replace the default
/// [`CommandValidator`] without touching execution.
pub trait CommandPolicy: Send + Sync {
    fn decide(&self, command: &str) -> Decision;

    /// Denied command names, for reporting. Empty for policies that are not
    /// name-based.
    fn restricted_commands(&self) -> Vec<String> {
        Vec::new()
    }
}
