//! Command denylist

use std::collections::BTreeSet;

use super::{CommandPolicy, Decision};
use crate::types::CmdError;

/// Command names that are always denied as the first token
pub const DEFAULT_RESTRICTED_COMMANDS: &[&str] = &[
    "format", "del", "rm", "rmdir", "rd", "reg", "regedit", "attrib", "cacls",
];

/// Characters that chain, pipe, redirect or background commands.
/// Any occurrence rejects the whole command; nothing is parsed.
pub const DANGEROUS_CHARS: &[char] = &['|', '>', '<', '&', ';'];

/// Denylist-based command policy
#[derive(Debug, Clone)]
pub struct CommandValidator {
    restricted: BTreeSet<String>,
}

impl CommandValidator {
    /// Build a validator from the defaults plus `extra` names
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let restricted = DEFAULT_RESTRICTED_COMMANDS
            .iter()
            .map(|c| c.to_string())
            .chain(extra.into_iter().map(|c| c.as_ref().trim().to_lowercase()))
            .filter(|c| !c.is_empty())
            .collect();

        Self { restricted }
    }

    pub fn validate(&self, command: &str) -> Result<(), CmdError> {
        self.decide(command).into_result()
    }

    pub fn is_restricted(&self, name: &str) -> bool {
        self.restricted.contains(&name.to_lowercase())
    }
}

impl Default for CommandValidator {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl CommandPolicy for CommandValidator {
    fn decide(&self, command: &str) -> Decision {
        // Only the first token is matched against the denylist
        let Some(base) = command.split_whitespace().next() else {
            return Decision::Deny("empty command".to_string());
        };

        let base = base.to_lowercase();
        if self.restricted.contains(&base) {
            return Decision::Deny(format!("command '{}' is restricted", base));
        }

        if command.contains(DANGEROUS_CHARS) {
            return Decision::Deny("command contains restricted characters".to_string());
        }

        Decision::Allow
    }

    fn restricted_commands(&self) -> Vec<String> {
        self.restricted.iter().cloned().collect()
    }
}
