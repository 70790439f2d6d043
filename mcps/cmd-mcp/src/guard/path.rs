//! Path denylist for working-directory changes

use std::path::{Component, Path, PathBuf};

use crate::types::CmdError;

/// System directories of the host OS
#[cfg(windows)]
pub const DEFAULT_RESTRICTED_PATHS: &[&str] = &[
    r"C:\Windows\System32",
    r"C:\Windows\System",
    r"C:\Windows",
];

/// System directories of the host OS
#[cfg(not(windows))]
pub const DEFAULT_RESTRICTED_PATHS: &[&str] = &[
    "/bin", "/boot", "/dev", "/etc", "/proc", "/sbin", "/sys", "/usr/bin", "/usr/sbin",
];

/// Resolve `target` against `base` without touching the filesystem.
///
/// An absolute target replaces the base. `.` segments are dropped and `..`
/// removes the previous component, stopping at the root.
pub fn resolve(target: &str, base: &Path) -> PathBuf {
    let joined = base.join(target);

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    resolved
}

/// Rejects paths that begin with a denied prefix.
///
/// The comparison is a case-insensitive *string* prefix test, not an
/// ancestor test: `C:\Windows` also denies `C:\WindowsApps`.
#[derive(Debug, Clone)]
pub struct PathValidator {
    restricted: Vec<String>,
    /// Lower-cased copies of `restricted`, same order
    folded: Vec<String>,
}

impl PathValidator {
    /// Build a validator from the defaults plus `extra` prefixes
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restricted: Vec<String> = Vec::new();
        let candidates = DEFAULT_RESTRICTED_PATHS
            .iter()
            .map(|p| p.to_string())
            .chain(extra.into_iter().map(|p| p.as_ref().to_string()));

        for prefix in candidates {
            // An empty prefix would deny every path
            if !prefix.is_empty() && !restricted.contains(&prefix) {
                restricted.push(prefix);
            }
        }

        let folded = restricted.iter().map(|p| p.to_lowercase()).collect();
        Self { restricted, folded }
    }

    /// Resolve `target` against `base` and check it against the denylist.
    /// Existence is not checked.
    pub fn validate(&self, target: &str, base: &Path) -> Result<PathBuf, CmdError> {
        let resolved = resolve(target, base);
        let display = resolved.to_string_lossy();
        let lowered = display.to_lowercase();

        if self.folded.iter().any(|prefix| lowered.starts_with(prefix)) {
            return Err(CmdError::Validation(format!(
                "access to path {} is restricted",
                display
            )));
        }

        Ok(resolved)
    }

    pub fn restricted_paths(&self) -> &[String] {
        &self.restricted
    }
}

impl Default for PathValidator {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
