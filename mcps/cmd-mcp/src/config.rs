//! Config file discovery

use std::path::{Path, PathBuf};

use crate::types::{CmdError, CmdResult, Config};

pub const CONFIG_ENV: &str = "CMD_MCP_CONFIG";

/// Load config from an explicit path or the standard locations
///
/// Config is searched in order:
/// 1. `explicit` (the `--config` flag, which also reads `CMD_MCP_CONFIG`)
/// 2. `./cmd-mcp.toml`
/// 3. `$XDG_CONFIG_HOME/cmd-mcp/config.toml`
/// 4. `~/.cmd-mcp.toml`
/// 5. Default config if none found
///
/// An explicit path that is missing or invalid is an error. Invalid files in
/// the standard locations are logged and skipped.
pub fn load_config(explicit: Option<&Path>) -> CmdResult<Config> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    for path in search_paths() {
        if !path.exists() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                tracing::warn!("Skipping config {}: {}", path.display(), e);
            }
        }
    }

    tracing::info!("Using default configuration");
    Ok(Config::default())
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("cmd-mcp.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("cmd-mcp").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".cmd-mcp.toml"));
    }

    paths
}

fn read_config(path: &Path) -> CmdResult<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CmdError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| CmdError::Config(format!("{}: {}", path.display(), e)))
}
