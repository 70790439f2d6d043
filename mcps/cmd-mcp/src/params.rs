//! Parameter types for cmd MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecuteCommandParams {
    #[schemars(description = "The command to run through the host shell")]
    pub command: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChangeDirectoryParams {
    #[schemars(description = "Target directory, absolute or relative to the current directory")]
    pub path: String,
}
