//! Typed view of the pre-extracted command schema.
//!
//! The document is a JSON array of records shaped like
//! `{"cmd": "/ip/address", "result": {"subcmds": [...], "args": [...]}}`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One node of the router's command tree as extracted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandRecord {
    /// Slash-delimited wire path, e.g. `/ip/address`.
    #[serde(rename = "cmd")]
    pub cmd_path: String,
    pub result: CommandResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandResult {
    /// Bare names of the immediate children.
    pub subcmds: Vec<String>,
    /// Argument names accepted by this exact path.
    pub args: Vec<String>,
}

pub fn parse_schema(text: &str) -> serde_json::Result<Vec<CommandRecord>> {
    serde_json::from_str(text)
}

/// Reads and deserializes the schema at `path`.
pub fn load_schema(path: &Path) -> Result<Vec<CommandRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadSchema {
        path: path.to_owned(),
        source,
    })?;
    let records = parse_schema(&content).map_err(|source| Error::ParseSchema {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded schema");
    Ok(records)
}
