use std::path::PathBuf;

use thiserror::Error;

/// Every way a generation run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read schema {}", path.display())]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed schema {}: {source}", path.display())]
    ParseSchema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown command reference `{key}` in subcmds of `{parent}`")]
    UnknownReference { parent: String, key: String },

    #[error("`{name}` (from `{cmd_path}`) is not a valid Rust identifier")]
    InvalidIdentifier { name: String, cmd_path: String },

    #[error("`{name}` is generated twice under `{cmd_path}`")]
    DuplicateName { name: String, cmd_path: String },

    #[error("generated code for `{module}` does not parse")]
    Render {
        module: String,
        #[source]
        source: syn::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
