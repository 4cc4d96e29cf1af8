use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// `<prefix><module>.rs`. The prefix is a plain string, so `out/` names a
/// directory while `out/gen_` prefixes file names.
pub fn artifact_path(prefix: &str, module: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}{module}.rs"))
}

/// Writes every rendered file, truncating what was there. Stops at the first
/// failure; files written before it stay on disk.
pub fn write_files(prefix: &str, files: &IndexMap<String, String>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for (module, content) in files {
        let path = artifact_path(prefix, module);
        std::fs::write(&path, content).map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
