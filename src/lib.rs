//! Generates a fluent Rust client for a RouterOS-style command tree.
//!
//! The input is a pre-extracted schema: one record per command path with its
//! immediate sub-commands and accepted arguments. Every internal node becomes
//! a cursor type in its own module, with `cat_*` methods that walk to child
//! categories and `cmd_*` methods that send leaf commands through the
//! consumer-supplied `Client::send_command`.

use std::path::{Path, PathBuf};

pub mod error;
pub mod generator;
pub mod model;
pub mod normalize;
pub mod output;
pub mod schema;

pub use error::{Error, Result};

/// Runs the whole pipeline: load, normalize, validate, render, write.
///
/// Nothing is written unless every reference in the schema resolves.
pub fn run(schema_path: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let records = schema::load_schema(schema_path)?;
    let nodes = normalize::normalize(&records);
    let units = model::build_units(&nodes)?;
    let files = generator::generate(&units)?;
    let written = output::write_files(prefix, &files)?;
    tracing::info!(files = written.len(), prefix, "generated fluent client");
    Ok(written)
}
