use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the command schema (JSON)
    schema: PathBuf,
    /// Output path prefix, e.g. `src/fluent/`
    prefix: String,
}

fn configure_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    configure_logging();

    routeros_fluent_generator::run(&cli.schema, &cli.prefix)?;

    Ok(())
}
