//! Command-line interface for res-packer
//!
//! Takes exactly one manifest path, usually by dropping the file onto the
//! executable. Anything else prints a usage hint and exits successfully.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::InvalidEntryPolicy;
use crate::manifest::load_manifest;
use crate::pack::{pack_manifest, ArchiveWriter};

/// Printed when the tool is started without exactly one manifest.
pub const USAGE_LINE: &str = "Drop res list on me!";

/// Pack the files listed in a resource manifest into a 7z archive
#[derive(Parser)]
#[command(name = "res-packer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest file: base directory on the first line, one source path per line after it.
    /// Put `--` before a manifest whose name starts with `-`.
    #[arg(value_name = "MANIFEST")]
    manifests: Vec<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (TOML, or YAML with a .yml/.yaml extension)
    #[arg(short = 'c', long, value_name = "FILE", env = "RES_PACKER_CONFIG")]
    config: Option<PathBuf>,

    /// Archive to create (default: Archive.7z in the working directory)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum nesting depth beyond which a path is treated as external
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Report and skip malformed entries instead of stopping
    #[arg(long)]
    skip_invalid: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output: self.output.clone(),
            max_nesting_depth: self.max_depth,
            on_invalid_entry: self.skip_invalid.then_some(InvalidEntryPolicy::Skip),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    let [manifest_path] = cli.manifests.as_slice() else {
        tracing::debug!(count = cli.manifests.len(), "expected exactly one manifest");
        println!("{USAGE_LINE}");
        return Ok(());
    };

    let config = merge_cli_with_config(load_config(cli.config.as_deref())?, cli.overrides());
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");

    let manifest = load_manifest(manifest_path)?;
    let archive = ArchiveWriter::create(&config.output)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pack_manifest(&manifest, &config.pack_options(), archive, &mut out)
        .with_context(|| format!("Packing {} stopped", manifest_path.display()))?;

    Ok(())
}
