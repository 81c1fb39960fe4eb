//! Error types for res-packer
//!
//! Only [`PackError::SourceFileMissing`] is recovered by the pack loop;
//! every other variant ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for packing operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Manifest file cannot be opened, read, or decoded as UTF-8
    #[error("Cannot read manifest {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest has no lines at all, so there is no base marker
    #[error("Manifest {} is empty", path.display())]
    EmptyManifest { path: PathBuf },

    /// Source entry does not match the expected path pattern
    #[error("Invalid entry on line {line} ({entry:?}): {reason}")]
    InvalidEntry {
        line: usize,
        entry: String,
        reason: &'static str,
    },

    /// Source file cannot be located or read
    #[error("Source file {} cannot be read: {source}", path.display())]
    SourceFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output archive cannot be created, written, or finalized
    #[error("Archive {} failed: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// Progress output cannot be written
    #[error("Cannot write progress output: {0}")]
    Output(#[source] std::io::Error),

    /// Configuration cannot be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PackError {
    /// Whether the pack loop may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PackError::SourceFileMissing { .. })
    }
}

impl From<figment::Error> for PackError {
    fn from(err: figment::Error) -> Self {
        PackError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
