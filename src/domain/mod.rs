//! Core domain types and models
//!
//! A manifest is read once into a [`Manifest`]; each of its entries is turned
//! into an [`ArchiveEntry`] by the classifier and then handed to the writer.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Literal landmark used to classify source paths.
pub const PARENT_DIR_TOKEN: &str = "..\\";

/// Path separator used in manifests and in archive member names.
pub const PATH_SEPARATOR: char = '\\';

/// Token count above which an entry is treated as living outside the base
/// directory.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 3;

/// File name of the archive produced in the working directory.
pub const DEFAULT_ARCHIVE_NAME: &str = "Archive.7z";

/// One manifest line naming a file to archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path as written in the manifest, surrounding whitespace removed
    pub raw: String,

    /// 1-based line number in the manifest
    pub line: usize,
}

impl SourceEntry {
    pub fn new(raw: impl Into<String>, line: usize) -> Self {
        Self {
            raw: raw.into(),
            line,
        }
    }

    /// The entry as a filesystem path to read from.
    pub fn path(&self) -> &Path {
        Path::new(&self.raw)
    }
}

/// A fully loaded manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// First line; only meaningful as classification context
    pub base_marker: String,

    /// Remaining non-blank lines, in file order
    pub entries: Vec<SourceEntry>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which classification branch produced a relative path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Few enough parent-directory tokens to sit inside the base directory
    BaseDir,
    /// Deeper than the nesting limit; the first component after the last
    /// token is dropped
    External,
}

/// A source entry paired with its member name inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: SourceEntry,
    pub relative_path: String,
    pub placement: Placement,
}

/// What to do with an entry the classifier rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Finalize the archive and stop the run
    #[default]
    Abort,
    /// Report the entry and carry on with the next one
    Skip,
}

/// Outcome counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackSummary {
    pub written: usize,
    pub missing: usize,
    pub invalid: usize,
}

impl PackSummary {
    pub fn processed(&self) -> usize {
        self.written + self.missing + self.invalid
    }
}
