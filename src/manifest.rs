//! Manifest loading

use std::fs;
use std::path::Path;

use crate::domain::{Manifest, SourceEntry};
use crate::error::{PackError, Result};

const BOM: char = '\u{feff}';

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|source| PackError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&content).ok_or_else(|| PackError::EmptyManifest {
        path: path.to_path_buf(),
    })
}

/// Split manifest text into a base marker and source entries.
///
/// Returns `None` when the text holds no lines.
pub fn parse_manifest(content: &str) -> Option<Manifest> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut lines = content.lines().enumerate();

    let (_, first) = lines.next()?;
    let base_marker = first.trim().to_string();

    // Blank lines stay entries; the classifier rejects them like any other
    // line without a parent-directory token.
    let entries = lines
        .map(|(idx, line)| SourceEntry::new(line.trim(), idx + 1))
        .collect();

    Some(Manifest {
        base_marker,
        entries,
    })
}
