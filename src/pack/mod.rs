//! The pack loop: classify each manifest entry and write it to the archive.

use std::io::Write;

use crate::classify::PathClassifier;
use crate::domain::{InvalidEntryPolicy, Manifest, PackSummary};
use crate::error::{PackError, Result};

pub mod archive;

pub use archive::ArchiveWriter;

/// Progress line printed for an entry whose source file cannot be read.
pub const FILE_NOT_FOUND_LINE: &str = ">>> File not found!";

/// Progress line printed for a rejected entry under [`InvalidEntryPolicy::Skip`].
pub const INVALID_ENTRY_LINE: &str = ">>> Invalid entry!";

#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptions {
    pub classifier: PathClassifier,
    pub on_invalid_entry: InvalidEntryPolicy,
}

/// Write every entry of `manifest` into `archive`, reporting progress to `out`.
///
/// One relative path line is written per classified entry, before the file is
/// read, followed by [`FILE_NOT_FOUND_LINE`] when the source is missing. The
/// archive is finalized on every return path.
pub fn pack_manifest<W: Write>(
    manifest: &Manifest,
    options: &PackOptions,
    mut archive: ArchiveWriter,
    out: &mut W,
) -> Result<PackSummary> {
    let mut summary = PackSummary::default();
    tracing::debug!(
        base = %manifest.base_marker,
        entries = manifest.len(),
        max_nesting_depth = options.classifier.max_nesting_depth(),
        "packing manifest"
    );

    for source in &manifest.entries {
        let entry = match options.classifier.classify(source) {
            Ok(entry) => entry,
            Err(err) if options.on_invalid_entry == InvalidEntryPolicy::Skip => {
                tracing::warn!("{err}");
                emit(out, INVALID_ENTRY_LINE)?;
                summary.invalid += 1;
                continue;
            }
            Err(err) => {
                // Keep what was written so far.
                archive.finish()?;
                return Err(err);
            }
        };

        emit(out, &entry.relative_path)?;

        match archive.add(source.path(), &entry.relative_path) {
            Ok(()) => summary.written += 1,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(line = source.line, "{err}");
                emit(out, FILE_NOT_FOUND_LINE)?;
                summary.missing += 1;
            }
            Err(err) => return Err(err),
        }
    }

    archive.finish()?;
    tracing::info!(
        written = summary.written,
        missing = summary.missing,
        invalid = summary.invalid,
        "pack complete"
    );
    Ok(summary)
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(PackError::Output)
}
