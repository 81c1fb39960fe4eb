//! 7z archive output

use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{PackError, Result};

/// Owns the output archive for the duration of a run.
///
/// The archive header is written by [`ArchiveWriter::finish`], or by `Drop`
/// when the writer goes away early, so members added before a fatal error
/// stay readable.
pub struct ArchiveWriter {
    path: PathBuf,
    inner: Option<SevenZWriter<File>>,
    entries: usize,
}

impl ArchiveWriter {
    /// Create (or truncate) the archive at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = SevenZWriter::create(&path).map_err(|e| PackError::Archive {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(archive = %path.display(), "archive opened");
        Ok(Self {
            path,
            inner: Some(inner),
            entries: 0,
        })
    }

    /// Number of members written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Store the file at `source` under the member name `relative`.
    ///
    /// The whole file is read before the archive is touched, so any failure
    /// to open or read it yields [`PackError::SourceFileMissing`] and leaves
    /// the archive unchanged.
    pub fn add(&mut self, source: &Path, relative: &str) -> Result<()> {
        let bytes = fs::read(source).map_err(|source_err| PackError::SourceFileMissing {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        let Some(writer) = self.inner.as_mut() else {
            return Err(PackError::Archive {
                path: self.path.clone(),
                message: "archive already finalized".to_string(),
            });
        };

        let size = bytes.len();
        let entry = SevenZArchiveEntry::from_path(source, relative.to_string());
        writer
            .push_archive_entry(entry, Some(Cursor::new(bytes)))
            .map_err(|e| PackError::Archive {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        self.entries += 1;
        tracing::debug!(source = %source.display(), relative, size, "member written");
        Ok(())
    }

    /// Write the archive header and close the file. Returns the member count.
    pub fn finish(mut self) -> Result<usize> {
        self.finalize()?;
        Ok(self.entries)
    }

    fn finalize(&mut self) -> Result<()> {
        if let Some(writer) = self.inner.take() {
            writer.finish().map_err(|e| PackError::Archive {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
            tracing::debug!(
                archive = %self.path.display(),
                entries = self.entries,
                "archive finalized"
            );
        }
        Ok(())
    }
}

impl Drop for ArchiveWriter {
    fn drop(&mut self) {
        if let Err(err) = self.finalize() {
            tracing::warn!("{err}");
        }
    }
}
