//! Relative-path classification for manifest entries.
//!
//! Entries are located by their parent-directory tokens (`..\`). Entries with
//! at most `max_nesting_depth` tokens live inside the base directory and keep
//! everything after the last token. Deeper entries point somewhere else, so
//! the first path component after the last token is dropped as well.

use crate::domain::{
    ArchiveEntry, Placement, SourceEntry, DEFAULT_MAX_NESTING_DEPTH, PARENT_DIR_TOKEN,
    PATH_SEPARATOR,
};
use crate::error::{PackError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathClassifier {
    max_nesting_depth: usize,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING_DEPTH)
    }
}

impl PathClassifier {
    /// `max_nesting_depth` is the maximum nesting depth beyond which a path is
    /// treated as external.
    pub fn new(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    /// Compute the archive member name for `entry`.
    pub fn classify(&self, entry: &SourceEntry) -> Result<ArchiveEntry> {
        let raw = entry.raw.as_str();
        let invalid = |reason| PackError::InvalidEntry {
            line: entry.line,
            entry: raw.to_string(),
            reason,
        };

        let last = raw
            .rfind(PARENT_DIR_TOKEN)
            .ok_or_else(|| invalid("no parent-directory token"))?;
        let after_token = last + PARENT_DIR_TOKEN.len();
        let depth = raw.matches(PARENT_DIR_TOKEN).count();

        let (relative, placement) = if depth <= self.max_nesting_depth {
            (&raw[after_token..], Placement::BaseDir)
        } else {
            let sep = raw[after_token..]
                .find(PATH_SEPARATOR)
                .ok_or_else(|| invalid("no separator after last parent-directory token"))?;
            (
                &raw[after_token + sep + PATH_SEPARATOR.len_utf8()..],
                Placement::External,
            )
        };

        let relative = relative.trim();
        if relative.is_empty() {
            return Err(invalid("empty relative path"));
        }

        tracing::trace!(entry = raw, depth, ?placement, relative, "classified");
        Ok(ArchiveEntry {
            source: entry.clone(),
            relative_path: relative.to_string(),
            placement,
        })
    }
}
