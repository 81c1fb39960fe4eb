//! Res-Packer: pack resource manifests into 7z archives
//!
//! A manifest names a base directory on its first line and one source file
//! per following line. Each source path is mapped to a member name inside the
//! archive by looking at its `..\` tokens, then the file is written into a
//! single 7z archive. Missing source files are reported and skipped.

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod pack;

pub use classify::PathClassifier;
pub use domain::{ArchiveEntry, InvalidEntryPolicy, Manifest, PackSummary, Placement, SourceEntry};
pub use error::PackError;
