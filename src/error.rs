// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid container selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Container at `position` (1-based) has no 8-digit run in its text.
    #[error("malformed roster entry: container #{position} has no 8-digit student number")]
    MalformedRosterEntry { position: usize },

    #[error("malformed assignment row at line {line}: expected at least 2 fields, got {fields}")]
    MalformedAssignmentRow { line: u64, fields: usize },

    #[error("output directory {}: {reason}", path.display())]
    OutputDirectory { path: PathBuf, reason: String },

    #[error("cannot write page for group {group:?} to {}: {source}", path.display())]
    OutputWriteFailure {
        group: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} page(s) could not be written: {}", paths.len(), list_paths(paths))]
    WriteFailures { paths: Vec<PathBuf> },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Map an I/O failure on an input file to the matching variant.
    pub fn from_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Error::MissingInputFile { path },
            _ => Error::ReadInput { path, source },
        }
    }
}
