// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the run reads from and writes to.
/// `Default` is the fixed layout the binary uses; tests point it elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub roster_path: PathBuf,
    pub assignments_path: PathBuf,
    pub out_dir: PathBuf,
    pub container_selector: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(ROSTER_FILE),
            assignments_path: PathBuf::from(ASSIGNMENTS_FILE),
            out_dir: PathBuf::from(OUT_DIR),
            container_selector: CONTAINER_SELECTOR.to_string(),
        }
    }
}

impl Options {
    /// Same file names and selector, rooted under `dir`.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            roster_path: dir.join(file_name(&defaults.roster_path)),
            assignments_path: dir.join(file_name(&defaults.assignments_path)),
            out_dir: dir.join(file_name(&defaults.out_dir)),
            container_selector: defaults.container_selector,
        }
    }
}

fn file_name(p: &std::path::Path) -> &std::ffi::OsStr {
    p.file_name().unwrap_or(p.as_os_str())
}
