// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{error, info};

use crate::config::consts::PAGE_EXT;
use crate::core::sanitize::is_safe_file_stem;
use crate::error::{Error, Result};
use crate::page::GeneratedPage;
use crate::progress::Progress;

/// Outcome of writing every group's page.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// One `Error::OutputWriteFailure` per group that could not be written.
    pub failures: Vec<Error>,
}

impl WriteReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Paths that failed, in write order.
    pub fn failed_paths(&self) -> Vec<PathBuf> {
        self.failures
            .iter()
            .filter_map(|e| match e {
                Error::OutputWriteFailure { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Create `dir` (and parents) if missing. Fails if the path exists but is not a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::OutputDirectory {
            path: dir.to_path_buf(),
            reason: "path exists but is not a directory".into(),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::OutputDirectory {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// `<dir>/<group>.html`. The label is used verbatim, so it must not be able
/// to leave `dir`.
pub fn page_path(dir: &Path, group: &str) -> std::result::Result<PathBuf, PathBuf> {
    let path = dir.join(format!("{group}.{PAGE_EXT}"));
    if is_safe_file_stem(group) { Ok(path) } else { Err(path) }
}

/// Write each page into `out_dir`, overwriting existing files.
/// A failed group is recorded in the report and the rest are still written.
pub fn write_pages(
    out_dir: &Path,
    pages: &[GeneratedPage],
    mut progress: Option<&mut dyn Progress>,
) -> Result<WriteReport> {
    ensure_directory(out_dir)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut report = WriteReport::default();
    for page in pages {
        match write_page(out_dir, page) {
            Ok(path) => {
                info!("wrote {}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&page.group, &path);
                }
                report.written.push(path);
            }
            Err(err) => {
                error!("{err}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&page.group, &err);
                }
                report.failures.push(err);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(report)
}

fn write_page(out_dir: &Path, page: &GeneratedPage) -> Result<PathBuf> {
    let path = page_path(out_dir, &page.group).map_err(|path| Error::OutputWriteFailure {
        group: page.group.clone(),
        path,
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "group label is not usable as a file name",
        ),
    })?;

    fs::write(&path, &page.html).map_err(|source| Error::OutputWriteFailure {
        group: page.group.clone(),
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
