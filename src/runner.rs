// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    assignments::load_assignments,
    config::Options,
    error::{Error, Result},
    file::write_pages,
    page::generate_pages,
    progress::Progress,
    roster::load_roster,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub students_on_pages: usize,
    pub students_not_found: usize,
}

/// Extract the roster, load assignments, then write one page per group.
///
/// Both inputs are read in full before anything is written. Input and output
/// directory problems abort the run; a group whose page cannot be written does
/// not, but the run then returns `Error::WriteFailures` after every group has
/// been attempted.
pub fn run(opts: &Options, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let roster = load_roster(&opts.roster_path, &opts.container_selector)?;
    let table = load_assignments(&opts.assignments_path)?;

    let pages = generate_pages(&table, &roster);
    let students_on_pages = pages.iter().map(|p| p.matched.len()).sum();
    let students_not_found = pages.iter().map(|p| p.unmatched.len()).sum();

    let report = write_pages(&opts.out_dir, &pages, progress)?;
    if !report.is_ok() {
        return Err(Error::WriteFailures { paths: report.failed_paths() });
    }

    info!(
        "{} pages in {} ({} students placed, {} not found)",
        report.written.len(),
        opts.out_dir.display(),
        students_on_pages,
        students_not_found
    );

    Ok(RunSummary {
        files_written: report.written,
        students_on_pages,
        students_not_found,
    })
}
