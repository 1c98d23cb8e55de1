// src/progress.rs
use std::path::Path;

use crate::error::Error;

/// Per-group write reporting. The binary relies on the log; tests and other
/// callers can hook in here to see each page as it lands.
pub trait Progress {
    /// Called once with the number of pages about to be written.
    fn begin(&mut self, _total: usize) {}

    /// A group's page was written to `path`.
    fn item_done(&mut self, _group: &str, _path: &Path) {}

    /// A group's page could not be written. Later groups are still attempted.
    fn item_failed(&mut self, _group: &str, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
