// src/roster.rs
// Roster page → one HTML fragment per student, keyed by student number.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::consts::STUDENT_ID_LEN;
use crate::core::html::{outer_html, parse_selector, visible_text};
use crate::core::sanitize::{first_digit_run, preview};
use crate::error::{Error, Result};

/// 8-digit student number, kept as text so leading zeros survive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: StudentId,
    /// 1-based index of the container in document order.
    pub position: usize,
    /// The container's outer HTML.
    pub fragment: String,
}

#[derive(Debug, Default)]
pub struct Roster {
    entries: BTreeMap<StudentId, RosterEntry>,
    /// Containers without a student number, as `Error::MalformedRosterEntry`.
    pub skipped: Vec<Error>,
}

impl Roster {
    pub fn get(&self, id: &StudentId) -> Option<&RosterEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &StudentId> {
        self.entries.keys()
    }

    /// Insert, replacing any earlier entry with the same id. Returns the replaced one.
    pub fn insert(&mut self, entry: RosterEntry) -> Option<RosterEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }
}

/// Read and extract the roster page at `path`.
pub fn load_roster(path: &Path, selector: &str) -> Result<Roster> {
    let html = fs::read_to_string(path).map_err(|e| Error::from_input(path, e))?;
    debug!("read {} bytes from {}", html.len(), path.display());
    extract_roster(&html, selector)
}

/// Every element matching `selector` is one student. The student number is the
/// first run of exactly eight digits in the element's text.
///
/// Containers with no such run are skipped and kept in `Roster::skipped`.
/// A later container with an already-seen number replaces the earlier one.
pub fn extract_roster(html: &str, selector: &str) -> Result<Roster> {
    let sel = parse_selector(selector)?;
    let doc = Html::parse_document(html);

    let mut roster = Roster::default();
    let mut containers = 0usize;

    for (i, el) in doc.select(&sel).enumerate() {
        let position = i + 1;
        containers = position;
        let text = visible_text(el);

        let Some(run) = first_digit_run(&text, STUDENT_ID_LEN) else {
            let err = Error::MalformedRosterEntry { position };
            warn!("{err}; skipped (text: {:?})", preview(&text, 60));
            roster.skipped.push(err);
            continue;
        };

        let entry = RosterEntry {
            id: StudentId::new(run),
            position,
            fragment: outer_html(el),
        };
        if let Some(prev) = roster.insert(entry) {
            warn!(
                "student {} appears in containers #{} and #{}; keeping #{}",
                prev.id, prev.position, position, position
            );
        }
    }

    if containers == 0 {
        warn!("no roster containers matched {selector:?}");
    }

    let ids: Vec<&str> = roster.ids().map(StudentId::as_str).collect();
    info!("extracted data for the following students: {}", ids.join(" "));
    info!(
        "that's {} students overall ({} containers, {} skipped)",
        roster.len(),
        containers,
        roster.skipped.len()
    );

    Ok(roster)
}
