// src/assignments.rs
// Tutorial assignment export → group label → student numbers.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::config::consts::{CSV_DELIM, CSV_QUOTE};
use crate::core::sanitize::is_numeric;
use crate::error::{Error, Result};
use crate::roster::StudentId;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub ids: Vec<StudentId>,
}

/// Groups in order of first appearance; ids in row order within a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl AssignmentTable {
    pub fn push(&mut self, label: &str, id: StudentId) {
        let idx = match self.index.get(label) {
            Some(&i) => i,
            None => {
                self.groups.push(Group { label: label.to_string(), ids: Vec::new() });
                self.index.insert(label.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].ids.push(id);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, label: &str) -> Option<&Group> {
        self.index.get(label).map(|&i| &self.groups[i])
    }

    /// Number of accepted rows across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.ids.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn load_assignments(path: &Path) -> Result<AssignmentTable> {
    let bytes = fs::read(path).map_err(|e| Error::from_input(path, e))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    parse_assignments(bytes.as_slice()).map_err(|e| match e {
        Error::Csv { source, .. } => Error::Csv { path: path.to_path_buf(), source },
        other => other,
    })
}

/// Comma-separated, `"`-quoted, no header, ragged rows allowed.
///
/// A row counts when its first field is all ASCII digits: that field is the
/// student number and the row's last field is the group label. Everything
/// else (headers, blank lines, notes) is passed over.
pub fn parse_assignments<R: Read>(mut rdr: R) -> Result<AssignmentTable> {
    let mut buf = Vec::new();
    rdr.read_to_end(&mut buf).map_err(|e| Error::Csv {
        path: Default::default(),
        source: e.into(),
    })?;
    let data = buf.strip_prefix(UTF8_BOM).unwrap_or(&buf[..]);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(CSV_DELIM)
        .quote(CSV_QUOTE)
        .from_reader(data);

    let mut table = AssignmentTable::default();
    let mut seen: HashSet<StudentId> = HashSet::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                warn!("assignment row at line {line} unreadable, skipped: {e}");
                continue;
            }
        };
        let Some((id, label)) = accept_row(&record) else { continue };

        if !seen.insert(id.clone()) {
            warn!("student {id} is assigned more than once (again under {label:?})");
        }
        table.push(label, id);
    }

    info!("extracted the following tutorial assignments:");
    for group in table.groups() {
        let ids: Vec<&str> = group.ids.iter().map(StudentId::as_str).collect();
        info!("group {:?} ({} students): {}", group.label, ids.len(), ids.join(" "));
    }
    info!(
        "that's {} students who've been assigned altogether, across {} groups",
        table.total(),
        table.len()
    );

    Ok(table)
}

/// `None` for rows that are not assignments.
fn accept_row(record: &StringRecord) -> Option<(StudentId, &str)> {
    let first = record.get(0)?;
    if !is_numeric(first) {
        return None;
    }
    if record.len() < 2 {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let err = Error::MalformedAssignmentRow { line, fields: record.len() };
        debug!("{err}; skipped");
        return None;
    }
    let label = record.get(record.len() - 1)?;
    Some((StudentId::new(first), label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> AssignmentTable {
        parse_assignments(text.as_bytes()).unwrap()
    }

    fn ids(table: &AssignmentTable, label: &str) -> Vec<String> {
        table
            .get(label)
            .map(|g| g.ids.iter().map(|i| i.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn numeric_rows_go_to_last_column_group() {
        let t = parse(
            "Student,Name,Program,Group\n\
             20231234,Ann Lee,BSc,GroupA\n\
             20239876,Bo Chan,BA,GroupB\n\
             20235555,Cy Dee,BSc,GroupA\n",
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.total(), 3);
        assert_eq!(ids(&t, "GroupA"), vec!["20231234", "20235555"]);
        assert_eq!(ids(&t, "GroupB"), vec!["20239876"]);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let t = parse("1,Z\n2,A\n3,Z\n4,M\n");
        let labels: Vec<&str> = t.groups().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Z", "A", "M"]);
    }

    #[test]
    fn non_numeric_first_column_adds_nothing() {
        let t = parse("abc,x,GroupC\n#note,,GroupC\n 20231234,x,GroupC\n,x,GroupC\n");
        assert!(t.get("GroupC").is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn blank_and_short_rows_do_not_crash() {
        let t = parse("\n20231234\n\n20230001,GroupA\n");
        assert_eq!(t.total(), 1);
        assert_eq!(ids(&t, "GroupA"), vec!["20230001"]);
    }

    #[test]
    fn quoted_fields_with_commas() {
        let t = parse("20231234,\"Lee, Ann\",\"Tut 3, Mon 9am\"\n");
        assert_eq!(ids(&t, "Tut 3, Mon 9am"), vec!["20231234"]);
    }

    #[test]
    fn label_comes_from_last_column_of_ragged_rows() {
        let t = parse("20231234,a,b,c,Late\n20230001,Early\n");
        assert_eq!(ids(&t, "Late"), vec!["20231234"]);
        assert_eq!(ids(&t, "Early"), vec!["20230001"]);
    }

    #[test]
    fn crlf_and_bom_are_tolerated() {
        let t = parse("\u{feff}20231234,GroupA\r\n20230001,GroupA\r\n");
        assert_eq!(ids(&t, "GroupA"), vec!["20231234", "20230001"]);
    }

    #[test]
    fn invalid_utf8_row_is_skipped() {
        let mut data = b"20231234,GroupA\n".to_vec();
        data.extend_from_slice(b"20230001,Gr\xFFoup\n");
        data.extend_from_slice(b"20230002,GroupA\n");
        let t = parse_assignments(data.as_slice()).unwrap();
        assert_eq!(ids(&t, "GroupA"), vec!["20231234", "20230002"]);
    }

    #[test]
    fn each_id_lands_in_exactly_one_group() {
        let t = parse("20231234,x,GroupA\n20239876,x,GroupB\n");
        let hits = t
            .groups()
            .iter()
            .filter(|g| g.ids.contains(&"20231234".into()))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = load_assignments(&path).unwrap_err();
        assert!(matches!(err, Error::MissingInputFile { path: ref p } if *p == path));
    }
}
