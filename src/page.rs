// src/page.rs
// One HTML page per tutorial group: matched roster fragments, each with a
// blank sign-in table, plus a "Not found" line for unmatched student numbers.

use std::fmt::Write as _;

use tracing::{info, warn};

use crate::assignments::{AssignmentTable, Group};
use crate::config::consts::{PAGE_TITLE, SIGN_IN_WEEKS, STYLESHEET};
use crate::core::html::escape_text;
use crate::roster::{Roster, RosterEntry, StudentId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPage {
    pub group: String,
    /// Ids rendered on the page, in assignment order.
    pub matched: Vec<StudentId>,
    /// Ids with no roster entry, in assignment order.
    pub unmatched: Vec<StudentId>,
    pub html: String,
}

/// Wrap one roster fragment with the weekly sign-in table.
pub fn render_fragment(entry: &RosterEntry) -> String {
    let mut out = String::with_capacity(entry.fragment.len() + 512);
    out.push_str("<div class=\"studentdiv\">\n  ");
    out.push_str(&entry.fragment);
    out.push_str("\n  <div class=\"weekly-sign-in\">\n");
    out.push_str("      <table class=\"sign-in-table\">\n");
    for weeks in SIGN_IN_WEEKS {
        out.push_str("       <tr>\n        ");
        for w in weeks {
            let _ = write!(out, "<th>{w}</th>");
        }
        out.push_str("\n       </tr>\n       <tr>\n        ");
        out.push_str(&"<td></td>".repeat(weeks.len()));
        out.push_str("\n       </tr>\n");
    }
    out.push_str("      </table>\n  </div>\n</div>");
    out
}

/// Build the page for one group. Every id in `ids` ends up in exactly one of
/// `matched` / `unmatched`.
pub fn generate_page(group: &str, ids: &[StudentId], roster: &Roster) -> GeneratedPage {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    let mut student_divs = String::new();

    for id in ids {
        match roster.get(id) {
            Some(entry) => {
                student_divs.push_str("\n\n");
                student_divs.push_str(&render_fragment(entry));
                matched.push(id.clone());
            }
            None => unmatched.push(id.clone()),
        }
    }

    let html = compose_page(group, &student_divs, &unmatched);
    GeneratedPage { group: group.to_string(), matched, unmatched, html }
}

/// Pages for every group, in assignment-table order.
pub fn generate_pages(table: &AssignmentTable, roster: &Roster) -> Vec<GeneratedPage> {
    table
        .groups()
        .iter()
        .map(|Group { label, ids }| {
            let page = generate_page(label, ids, roster);
            if page.unmatched.is_empty() {
                info!("group {label:?}: {} students on page", page.matched.len());
            } else {
                warn!(
                    "group {label:?}: {} students on page, not found: {}",
                    page.matched.len(),
                    not_found_line(&page.unmatched)
                );
            }
            page
        })
        .collect()
}

fn not_found_line(ids: &[StudentId]) -> String {
    ids.iter().map(StudentId::as_str).collect::<Vec<_>>().join(" ")
}

fn compose_page(group: &str, student_divs: &str, unmatched: &[StudentId]) -> String {
    let leftovers = if unmatched.is_empty() {
        String::new()
    } else {
        format!(
            "\n    <div id=\"leftovers\">\n      Not found: {}\n    </div>",
            not_found_line(unmatched)
        )
    };

    format!(
        r#"<html>
<head>
  <title>{PAGE_TITLE}</title>
  <link rel="stylesheet" type="text/css" href="{STYLESHEET}" />
</head>
<body>
  <div id="groupspace">
  <h1>Group: {group}</h1>
    <div id="studentdivs">
      {student_divs}
    </div>{leftovers}
  </div>
</body>
</html>
"#,
        group = escape_text(group),
    )
}
