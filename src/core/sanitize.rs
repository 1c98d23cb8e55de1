// src/core/sanitize.rs
use std::sync::OnceLock;

use regex::Regex;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[0-9]+").expect("static digit-run pattern"))
}

/// First maximal run of ASCII digits that is exactly `len` long.
/// Runs of any other length are passed over, not truncated.
pub fn first_digit_run(s: &str, len: usize) -> Option<&str> {
    digit_runs()
        .find_iter(s)
        .map(|m| m.as_str())
        .find(|run| run.len() == len)
}

/// Non-empty and ASCII digits only.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Short single-line preview of a text blob for log lines.
/// Whitespace runs collapse to one space.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &flat[..cut]),
        None => flat,
    }
}

/// A group label is used verbatim as a file stem, so it must stay a single
/// path component inside the output directory.
pub fn is_safe_file_stem(label: &str) -> bool {
    !label.is_empty()
        && label != "."
        && label != ".."
        && !label.contains(['/', '\\', '\0'])
}
