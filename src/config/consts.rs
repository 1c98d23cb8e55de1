// src/config/consts.rs

// Inputs
pub const ROSTER_FILE: &str = "./SMO Class List - with Photos.html";
pub const ASSIGNMENTS_FILE: &str = "./tutorial-assignments.csv";

// Roster: the divs with student data have the class "sv-panel"
pub const CONTAINER_SELECTOR: &str = "div.sv-panel";
pub const STUDENT_ID_LEN: usize = 8;

// Assignments
pub const CSV_DELIM: u8 = b',';
pub const CSV_QUOTE: u8 = b'"';

// Output
pub const OUT_DIR: &str = "./tutorial-assignments";
pub const PAGE_EXT: &str = "html";
pub const PAGE_TITLE: &str = "Student Tutorial Assignments";
pub const STYLESHEET: &str = "style.css";

// Attendance table: two header rows, each followed by an empty fill-in row
pub const SIGN_IN_WEEKS: [[&str; 5]; 2] = [
    ["W1", "W2", "W3", "W4", "W5"],
    ["W6", "W7", "W8", "W9", "WX"],
];
