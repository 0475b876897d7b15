//! Interactive yes/no confirmation prompt.
//!
//! The prompt and the statement preview go to stderr so stdout stays clean
//! for the emitted statement.

use std::io::{self, BufRead};

const PREVIEW_LINES: usize = 5;

/// Show the statement name and a short preview, then ask for confirmation.
/// Accepts `y` or `yes` (case-insensitive); anything else declines.
pub fn confirm(name: &str, sql: &str) -> bool {
    let lines: Vec<&str> = sql.lines().collect();
    let shown = lines.len().min(PREVIEW_LINES);
    let mut preview = lines[..shown].join("\n");
    if lines.len() > shown {
        preview.push_str(&format!("\n... and {} more lines", lines.len() - shown));
    }

    eprintln!("\nstatement: {}", name);
    eprintln!("{}", preview);
    eprint!("\nrun this statement? (y/n): ");

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim().to_lowercase();
    response == "y" || response == "yes"
}
