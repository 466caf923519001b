//! Console reports printed after a scan
//!
//! Everything here returns a `String` so the handler decides where it goes
//! (stdout) and tests can check the exact text.

use std::path::Path;

use crate::extractors::VariableMatch;
use crate::scan::Replacement;

/// `"1 variable"`, `"2 variables"`, `"0 variables"`
pub fn count_noun(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// One `path/filename:line token` line per match needing manual review
pub fn format_needs_review(needs_review: &[VariableMatch]) -> String {
    let mut output = String::new();
    for m in needs_review {
        output.push_str(&format!("{} {}\n", m.location(), m.raw));
    }
    output
}

/// How each call-site token was interpreted, in scan order
pub fn format_replacements(replacements: &[Replacement]) -> String {
    let mut output = String::new();
    for replacement in replacements {
        match replacement {
            Replacement::Literal(raw) => {
                output.push_str(&format!("{}\n", raw));
            }
            Replacement::Expanded { from, to } => {
                output.push_str(&format!("\n{} -> {}\n", from, to));
            }
            Replacement::Unresolved(raw) => {
                output.push_str(&format!("\nwarning: {} has no expansion\n\n", raw));
            }
        }
    }
    output
}

/// Reminder shown when some matches could not be resolved; `None` when all were
pub fn format_review_notice(count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }
    Some(format!(
        "{} must be manually checked. Rerun with --needs-review to check.",
        count_noun(count, "variable")
    ))
}

pub fn format_summary(count: usize, out: &Path) -> String {
    format!(
        "{} processed and output to {}",
        count_noun(count, "variable"),
        out.display()
    )
}
