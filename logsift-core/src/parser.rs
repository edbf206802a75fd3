use crate::model::LogEntry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

// timestamp, category token, then everything after the second whitespace run
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+(.+)$").expect("Failed to compile log line regex")
});

/// Splits a stripped, non-blank line into a [`LogEntry`].
///
/// Returns `None` for lines with fewer than three fields. Such lines are
/// noise, not errors, and the caller drops them.
pub fn parse_single_log_line(line_number: usize, line: &str) -> Option<LogEntry> {
    let Some(caps) = LINE_REGEX.captures(line) else {
        trace!("Skipping malformed line {}", line_number);
        return None;
    };

    Some(LogEntry::new(line_number, &caps[1], &caps[2], &caps[3]))
}
