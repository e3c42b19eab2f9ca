//! Commit history and branch name reading.
//!
//! Parses `git log` output produced with a fixed tab-delimited template into
//! [`CommitRecord`]s, renders commit times compactly, and resolves the
//! current and main branch names from plain `git branch` output.
//!
//! # Public API
//! - [`CommitRecord`]: hash + compact date text + subject
//! - [`LOG_FORMAT`]: the pretty-format template the session passes to git
//! - [`parse_log`]: parser over templated log output
//! - [`format_compact_datetime`]: deterministic short date rendering
//! - [`parse_current_branch`], [`pick_main_branch`], [`order_branches`]

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Log template: abbreviated hash, raw committer epoch, subject. Tabs are the
/// delimiter; the subject may contain tabs itself, so parsing uses a bounded
/// split.
pub const LOG_FORMAT: &str = "--pretty=format:%h%x09%ct%x09%s";

/// One commit as shown to the host, newest first in any list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub date: String,
    pub message: String,
}

/// Parse templated log output. Lines that do not carry all three fields are
/// skipped rather than failing the whole read.
pub fn parse_log(raw: &str, now: DateTime<Local>) -> Vec<CommitRecord> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_log_line(line, now))
        .collect()
}

fn parse_log_line(line: &str, now: DateTime<Local>) -> Option<CommitRecord> {
    let mut parts = line.splitn(3, '\t');
    let hash = parts.next()?.to_string();
    let date_field = parts.next()?;
    let message = parts.next()?.to_string();

    // The template emits a raw epoch; fall back to the literal field if git
    // ever hands us something else.
    let date = match date_field.parse::<i64>() {
        Ok(timestamp) => format_compact_datetime(timestamp, now),
        Err(_) => date_field.to_string(),
    };

    Some(CommitRecord {
        hash,
        date,
        message,
    })
}

/// Render a commit time as briefly as possible relative to `now`:
/// within 24 hours it is just a clock time, otherwise month-day plus clock,
/// with the year prepended when it differs from the current year.
pub fn format_compact_datetime(timestamp: i64, now: DateTime<Local>) -> String {
    let then = match Local.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt,
        _ => return timestamp.to_string(),
    };

    if (now.timestamp() - timestamp).abs() < 86_400 {
        then.format("%H:%M:%S").to_string()
    } else if then.year() == now.year() {
        then.format("%b-%d %H:%M").to_string()
    } else {
        then.format("%Y %b-%d %H:%M").to_string()
    }
}

/// Scan plain `git branch` output for the checked-out branch. Returns `None`
/// in a detached/no-branch state, which git marks with a parenthesized
/// annotation on the starred line.
pub fn parse_current_branch(raw: &str) -> Option<String> {
    raw.lines()
        .find(|line| line.starts_with('*') && !line.contains('('))
        .map(|line| line[1..].trim().to_string())
}

/// Prefer a branch literally named "main", else "master", else none.
pub fn pick_main_branch(branch_names: &[String]) -> Option<String> {
    for candidate in ["main", "master"] {
        if branch_names.iter().any(|name| name == candidate) {
            return Some(candidate.to_string());
        }
    }
    None
}

/// Place the current branch first, then the remaining branches in git's own
/// listing order with the current one removed so it never appears twice.
pub fn order_branches(current: Option<&str>, listed: Vec<String>) -> Vec<String> {
    let mut ordered = Vec::with_capacity(listed.len() + 1);
    if let Some(current) = current {
        ordered.push(current.to_string());
    }
    for name in listed {
        if name.is_empty() || Some(name.as_str()) == current {
            continue;
        }
        ordered.push(name);
    }
    ordered
}
