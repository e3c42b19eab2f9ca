//! Porcelain status parsing into typed per-file entries.
//!
//! Turns `git status --porcelain=1` output into [`FileStatusEntry`] records.
//! Parsing is total: unrecognized status codes are carried through as their
//! raw character instead of failing, and line order is preserved exactly as
//! git emitted it.
//!
//! # Public API
//! - [`ChangeKind`]: typed per-column status code
//! - [`FileStatusEntry`]: one working-tree file with index and worktree state
//! - [`parse_porcelain`]: parser over raw porcelain text

use serde::{Deserialize, Serialize};
use std::fmt;

/// One column of a two-character porcelain status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Blank column, no change recorded.
    None,
    /// Modified file (M)
    Modified,
    /// Added file (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Untracked file (?)
    New,
    /// Any code this crate does not map; kept verbatim so parsing stays total.
    Other(char),
}

impl ChangeKind {
    fn from_code(code: char) -> Self {
        match code {
            ' ' => ChangeKind::None,
            'M' => ChangeKind::Modified,
            'A' => ChangeKind::Added,
            'D' => ChangeKind::Deleted,
            'R' => ChangeKind::Renamed,
            '?' => ChangeKind::New,
            other => ChangeKind::Other(other),
        }
    }

    /// Whether this column actually records a change.
    pub fn is_change(&self) -> bool {
        !matches!(self, ChangeKind::None)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::None => write!(f, ""),
            ChangeKind::Modified => write!(f, "modified"),
            ChangeKind::Added => write!(f, "added"),
            ChangeKind::Deleted => write!(f, "deleted"),
            ChangeKind::Renamed => write!(f, "renamed"),
            ChangeKind::New => write!(f, "new"),
            ChangeKind::Other(code) => write!(f, "{code}"),
        }
    }
}

/// A single file reported by the status command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStatusEntry {
    pub path: String,
    pub staged_state: ChangeKind,
    pub working_state: ChangeKind,
    pub staged: bool,
}

impl FileStatusEntry {
    /// The state shown to users: the index column when the file is staged,
    /// otherwise the working-tree column.
    pub fn effective_state(&self) -> ChangeKind {
        if self.staged {
            self.staged_state
        } else {
            self.working_state
        }
    }
}

/// Parse raw porcelain v1 output. Order preserved, blank lines skipped.
pub fn parse_porcelain(raw: &str) -> Vec<FileStatusEntry> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<FileStatusEntry> {
    if line.is_empty() {
        return None;
    }

    let mut chars = line.chars();
    let index_code = chars.next()?;
    let working_code = chars.next().unwrap_or(' ');
    let rest: String = chars.collect();

    // Collapse interior whitespace and strip the quoting git adds around
    // unusual paths.
    let path = rest
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "");
    if path.is_empty() {
        return None;
    }

    // An untracked marker in the index column means the file is not staged
    // at all, whatever the working column says.
    let (staged_state, working_state) = if index_code == '?' {
        (ChangeKind::None, ChangeKind::New)
    } else {
        (
            ChangeKind::from_code(index_code),
            ChangeKind::from_code(working_code),
        )
    };

    Some(FileStatusEntry {
        path,
        staged: staged_state.is_change(),
        staged_state,
        working_state,
    })
}
