//! `scenegit log`: cached recent commit history.

use crate::commands::open_session;
use crate::core::{print_info, Result};
use colored::*;
use std::path::PathBuf;

pub fn execute_log(document: Option<PathBuf>, limit: Option<usize>) -> Result<()> {
    let mut session = open_session(document)?;

    let commits = match limit {
        // Explicit limit bypasses the session's cached view.
        Some(_) => session.read_log(None, limit)?,
        None => session.commit_log()?,
    };

    if commits.is_empty() {
        print_info("No commits yet");
        return Ok(());
    }

    for commit in &commits {
        println!(
            "{} {} {}",
            commit.hash.yellow(),
            commit.date.bright_black(),
            commit.message
        );
    }
    Ok(())
}
