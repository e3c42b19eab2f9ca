//! `scenegit branches`: cached local branch list, current branch first.

use crate::commands::open_session;
use crate::core::{print_info, Result};
use colored::*;
use std::path::PathBuf;

pub fn execute_branches(document: Option<PathBuf>) -> Result<()> {
    let mut session = open_session(document)?;

    let branches = session.branch_list()?;
    if branches.is_empty() {
        print_info("No repository found");
        return Ok(());
    }

    let current = session.current_branch()?;
    for name in &branches {
        if Some(name.as_str()) == current.as_deref() {
            println!("* {}", name.cyan());
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}
