//! `scenegit status`: cached per-file working-tree status.

use crate::commands::open_session;
use crate::core::{print_info, ChangeKind, FileStatusEntry, Result};
use colored::*;
use std::path::PathBuf;

pub fn execute_status(document: Option<PathBuf>) -> Result<()> {
    let mut session = open_session(document)?;

    let branch = session.current_branch()?;
    let clean = session.working_dir_clean()?;
    let files = session.file_status()?;

    match branch {
        Some(name) => println!("On branch {}", name.cyan()),
        None => println!("{}", "Detached HEAD".yellow()),
    }

    if clean {
        print_info("Working directory clean");
        return Ok(());
    }

    print_files(&files);
    Ok(())
}

pub fn print_files(files: &[FileStatusEntry]) {
    for entry in files {
        let marker = if entry.staged { "●".green() } else { "○".red() };
        let state = entry.effective_state();
        let label = format!("{:<9}", state.to_string());
        let label = match state {
            ChangeKind::New => label.cyan(),
            ChangeKind::Deleted => label.red(),
            ChangeKind::Added => label.green(),
            _ => label.yellow(),
        };
        println!("  {} {} {}", marker, label, entry.path);
    }
}
