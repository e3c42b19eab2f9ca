//! `scenegit reset`: unstage everything.

use crate::commands::open_session;
use crate::core::{print_success, Result};
use std::path::PathBuf;

pub fn execute_reset(document: Option<PathBuf>) -> Result<()> {
    let mut session = open_session(document)?;
    session.reset_staged()?;
    print_success("Unstaged all files");
    Ok(())
}
