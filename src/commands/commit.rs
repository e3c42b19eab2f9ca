//! `scenegit commit`: save the document, stage it and commit.

use crate::commands::open_session;
use crate::core::{print_success, Result, SceneGitError};
use std::path::PathBuf;

pub fn execute_commit(
    document: Option<PathBuf>,
    message: String,
    restore_stash: bool,
) -> Result<()> {
    let document = document.ok_or_else(|| {
        SceneGitError::validation("commit needs --document pointing at the file to version")
    })?;
    if !document.is_file() {
        return Err(SceneGitError::validation(format!(
            "document '{}' does not exist",
            document.display()
        )));
    }

    let mut session = open_session(Some(document))?;
    session.commit(&message, restore_stash)?;
    print_success("Committed");
    Ok(())
}
