//! `scenegit stage`: stage files (or everything), auto-initializing the
//! repository on first use.

use crate::commands::open_session;
use crate::core::{print_success, Result, SceneGitError};
use std::path::PathBuf;

pub fn execute_stage(document: Option<PathBuf>, paths: Vec<PathBuf>, all: bool) -> Result<()> {
    let mut session = open_session(document)?;

    if all {
        session.stage_all()?;
        print_success("Staged all changes");
        return Ok(());
    }

    if paths.is_empty() {
        return Err(SceneGitError::validation(
            "nothing to stage: pass file paths or --all",
        ));
    }

    for path in &paths {
        session.stage_file(path)?;
    }
    print_success(&format!("Staged {} file(s)", paths.len()));
    Ok(())
}
