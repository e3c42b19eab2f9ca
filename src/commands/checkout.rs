//! `scenegit checkout`: switch branch or commit, preconditions enforced by
//! the session.

use crate::commands::open_session;
use crate::core::{print_success, Result, SceneGitError};
use std::path::PathBuf;

pub fn execute_checkout(
    document: Option<PathBuf>,
    reference: Option<String>,
    main: bool,
) -> Result<()> {
    let mut session = open_session(document)?;

    if main {
        session.checkout_main()?;
        print_success("Switched to main branch");
        return Ok(());
    }

    let reference = reference
        .ok_or_else(|| SceneGitError::validation("pass a branch/commit or --main"))?;
    session.checkout_branch(&reference)?;
    print_success(&format!("Checked out {reference}"));
    Ok(())
}
