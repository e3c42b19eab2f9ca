//! Diagnostic CLI commands.
//!
//! Thin wrappers that build a [`GitSession`] around the working directory
//! (or an explicit `--document` path) and print the session's cached views.
//! These stand in for the host application's panels; all real logic lives in
//! [`crate::core`].

pub mod branches;
pub mod checkout;
pub mod commit;
pub mod log;
pub mod reset;
pub mod stage;
pub mod stash;
pub mod status;

pub use branches::execute_branches;
pub use checkout::execute_checkout;
pub use commit::execute_commit;
pub use log::execute_log;
pub use reset::execute_reset;
pub use stage::execute_stage;
pub use stash::execute_stash;
pub use status::execute_status;

use crate::core::{GitSession, NullHost, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Build a session anchored at the given document, or at a synthetic file in
/// the current directory so repository location starts from the cwd.
pub(crate) fn open_session(document: Option<PathBuf>) -> Result<GitSession> {
    let anchor = match document {
        Some(path) => path,
        None => std::env::current_dir()?.join("untitled"),
    };
    Ok(GitSession::new(Arc::new(NullHost::with_document(anchor))))
}
