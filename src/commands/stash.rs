//! `scenegit stash`: save or pop a stash, optionally on a worker thread.

use crate::commands::open_session;
use crate::core::{print_success, Result, RunMode, StashOutcome};
use std::path::PathBuf;

pub fn execute_stash_save(
    document: Option<PathBuf>,
    message: String,
    background: bool,
) -> Result<()> {
    let mut session = open_session(document)?;
    let mode = run_mode(background);
    finish(session.stash_save(&message, mode)?, "Stashed all changes")
}

pub fn execute_stash_pop(document: Option<PathBuf>, background: bool) -> Result<()> {
    let mut session = open_session(document)?;
    let mode = run_mode(background);
    finish(session.stash_pop(mode)?, "Popped last stash")
}

/// Dispatch for the `stash` subcommand tree.
pub fn execute_stash(
    document: Option<PathBuf>,
    pop: bool,
    message: String,
    background: bool,
) -> Result<()> {
    if pop {
        execute_stash_pop(document, background)
    } else {
        execute_stash_save(document, message, background)
    }
}

fn run_mode(background: bool) -> RunMode {
    if background {
        RunMode::Background
    } else {
        RunMode::Foreground
    }
}

fn finish(outcome: StashOutcome, success: &str) -> Result<()> {
    match outcome {
        StashOutcome::Completed => {
            print_success(success);
            Ok(())
        }
        // A CLI process has nothing else to do, so block on the worker; the
        // point of background mode in a real host is that the UI thread does
        // not have to.
        StashOutcome::InFlight(task) => {
            task.wait()?;
            print_success(success);
            Ok(())
        }
    }
}
