//! Mutating operations on the working tree.
//!
//! Each operation is a short sequence of git commands followed by targeted
//! cache invalidation. Preconditions and input validation are checked before
//! any command is issued, so a failed rule never leaves partial state
//! behind. The operation counter advances inside the command executor, which
//! is what makes the other cached views notice the mutation.
//!
//! # Public API
//! - Mutating methods on [`GitSession`]: staging, commit, checkout, stash,
//!   repository init
//! - [`RunMode`] / [`StashOutcome`]: foreground vs. background stash control

use crate::core::error::{Result, SceneGitError};
use crate::core::exec::GitRunner;
use crate::core::locate::{self, RepositoryHandle};
use crate::core::session::GitSession;
use crate::core::status::parse_porcelain;
use crate::core::task::BackgroundTask;
use crate::core::templates;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Whether a stash command blocks the caller or runs on a worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Foreground,
    Background,
}

/// Result of a stash operation. Foreground runs complete in place;
/// background runs hand back a task whose result carries any failure.
#[derive(Debug)]
pub enum StashOutcome {
    Completed,
    InFlight(BackgroundTask<String>),
}

impl GitSession {
    /// Make sure a repository exists at the document's location, creating
    /// and seeding one if it does not: `init`, line-ending config, default
    /// LFS tracking, and the generated ignore file.
    pub fn ensure_repository(&mut self) -> Result<()> {
        if self.repo_exists() {
            return Ok(());
        }

        let root = locate::anchor_dir(&self.anchor()?)?;
        log::info!("initializing repository at {}", root.display());
        let runner = self.adopt_repository(RepositoryHandle::assume(root.clone()));

        runner.run(&["init"])?;
        runner.run(&["config", "--local", "core.autocrlf", "false"])?;

        if crate::core::exec::lfs_available() && !templates::lfs_initialized(&root) {
            let mut args = vec!["lfs", "track"];
            args.extend(templates::DEFAULT_LFS_PATTERNS);
            runner.run(&args)?;
        }

        fs::write(root.join(".gitignore"), templates::render_ignore_file())?;
        runner.run(&["add", ".gitignore"])?;

        Ok(())
    }

    /// Stage one file, initializing the repository first if needed.
    pub fn stage_file(&mut self, path: &Path) -> Result<()> {
        self.ensure_repository()?;
        let runner = self.runner()?;
        runner.run(&["add", "--", &path.to_string_lossy()])?;
        self.invalidate_file_status();
        Ok(())
    }

    /// Stage everything, initializing the repository first if needed.
    pub fn stage_all(&mut self) -> Result<()> {
        self.ensure_repository()?;
        let runner = self.runner()?;
        runner.run(&["add", "-A"])?;
        self.invalidate_file_status();
        Ok(())
    }

    /// Unstage everything staged so far.
    pub fn reset_staged(&mut self) -> Result<()> {
        let runner = self.runner()?;
        runner.run(&["reset", "."])?;
        self.invalidate_file_status();
        Ok(())
    }

    /// Save the document, stage it together with its external assets, and
    /// commit. With `restore_stash` the last stash is popped first so its
    /// changes land in the same commit.
    pub fn commit(&mut self, message: &str, restore_stash: bool) -> Result<()> {
        if message.trim().is_empty() {
            return Err(SceneGitError::validation("commit message cannot be empty"));
        }

        if self.config().require_staged_for_commit {
            self.check_something_staged()?;
        }

        self.ensure_repository()?;
        let runner = self.runner()?;

        if restore_stash {
            runner.run(&["stash", "pop"])?;
        }

        self.host().save_document()?;

        let document = self.anchor()?;
        runner.run(&["add", "--", &repo_relative(&runner, &document)])?;
        for asset in self.host().external_assets() {
            runner.run(&["add", "--", &repo_relative(&runner, &asset)])?;
        }

        if restore_stash {
            // The pop reinstates its changes unstaged; -a folds the tracked
            // ones into this commit.
            runner.run(&["commit", "-am", message])?;
        } else {
            runner.run(&["commit", "-m", message])?;
        }

        self.invalidate_file_status();
        self.invalidate_commits();
        Ok(())
    }

    /// Switch to a branch. The document must have been saved at least once
    /// and the working tree must be clean; both are checked before any
    /// command runs.
    pub fn checkout_branch(&mut self, name: &str) -> Result<()> {
        self.checkout_ref(name)
    }

    /// Check out a specific commit (detached).
    pub fn checkout_commit(&mut self, hash: &str) -> Result<()> {
        self.checkout_ref(hash)
    }

    /// Switch to the repository's main branch, whichever of "main" or
    /// "master" exists.
    pub fn checkout_main(&mut self) -> Result<()> {
        let main = self
            .main_branch()?
            .ok_or_else(|| SceneGitError::precondition("no main branch found"))?;
        self.checkout_ref(&main)
    }

    fn checkout_ref(&mut self, reference: &str) -> Result<()> {
        if reference.trim().is_empty() {
            return Err(SceneGitError::precondition("no branch or commit selected"));
        }
        if self.host().document_path().is_none() {
            return Err(SceneGitError::precondition("document has never been saved"));
        }
        if !self.working_dir_clean()? {
            return Err(SceneGitError::precondition(
                "working directory must be clean (commit or stash first)",
            ));
        }

        let runner = self.runner()?;
        runner.run(&["checkout", reference])?;
        self.host().reopen_document()?;

        self.invalidate_all();
        Ok(())
    }

    /// Set aside all uncommitted changes, untracked files included. In
    /// background mode the command runs on a worker thread and its result is
    /// delivered through the returned task; the host is asked to redraw
    /// either way once the command finishes.
    pub fn stash_save(&mut self, message: &str, mode: RunMode) -> Result<StashOutcome> {
        let runner = self.runner()?;
        let message = message.trim().to_string();
        self.invalidate_file_status();
        self.invalidate_clean();
        self.run_stash(mode, move |runner| run_stash_save(runner, &message), runner)
    }

    /// Restore the most recent stash. A pop that hits conflicts surfaces as
    /// a plain command failure; conflict resolution is out of scope.
    pub fn stash_pop(&mut self, mode: RunMode) -> Result<StashOutcome> {
        let runner = self.runner()?;
        self.invalidate_file_status();
        self.invalidate_clean();
        self.run_stash(mode, |runner| runner.run(&["stash", "pop"]), runner)
    }

    fn run_stash(
        &mut self,
        mode: RunMode,
        command: impl FnOnce(&GitRunner) -> Result<String> + Send + 'static,
        runner: GitRunner,
    ) -> Result<StashOutcome> {
        match mode {
            RunMode::Foreground => {
                command(&runner)?;
                self.host().request_redraw();
                Ok(StashOutcome::Completed)
            }
            RunMode::Background => {
                let host = Arc::clone(self.host());
                Ok(StashOutcome::InFlight(BackgroundTask::spawn(move || {
                    let result = command(&runner);
                    host.request_redraw();
                    result
                })))
            }
        }
    }

    /// Policy check behind `require_staged_for_commit`: a fresh (uncached)
    /// status read, since a stale cache must not gate a commit. The probe is
    /// read-only, so a failing check leaves the counter and the repository
    /// untouched.
    fn check_something_staged(&mut self) -> Result<()> {
        let nothing_staged = match self.runner() {
            Ok(runner) => {
                let raw = runner.run(&["status", "--porcelain=1"])?;
                !parse_porcelain(&raw).iter().any(|entry| entry.staged)
            }
            // No repository yet means nothing can be staged.
            Err(SceneGitError::RepoNotFound { .. }) => true,
            Err(other) => return Err(other),
        };
        if nothing_staged {
            return Err(SceneGitError::precondition("no files staged for commit"));
        }
        Ok(())
    }
}

fn run_stash_save(runner: &GitRunner, message: &str) -> Result<String> {
    if message.is_empty() {
        runner.run(&["stash", "save", "-u"])
    } else {
        runner.run(&["stash", "save", "-u", message])
    }
}

/// Path as git wants it: relative to the repository root when possible.
fn repo_relative(runner: &GitRunner, path: &Path) -> String {
    path.strip_prefix(runner.repo().root())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
