//! The git session façade: cached views over one repository.
//!
//! [`GitSession`] owns the operation counter, the memoized repository
//! runner, and one single-slot cache per derived view (file status, commit
//! history, branch list, working-directory cleanliness). The host calls the
//! `*` view getters from its redraw tick at arbitrary frequency; the getters
//! only talk to git when the counter says the cached value is stale.
//!
//! Mutating operations live in [`crate::core::ops`] as further methods on
//! this type.
//!
//! # Public API
//! - [`GitSession`]: the façade itself
//! - [`SessionConfig`]: policy knobs (commit staging rule, log limit, ascent bound)
//! - [`Cleanliness`]: tri-state working-directory flag
//! - [`SessionSnapshot`]: serde bridge to the host's persistent property store

use crate::core::cache::CacheEntry;
use crate::core::counter::OperationCounter;
use crate::core::error::{Result, SceneGitError};
use crate::core::exec::{git_available, GitRunner};
use crate::core::history::{
    self, parse_current_branch, parse_log, pick_main_branch, CommitRecord, LOG_FORMAT,
};
use crate::core::host::Host;
use crate::core::locate::{self, RepositoryHandle};
use crate::core::status::{parse_porcelain, FileStatusEntry};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tri-state cleanliness of the working directory. `Unknown` only before the
/// first status check of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cleanliness {
    Unknown,
    Clean,
    Dirty,
}

/// Session policy knobs. By default commits require at least one staged
/// file, history reads cap at five entries, and repository location ascends
/// at most three levels above the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub require_staged_for_commit: bool,
    pub log_limit: usize,
    pub max_ascents: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            require_staged_for_commit: true,
            log_limit: 5,
            max_ascents: locate::MAX_ASCENTS,
        }
    }
}

/// Serializable image of the session's cache state, for hosts that persist
/// UI state across redraws or reloads. Restoring does not re-run git; the
/// counter value travels with the entries so staleness math still holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub counter: u64,
    pub file_status: CacheEntry<Vec<FileStatusEntry>>,
    pub commits: CacheEntry<Vec<CommitRecord>>,
    pub branches: CacheEntry<Vec<String>>,
    pub clean: CacheEntry<bool>,
}

/// Stateful caching façade over one repository, anchored at the host's
/// document path.
pub struct GitSession {
    host: Arc<dyn Host>,
    config: SessionConfig,
    counter: OperationCounter,
    runner: Option<GitRunner>,
    git_checked: Option<bool>,
    file_status: CacheEntry<Vec<FileStatusEntry>>,
    commits: CacheEntry<Vec<CommitRecord>>,
    branches: CacheEntry<Vec<String>>,
    clean: CacheEntry<bool>,
}

impl GitSession {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self::with_config(host, SessionConfig::default())
    }

    pub fn with_config(host: Arc<dyn Host>, config: SessionConfig) -> Self {
        Self {
            host,
            config,
            counter: OperationCounter::new(),
            runner: None,
            git_checked: None,
            file_status: CacheEntry::default(),
            commits: CacheEntry::default(),
            branches: CacheEntry::default(),
            clean: CacheEntry::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn counter(&self) -> &OperationCounter {
        &self.counter
    }

    pub(crate) fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    /// Whether the git binary can be spawned at all. Checked once per
    /// session.
    pub fn git_installed(&mut self) -> bool {
        *self.git_checked.get_or_insert_with(git_available)
    }

    /// The anchor file the repository is located from: the host's document.
    pub fn anchor(&self) -> Result<std::path::PathBuf> {
        self.host
            .document_path()
            .ok_or_else(|| SceneGitError::precondition("document has never been saved"))
    }

    /// The memoized command runner, locating the repository on first use.
    pub(crate) fn runner(&mut self) -> Result<GitRunner> {
        if let Some(runner) = &self.runner {
            return Ok(runner.clone());
        }
        let anchor = self.anchor()?;
        let repo = locate::locate_with_ascents(&anchor, self.config.max_ascents)?;
        let runner = GitRunner::new(repo, self.counter.clone());
        self.runner = Some(runner.clone());
        Ok(runner)
    }

    /// Install a runner for a repository created outside the locator, i.e.
    /// right after `git init`.
    pub(crate) fn adopt_repository(&mut self, repo: RepositoryHandle) -> GitRunner {
        let runner = GitRunner::new(repo, self.counter.clone());
        self.runner = Some(runner.clone());
        runner
    }

    /// Fast existence check used by mutating flows. Locates and memoizes on
    /// first success; never errors.
    pub fn repo_exists(&mut self) -> bool {
        if let Some(runner) = &self.runner {
            return runner.repo().exists();
        }
        self.runner().is_ok()
    }

    // ------------------------------------------------------------------
    // Cached views
    // ------------------------------------------------------------------

    /// Per-file status of the working tree, porcelain order preserved.
    pub fn file_status(&mut self) -> Result<Vec<FileStatusEntry>> {
        let runner = self.runner()?;
        self.file_status.get_or_recompute(&self.counter, || {
            let raw = runner.run(&["status", "--porcelain=1"])?;
            Ok(parse_porcelain(&raw))
        })
    }

    /// Recent commit history from HEAD, newest first, capped at the
    /// configured limit. The recompute issues only the read-only `log`
    /// command; resolving a branch name would run `branch`, advance the
    /// counter, and re-stale every other view on each refresh. Callers that
    /// want a specific ref use [`Self::read_log`].
    pub fn commit_log(&mut self) -> Result<Vec<CommitRecord>> {
        let runner = self.runner()?;
        let limit = self.config.log_limit;
        self.commits
            .get_or_recompute(&self.counter, || read_log(&runner, None, Some(limit)))
    }

    /// Local branches with the current branch first and never duplicated.
    /// An absent repository yields an empty list rather than an error so the
    /// host can render "no repository" states from the same call.
    pub fn branch_list(&mut self) -> Result<Vec<String>> {
        if !self.repo_exists() {
            return Ok(Vec::new());
        }
        let runner = self.runner()?;
        self.branches.get_or_recompute(&self.counter, || {
            let current = read_current_branch(&runner)?;
            let listed = runner
                .run(&["branch", "--format=%(refname:short)"])?
                .lines()
                .map(str::to_string)
                .collect();
            Ok(history::order_branches(current.as_deref(), listed))
        })
    }

    /// Whether the working directory has no uncommitted changes.
    pub fn working_dir_clean(&mut self) -> Result<bool> {
        let runner = self.runner()?;
        self.clean.get_or_recompute(&self.counter, || {
            let raw = runner.run(&["status", "--porcelain"])?;
            Ok(raw.is_empty())
        })
    }

    /// Last-known cleanliness without touching git. `Unknown` until
    /// [`Self::working_dir_clean`] has run at least once.
    pub fn cleanliness(&self) -> Cleanliness {
        match self.clean.peek() {
            None => Cleanliness::Unknown,
            Some(true) => Cleanliness::Clean,
            Some(false) => Cleanliness::Dirty,
        }
    }

    // ------------------------------------------------------------------
    // Uncached readers (the cached views are built on these)
    // ------------------------------------------------------------------

    /// Read the log for an explicit ref and entry cap, bypassing the cache.
    pub fn read_log(
        &mut self,
        reference: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>> {
        let runner = self.runner()?;
        read_log(&runner, reference, limit)
    }

    /// Name of the checked-out branch, `None` when detached.
    pub fn current_branch(&mut self) -> Result<Option<String>> {
        let runner = self.runner()?;
        read_current_branch(&runner)
    }

    /// The repository's main branch: "main" preferred, "master" accepted,
    /// otherwise `None`.
    pub fn main_branch(&mut self) -> Result<Option<String>> {
        let runner = self.runner()?;
        read_main_branch(&runner)
    }

    // ------------------------------------------------------------------
    // Invalidation
    // ------------------------------------------------------------------

    pub fn invalidate_file_status(&mut self) {
        self.file_status.invalidate();
    }

    pub fn invalidate_commits(&mut self) {
        self.commits.invalidate();
    }

    pub fn invalidate_branches(&mut self) {
        self.branches.invalidate();
    }

    pub fn invalidate_clean(&mut self) {
        self.clean.invalidate();
    }

    pub fn invalidate_all(&mut self) {
        self.invalidate_file_status();
        self.invalidate_commits();
        self.invalidate_branches();
        self.invalidate_clean();
    }

    // ------------------------------------------------------------------
    // Host property-store bridge
    // ------------------------------------------------------------------

    /// Capture cache state for the host's persistent property store.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            counter: self.counter.current(),
            file_status: self.file_status.clone(),
            commits: self.commits.clone(),
            branches: self.branches.clone(),
            clean: self.clean.clone(),
        }
    }

    /// Restore cache state captured by [`Self::snapshot`]. The counter is
    /// restored alongside the entries; it stays monotonic from there.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.counter.reset_to(snapshot.counter);
        self.file_status = snapshot.file_status;
        self.commits = snapshot.commits;
        self.branches = snapshot.branches;
        self.clean = snapshot.clean;
    }
}

fn read_current_branch(runner: &GitRunner) -> Result<Option<String>> {
    let raw = runner.run(&["branch"])?;
    Ok(parse_current_branch(&raw))
}

fn read_main_branch(runner: &GitRunner) -> Result<Option<String>> {
    let listed: Vec<String> = runner
        .run(&["branch", "--format=%(refname:short)"])?
        .lines()
        .map(str::to_string)
        .collect();
    Ok(pick_main_branch(&listed))
}

fn read_log(
    runner: &GitRunner,
    reference: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<CommitRecord>> {
    let mut args = vec!["log".to_string(), LOG_FORMAT.to_string()];
    if let Some(limit) = limit {
        args.push("-n".to_string());
        args.push(limit.to_string());
    }
    if let Some(reference) = reference {
        args.push(reference.to_string());
    }
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let raw = runner.run(&arg_refs)?;
    Ok(parse_log(&raw, Local::now()))
}
