//! Git command execution against a located repository.
//!
//! [`GitRunner`] is the single choke point through which every git command in
//! the crate runs. It owns the resolved [`RepositoryHandle`] and the shared
//! [`OperationCounter`], spawns the git binary with the working directory and
//! `GIT_DIR` override applied, and maps process failure to
//! [`SceneGitError::CommandFailed`].
//!
//! # Public API
//! - [`GitRunner`]: command executor bound to one repository
//! - [`git_available`]: one-shot check that the git binary is on PATH
//!
//! # Counter contract
//! The first argument names the git subcommand. `status` and `log` are
//! read-only and never advance the counter; every other subcommand advances
//! it by exactly one, and only after the process exited successfully. A
//! failed mutating command must not look like a successful mutation to the
//! cache layer.

use crate::core::counter::OperationCounter;
use crate::core::error::{Result, SceneGitError};
use crate::core::locate::{RepositoryHandle, CONTROL_DIR};
use std::process::{Command, Stdio};

/// Subcommands that never change repository state.
const READ_ONLY_SUBCOMMANDS: [&str; 2] = ["status", "log"];

/// Executes git commands against one repository. Cheap to clone; clones share
/// the operation counter, which is what lets a background stash thread and
/// the foreground session agree on staleness.
#[derive(Debug, Clone)]
pub struct GitRunner {
    repo: RepositoryHandle,
    counter: OperationCounter,
}

impl GitRunner {
    pub fn new(repo: RepositoryHandle, counter: OperationCounter) -> Self {
        Self { repo, counter }
    }

    /// The repository this runner is bound to.
    pub fn repo(&self) -> &RepositoryHandle {
        &self.repo
    }

    /// Run a git command and return its trimmed stdout.
    ///
    /// The working directory is the located repository root and `GIT_DIR` is
    /// pinned to the control directory, so the command operates on the right
    /// repository regardless of the host process's own current directory.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(self.repo.root())
            .env("GIT_DIR", CONTROL_DIR)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SceneGitError::GitNotInstalled
                } else {
                    SceneGitError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("git {} failed: {}", args.first().unwrap_or(&""), stderr);
            return Err(SceneGitError::command_failed(output.status.code(), stderr));
        }

        if is_mutating(args) {
            self.counter.advance();
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

/// Whether a command line names a state-changing subcommand.
fn is_mutating(args: &[&str]) -> bool {
    match args.first() {
        Some(subcommand) => !READ_ONLY_SUBCOMMANDS.contains(subcommand),
        None => false,
    }
}

/// Check once whether the git binary can be spawned at all.
pub fn git_available() -> bool {
    probe(&["--version"])
}

/// Check whether the git-lfs extension is installed. Repository init skips
/// LFS seeding when it is not.
pub fn lfs_available() -> bool {
    probe(&["lfs", "version"])
}

fn probe(args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
