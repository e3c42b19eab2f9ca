//! Git repository management and setup utilities
//!
//! Provides functions for creating temporary working directories and real
//! git repositories in various states, driven through the actual git binary
//! the way the crate itself drives it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Run a git command in the given directory, panicking on failure; test
/// setup is not the code under test.
pub fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {args:?}: {e}"));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// A bare working directory with no repository in it.
pub fn setup_workdir() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestRepo { temp_dir, path })
}

/// Sets up a fresh git repository with identity configured so commits and
/// stashes do not prompt.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_workdir()?;
    run_git(&repo.path, &["init"]);
    configure_identity(&repo.path);
    Ok(repo)
}

/// Sets up a git repository with one committed file (`initial.txt`).
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content")?;
    run_git(&repo.path, &["add", "initial.txt"]);
    run_git(&repo.path, &["commit", "-m", "initial commit"]);
    Ok(repo)
}

/// Set commit identity on an existing repository. Needed when the repository
/// was created by the code under test rather than by [`setup_test_repo`].
pub fn configure_identity(path: &Path) {
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "user.email", "test@example.com"]);
}

/// Creates a file with the given content, creating parent directories as
/// needed.
pub fn create_file(repo_path: &Path, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let file_path = repo_path.join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}
