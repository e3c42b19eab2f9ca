//! Repository location relative to a host document (anchor) path.
//!
//! The host application knows where its document lives; this module turns
//! that anchor path into a repository working directory by searching for a
//! `.git` control directory, ascending at most [`MAX_ASCENTS`] levels before
//! giving up. The resolved handle is memoized per session by the caller.
//!
//! # Public API
//! - [`RepositoryHandle`]: resolved working directory + control directory name
//! - [`locate`]: bounded-ascent search from an anchor file path
//! - [`repo_exists`]: pure existence check for the control directory

use crate::core::error::{Result, SceneGitError};
use std::path::{Path, PathBuf};

/// Name of the control directory that marks a repository root.
pub const CONTROL_DIR: &str = ".git";

/// How many parent directories to try above the anchor's own directory.
pub const MAX_ASCENTS: usize = 3;

/// A resolved repository working directory. Created once per session and
/// treated as immutable afterwards; re-located only if the caller explicitly
/// re-checks existence and finds the control directory gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    root: PathBuf,
}

impl RepositoryHandle {
    /// Wrap a directory already known to be a repository root. Used after
    /// `git init` has just created the control directory there.
    pub fn assume(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute working directory git commands run against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-check that the control directory still exists on disk.
    pub fn exists(&self) -> bool {
        repo_exists(&self.root)
    }
}

/// Locate the repository containing `anchor` (a file path, typically the
/// host's saved document). Starts at the anchor's parent directory and
/// ascends up to [`MAX_ASCENTS`] levels looking for the control directory.
pub fn locate(anchor: &Path) -> Result<RepositoryHandle> {
    locate_with_ascents(anchor, MAX_ASCENTS)
}

/// Same as [`locate`] but with an explicit ascent bound (session policy).
pub fn locate_with_ascents(anchor: &Path, max_ascents: usize) -> Result<RepositoryHandle> {
    let start = anchor
        .parent()
        .ok_or_else(|| SceneGitError::repo_not_found(anchor))?;

    let mut dir = start;
    for _ in 0..=max_ascents {
        if repo_exists(dir) {
            return Ok(RepositoryHandle {
                root: dir.to_path_buf(),
            });
        }
        dir = match dir.parent() {
            Some(parent) => parent,
            None => break,
        };
    }

    Err(SceneGitError::repo_not_found(anchor))
}

/// Directory the anchor file lives in, used as the init target when no
/// repository exists yet.
pub fn anchor_dir(anchor: &Path) -> Result<PathBuf> {
    anchor
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| SceneGitError::repo_not_found(anchor))
}

/// Pure check: does `root` contain a control directory?
pub fn repo_exists(root: &Path) -> bool {
    root.join(CONTROL_DIR).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo_marker(dir: &Path) {
        fs::create_dir_all(dir.join(CONTROL_DIR)).unwrap();
    }

    #[test]
    fn test_locates_repo_in_anchor_directory() {
        let tmp = TempDir::new().unwrap();
        make_repo_marker(tmp.path());
        let anchor = tmp.path().join("scene.blend");

        let handle = locate(&anchor).unwrap();
        assert_eq!(handle.root(), tmp.path());
        assert!(handle.exists());
    }

    #[test]
    fn test_ascends_to_parent_directories() {
        let tmp = TempDir::new().unwrap();
        make_repo_marker(tmp.path());
        let nested = tmp.path().join("assets").join("scenes");
        fs::create_dir_all(&nested).unwrap();
        let anchor = nested.join("scene.blend");

        let handle = locate(&anchor).unwrap();
        assert_eq!(handle.root(), tmp.path());
    }

    #[test]
    fn test_fails_beyond_ascent_bound() {
        let tmp = TempDir::new().unwrap();
        make_repo_marker(tmp.path());
        let nested = tmp.path().join("a").join("b").join("c").join("d");
        fs::create_dir_all(&nested).unwrap();
        let anchor = nested.join("scene.blend");

        // Four ascents needed, only three allowed.
        let result = locate(&anchor);
        assert!(matches!(result, Err(SceneGitError::RepoNotFound { .. })));
    }

    #[test]
    fn test_fails_when_no_repo_anywhere() {
        let tmp = TempDir::new().unwrap();
        let anchor = tmp.path().join("scene.blend");
        assert!(locate(&anchor).is_err());
    }

    #[test]
    fn test_repo_exists_requires_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(!repo_exists(tmp.path()));
        // A plain file named .git does not count as a control directory.
        fs::write(tmp.path().join(CONTROL_DIR), "gitdir: elsewhere").unwrap();
        assert!(!repo_exists(tmp.path()));
    }
}
