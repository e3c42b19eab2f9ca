//! Scenegit - a cached git session façade for stateful host applications.
//!
//! This library lets a host application (a 3D content-creation tool, an
//! editor, a test harness) expose save-version / load-version / branch /
//! stash operations without re-invoking git on every UI redraw. Derived
//! views (file status, commit history, branch list, working-directory
//! cleanliness) are cached in single slots and invalidated through a
//! monotonic operation counter that advances once per successful mutating
//! git command.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`core::GitSession`]: the session façade and its mutating operations
//! - [`core::Host`]: the trait the embedding application implements
//! - Status/history parsing, the command runner, and error types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    format_compact_datetime,
    git_available,
    lfs_available,
    locate,
    parse_porcelain,
    repo_exists,

    BackgroundTask,

    CacheEntry,
    ChangeKind,
    Cleanliness,
    // History reading
    CommitRecord,

    FileStatusEntry,
    // Session façade
    GitSession,
    // Command execution
    GitRunner,
    // Host integration
    Host,
    NullHost,
    // Counter / staleness
    OperationCounter,
    // Repository location
    RepositoryHandle,
    // Error handling
    Result,
    RunMode,
    SceneGitError,
    SessionConfig,
    SessionSnapshot,
    StashOutcome,
};
