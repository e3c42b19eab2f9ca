//! Core functionality for the scenegit session façade.
//!
//! This module provides the fundamental building blocks: command execution,
//! repository location, status/history parsing, the counter-driven cache
//! layer, and the mutating operations built on top of them.

pub mod cache;
pub mod counter;
pub mod error;
pub mod exec;
pub mod history;
pub mod host;
pub mod locate;
pub mod ops;
pub mod output;
pub mod session;
pub mod status;
pub mod task;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the crate
pub use error::{Result, SceneGitError};

// === Session façade ===
// The cached git session and its policy/persistence types
pub use session::{Cleanliness, GitSession, SessionConfig, SessionSnapshot};

// === Command execution ===
// Subprocess runner and the shared mutation counter
pub use counter::OperationCounter;
pub use exec::{git_available, lfs_available, GitRunner};

// === Repository location ===
pub use locate::{locate, repo_exists, RepositoryHandle, CONTROL_DIR, MAX_ASCENTS};

// === Status parsing ===
// Typed porcelain status entries
pub use status::{parse_porcelain, ChangeKind, FileStatusEntry};

// === History reading ===
// Commit records, compact dates and branch name resolution
pub use history::{format_compact_datetime, CommitRecord, LOG_FORMAT};

// === Host integration ===
pub use host::{Host, NullHost};

// === Mutating operations ===
pub use ops::{RunMode, StashOutcome};

// === Background execution ===
pub use task::BackgroundTask;

// === Caching primitives ===
pub use cache::CacheEntry;

// === Output formatting ===
// CLI presentation helpers
pub use output::{print_error, print_info, print_success};
