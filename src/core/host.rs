//! Host application interface.
//!
//! The session never drives a UI or saves documents itself; the embedding
//! host (a 3D content-creation tool, an editor, a test harness) implements
//! [`Host`] and the mutating operations call through it at fixed points:
//! save before commit, reopen after checkout, redraw when a background task
//! completes.
//!
//! # Public API
//! - [`Host`]: the collaborator trait
//! - [`NullHost`]: inert implementation for tests and the CLI

use crate::core::error::Result;
use std::path::PathBuf;

/// What the session needs from its embedding application.
pub trait Host: Send + Sync {
    /// Absolute path of the currently open document, or `None` if it has
    /// never been saved. Doubles as the repository anchor.
    fn document_path(&self) -> Option<PathBuf>;

    /// Save the current document in place. Called before committing so the
    /// on-disk file matches what the user sees.
    fn save_document(&self) -> Result<()>;

    /// Reload the current document from disk. Called after a checkout swaps
    /// the file content underneath the host.
    fn reopen_document(&self) -> Result<()>;

    /// Ask the host to redraw its UI. Cosmetic; errors are not expected and
    /// not representable.
    fn request_redraw(&self);

    /// External asset files referenced by the document (textures, linked
    /// libraries, sounds) that should be staged alongside it, relative to
    /// the repository root.
    fn external_assets(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// A host that has a document path but no UI and no save machinery. Suitable
/// for the diagnostic CLI and for tests that drive a real working tree.
#[derive(Debug, Clone, Default)]
pub struct NullHost {
    document: Option<PathBuf>,
}

impl NullHost {
    pub fn new(document: Option<PathBuf>) -> Self {
        Self { document }
    }

    /// Host anchored at a document path.
    pub fn with_document(document: impl Into<PathBuf>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }
}

impl Host for NullHost {
    fn document_path(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn save_document(&self) -> Result<()> {
        Ok(())
    }

    fn reopen_document(&self) -> Result<()> {
        Ok(())
    }

    fn request_redraw(&self) {}
}
