//! Session construction helpers for integration tests.

#![allow(dead_code)]

use scenegit::core::{GitSession, NullHost, SessionConfig};
use std::path::Path;
use std::sync::Arc;

/// A session anchored at a document inside the given directory. The document
/// file itself may or may not exist; location only needs its parent.
pub fn session_in(dir: &Path) -> GitSession {
    GitSession::new(Arc::new(NullHost::with_document(dir.join("scene.txt"))))
}

/// A session whose host has never saved its document.
pub fn session_without_document() -> GitSession {
    GitSession::new(Arc::new(NullHost::new(None)))
}

/// A session with a custom policy configuration.
pub fn session_in_with_config(dir: &Path, config: SessionConfig) -> GitSession {
    GitSession::with_config(
        Arc::new(NullHost::with_document(dir.join("scene.txt"))),
        config,
    )
}
