//! Embedding surface.
//!
//! Hosts that embed this crate typically sit on the far side of some
//! engine boundary (a worker, a remote process) that owns the parsed
//! document. [`DocumentEngine`] is the explicit handle to that engine,
//! passed down to whoever needs it rather than living in ambient global
//! state. [`PreviewService`] is the degraded-availability wrapper on top:
//! when the engine cannot produce a document yet, rendering surfaces a
//! fixed placeholder string instead of blocking or failing.

use crate::syntax::SyntaxNode;

/// Placeholder surfaced while the engine cannot serve documents.
pub const ENGINE_NOT_READY: &str = "render engine is not ready...";

/// Handle to whatever owns the parsed document.
///
/// `None` means "not ready yet"; it is a normal state, not an error.
pub trait DocumentEngine {
    fn document(&self) -> Option<SyntaxNode>;
}

/// Renders previews through a [`DocumentEngine`], degrading gracefully
/// while the engine is unavailable.
#[derive(Debug)]
pub struct PreviewService<E> {
    engine: E,
}

impl<E: DocumentEngine> PreviewService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// HTML for the current document, or [`ENGINE_NOT_READY`].
    pub fn html(&self) -> String {
        match self.engine.document() {
            Some(document) => crate::to_html(&document),
            None => ENGINE_NOT_READY.to_string(),
        }
    }

    /// Keywords of the current document; empty while the engine is
    /// unavailable.
    pub fn keywords(&self) -> Vec<(String, Vec<String>)> {
        self.engine
            .document()
            .map(|document| crate::collect_keywords(&document))
            .unwrap_or_default()
    }
}
