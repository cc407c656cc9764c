//! Tree construction for tests.
//!
//! Parsing is out of scope for this crate, so tests (and embedders
//! wiring up their own parser) build trees directly. [`TreeBuilder`] is a
//! thin layer over rowan's green-node builder that speaks [`SyntaxKind`]
//! instead of raw kinds.
//!
//! ```text
//! let doc = testing::document(|b| {
//!     b.node(SyntaxKind::PARAGRAPH, |b| {
//!         b.token(SyntaxKind::TEXT, "hello");
//!     });
//! });
//! ```

use rowan::{GreenNodeBuilder, Language};

use crate::syntax::{OrgLanguage, SyntaxKind, SyntaxNode};

/// Builds a kind-tagged tree bottom-up, in document order.
#[derive(Default)]
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node of `kind`, populate it through the closure, close it.
    pub fn node(&mut self, kind: SyntaxKind, build: impl FnOnce(&mut TreeBuilder)) {
        self.inner.start_node(OrgLanguage::kind_to_raw(kind));
        build(self);
        self.inner.finish_node();
    }

    /// Append a token with literal text.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.inner.token(OrgLanguage::kind_to_raw(kind), text);
    }

    /// Finish the tree. Exactly one root node must have been built.
    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.inner.finish())
    }
}

/// Build a `DOCUMENT`-rooted tree in one call.
pub fn document(build: impl FnOnce(&mut TreeBuilder)) -> SyntaxNode {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::DOCUMENT, build);
    builder.finish()
}
