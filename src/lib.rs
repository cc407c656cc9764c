//! # orgview
//!
//! Typed read-only views and event-driven export over Org-mode syntax trees.
//!
//! The crate sits on top of an externally built, kind-tagged concrete syntax
//! tree ([`rowan`]) and provides two complementary surfaces:
//!
//! 1. **Facades** ([`ast`]): strongly-typed, non-owning views over generic
//!    tree nodes, generated from a declarative schema ([`schema`]). A facade
//!    knows which kinds it accepts and exposes navigation accessors (tokens,
//!    distinguished first/last children, lazy child sequences, affiliated
//!    keywords). Every accessor degrades to absence, never to an error.
//!
//! 2. **Events** ([`export`]): a depth-first traversal over the tree that
//!    drives a [`Handler`](export::Handler): balanced start/end events for
//!    containers and single atomic events for leaves. Concrete handlers
//!    ([`HtmlRenderer`](export::HtmlRenderer),
//!    [`KeywordCollector`](export::KeywordCollector)) accumulate output in
//!    their own state.
//!
//! Parsing raw Org text into the tree is out of scope; tests and embedders
//! construct trees through [`testing::TreeBuilder`] or an external parser.
//!
//! ## Example
//!
//! ```text
//! let doc: SyntaxNode = /* built by the external parser */;
//! let html = orgview::to_html(&doc);
//! let keywords = orgview::collect_keywords(&doc);
//! ```

pub mod ast;
pub mod export;
pub mod host;
pub mod schema;
pub mod syntax;
pub mod testing;

pub use syntax::{OrgLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

use export::{drive, Handler, HtmlRenderer, KeywordCollector};

/// Render a document node to an HTML string.
///
/// Runs an [`HtmlRenderer`] over the tree and returns its buffer.
pub fn to_html(document: &SyntaxNode) -> String {
    let mut renderer = HtmlRenderer::new();
    drive(document, &mut renderer);
    renderer.finish()
}

/// Collect every keyword in the document, in encounter order.
///
/// Duplicate keys keep all of their values: `#+TITLE` declared twice yields
/// two entries under `TITLE`.
pub fn collect_keywords(document: &SyntaxNode) -> Vec<(String, Vec<String>)> {
    let mut collector = KeywordCollector::new();
    drive(document, &mut collector);
    collector.into_keywords()
}

/// Run an arbitrary handler over a document node.
///
/// Thin re-export of [`export::drive`] for embedders that only pull in the
/// crate root.
pub fn handle<H: Handler>(document: &SyntaxNode, handler: &mut H) {
    drive(document, handler);
}
