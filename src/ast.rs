//! Typed facades over the generic syntax tree.
//!
//! Every facade is a non-owning view restricted to one semantic type: it
//! holds a handle to exactly one underlying node and reads the tree lazily
//! through its accessors. The facade types, their `cast`/`can_cast` entry
//! points and all navigation accessors are generated from the declarative
//! schema in `types.rs` by the [`org_ast!`](macros) macro; the handful of
//! accessors that need real logic (headline levels, list ordering, block
//! contents) are written out by hand next to it.
//!
//! Downcasting never fails loudly: a kind mismatch is `None`, a missing
//! relation is `None`, an empty child sequence is an empty iterator.

mod blocks;
mod drawer;
mod headline;
mod list;
mod macros;
mod objects;
mod types;

pub use rowan::ast::{AstChildren, AstNode};
pub use types::*;

pub(crate) use types::REGISTRY;

use crate::syntax::{SyntaxKind, SyntaxNode};

/// Resolve an affiliated keyword of an element.
///
/// Scans the maximal contiguous prefix of child nodes that are affiliated
/// keywords; the scan stops at the first child of any other kind, so a
/// keyword appearing after real content never matches. Within the prefix
/// the first keyword (document order) whose key passes the filter wins.
pub(crate) fn affiliated_keyword(
    node: &SyntaxNode,
    filter: impl Fn(&str) -> bool,
) -> Option<AffiliatedKeyword> {
    node.children()
        .take_while(|child| child.kind() == SyntaxKind::AFFILIATED_KEYWORD)
        .filter_map(AffiliatedKeyword::cast)
        .find(|keyword| keyword.key().map_or(false, |key| filter(key.text())))
}
