//! Syntax kinds and tree support
//!
//! The concrete syntax tree itself is `rowan`'s: an immutable, kind-tagged
//! tree with document-order children, parent links and text ranges. This
//! module pins the Org kind set onto it and collects the small navigation
//! helpers the typed facades are built from.
//!
//! Trivia contract: the external parser attaches one `BLANK_LINE` token per
//! fully empty line as a direct child of the surrounding node. The
//! `pre_blank`/`post_blank` counters defined here count exactly those
//! tokens; where the parser attaches them (leading or trailing) decides
//! which of the two a facade exposes.

mod kind;
pub mod support;

pub use kind::SyntaxKind;

/// Marker type tying [`SyntaxKind`] to rowan's generic tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrgLanguage {}

impl rowan::Language for OrgLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        SyntaxKind::from_raw(raw.0)
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

pub type SyntaxNode = rowan::SyntaxNode<OrgLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<OrgLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<OrgLanguage>;
