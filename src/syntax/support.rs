//! Navigation helpers shared by the generated facades.
//!
//! These complement `rowan::ast::support` with the "from the back" lookups
//! the schema needs: range-valued constructs (timestamps) carry the same
//! token kind at both ends, so first and last must be distinguishable.

use rowan::ast::AstNode;

use super::{OrgLanguage, SyntaxKind, SyntaxNode, SyntaxToken};

/// Last child token of the given kind, in document order.
pub fn last_token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == kind)
        .last()
}

/// Last child node castable to the facade `N`, in document order.
pub fn last_child<N: AstNode<Language = OrgLanguage>>(parent: &SyntaxNode) -> Option<N> {
    parent.children().filter_map(N::cast).last()
}

/// Number of blank-line trivia tokens among the node's direct children.
///
/// See the module docs of [`crate::syntax`] for the trivia contract.
pub fn blank_lines(parent: &SyntaxNode) -> usize {
    parent
        .children_with_tokens()
        .filter(|element| element.kind() == SyntaxKind::BLANK_LINE)
        .count()
}

/// Concatenated text of the node's direct `TEXT` token children.
///
/// Markers, delimiters and structural tokens carry their own kinds, so this
/// yields exactly the content portion of leaf constructs.
pub fn text_of(parent: &SyntaxNode) -> String {
    parent
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::TEXT)
        .map(|token| token.text().to_string())
        .collect()
}
