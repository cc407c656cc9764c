//! Hand-written headline accessors.

use rowan::ast::AstNode;

use super::Headline;

impl Headline {
    /// Nesting level, i.e. the number of leading stars.
    ///
    /// A headline without a stars token is malformed input from the
    /// external parser; it degrades to level 1.
    pub fn level(&self) -> usize {
        self.stars()
            .map_or(1, |stars| stars.text().chars().filter(|&c| c == '*').count().max(1))
    }

    /// Tags of the headline, split out of the trailing `:a:b:` token.
    pub fn tags(&self) -> Vec<String> {
        self.tags_raw().map_or_else(Vec::new, |token| {
            token
                .text()
                .split(':')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Raw text of the title portion; empty when the title node is absent.
    pub fn title_raw(&self) -> String {
        self.title()
            .map_or_else(String::new, |title| title.syntax().text().to_string())
    }
}
