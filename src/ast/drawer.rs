//! Hand-written property drawer accessors.
//!
//! A node property holds its key and value as its first two `TEXT` tokens;
//! the `:` delimiters carry their own kinds. An entry with fewer than two
//! text tokens is malformed and skipped.

use std::collections::HashMap;

use crate::syntax::{SyntaxKind, SyntaxToken};

use super::PropertyDrawer;

impl PropertyDrawer {
    /// Key/value token pairs, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (SyntaxToken, SyntaxToken)> {
        self.properties().filter_map(|property| {
            let mut texts = property
                .syntax
                .children_with_tokens()
                .filter_map(|element| element.into_token())
                .filter(|token| token.kind() == SyntaxKind::TEXT);
            Some((texts.next()?, texts.next()?))
        })
    }

    /// Value of the first property whose key matches exactly.
    pub fn get(&self, key: &str) -> Option<SyntaxToken> {
        self.iter()
            .find_map(|(k, v)| (k.text() == key).then_some(v))
    }

    /// The drawer as an owned map; a repeated key keeps its last value.
    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.text().to_string(), v.text().to_string()))
            .collect()
    }
}
