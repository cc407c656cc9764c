//! The closed set of node and token kinds.
//!
//! Kinds are assigned by the external parser when the tree is built and are
//! immutable afterwards. Node kinds come first, token kinds after `TEXT`;
//! the numbering itself carries no meaning beyond the raw round-trip.

macro_rules! syntax_kinds {
    ($($(#[$meta:meta])* $kind:ident,)+) => {
        /// Kind tag carried by every node and token in the tree.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($(#[$meta])* $kind,)+
        }

        impl SyntaxKind {
            const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind),+];
        }
    };
}

syntax_kinds! {
    // Structural nodes
    DOCUMENT,
    SECTION,
    HEADLINE,
    HEADLINE_TITLE,
    PLANNING,
    PROPERTY_DRAWER,
    NODE_PROPERTY,
    PARAGRAPH,
    LIST,
    LIST_ITEM,
    ORG_TABLE,
    TABLE_STANDARD_ROW,
    TABLE_RULE_ROW,
    TABLE_CELL,
    QUOTE_BLOCK,
    CENTER_BLOCK,
    VERSE_BLOCK,
    EXAMPLE_BLOCK,
    EXPORT_BLOCK,
    SOURCE_BLOCK,
    FIXED_WIDTH,
    RULE,
    COMMENT,
    KEYWORD,
    AFFILIATED_KEYWORD,
    // Inline nodes
    BOLD,
    ITALIC,
    STRIKE,
    UNDERLINE,
    CODE,
    VERBATIM,
    COOKIE,
    INLINE_SRC,
    LINK,
    SNIPPET,
    TIMESTAMP_ACTIVE,
    TIMESTAMP_INACTIVE,
    TIMESTAMP_DIARY,
    // Tokens
    TEXT,
    WHITESPACE,
    BLANK_LINE,
    HEADLINE_STARS,
    HEADLINE_KEYWORD,
    HEADLINE_PRIORITY,
    HEADLINE_TAGS,
    LIST_BULLET,
    LINK_PATH,
    SRC_LANGUAGE,
    SRC_ARGUMENTS,
    SNIPPET_NAME,
    KEYWORD_KEY,
    KEYWORD_OPTIONAL,
    KEYWORD_VALUE,
    TIMESTAMP_YEAR,
    TIMESTAMP_MONTH,
    TIMESTAMP_DAY,
    TIMESTAMP_HOUR,
    TIMESTAMP_MINUTE,
}

impl SyntaxKind {
    pub(crate) fn from_raw(raw: u16) -> SyntaxKind {
        debug_assert!(
            (raw as usize) < Self::ALL.len(),
            "raw kind {raw} is outside the Org kind set"
        );
        Self::ALL[raw as usize]
    }
}
