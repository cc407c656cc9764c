//! The visitor event protocol: hooks and their payloads.
//!
//! Payloads are owned snapshots taken when the start (or atomic) event
//! fires; they do not borrow the tree. For paired constructs whose end
//! event carries a payload (title, list) the driver replays the value it
//! captured at the start, so both ends always agree even if the tree were
//! swapped out in between.

use std::collections::HashMap;

use serde::Serialize;

/// Snapshot of a headline title at event time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Title {
    /// Heading level; renderers clamp, the payload does not.
    pub level: usize,
    pub priority: Option<String>,
    pub tags: Vec<String>,
    /// TODO/DONE-style keyword, when present.
    pub keyword: Option<String>,
    /// Title text as written.
    pub raw: String,
    /// The headline's property drawer as a map; a repeated key keeps its
    /// last value. Empty when there is no drawer.
    pub properties: HashMap<String, String>,
    pub post_blank: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
}

/// Opaque content block (example, export).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceBlock {
    pub contents: String,
    pub language: String,
    pub arguments: String,
    pub post_blank: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineSrc {
    pub language: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub path: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Target backend name, e.g. `html`.
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cookie {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixedWidth {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub key: String,
    pub optional: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    pub active: bool,
    /// The timestamp as written, brackets included.
    pub raw: String,
}

/// The complete hook set a traversal may invoke.
///
/// Every hook defaults to a no-op, so a consumer overrides exactly the
/// hooks it cares about; skipping the rest is always safe. Start/end pairs
/// nest properly: the driver fires starts pre-order and ends post-order,
/// never interleaving two constructs.
#[allow(unused_variables)]
pub trait Handler {
    // Paired hooks
    fn document_start(&mut self) {}
    fn document_end(&mut self) {}
    fn section_start(&mut self) {}
    fn section_end(&mut self) {}
    fn title_start(&mut self, title: &Title) {}
    fn title_end(&mut self, title: &Title) {}
    fn paragraph_start(&mut self) {}
    fn paragraph_end(&mut self) {}
    fn list_start(&mut self, list: &List) {}
    fn list_end(&mut self, list: &List) {}
    fn list_item_start(&mut self) {}
    fn list_item_end(&mut self) {}
    fn bold_start(&mut self) {}
    fn bold_end(&mut self) {}
    fn italic_start(&mut self) {}
    fn italic_end(&mut self) {}
    fn strike_start(&mut self) {}
    fn strike_end(&mut self) {}
    fn underline_start(&mut self) {}
    fn underline_end(&mut self) {}
    fn quote_block_start(&mut self) {}
    fn quote_block_end(&mut self) {}
    fn center_block_start(&mut self) {}
    fn center_block_end(&mut self) {}
    fn verse_block_start(&mut self) {}
    fn verse_block_end(&mut self) {}
    fn table_start(&mut self) {}
    fn table_end(&mut self) {}
    fn table_row_start(&mut self) {}
    fn table_row_end(&mut self) {}
    fn table_cell_start(&mut self) {}
    fn table_cell_end(&mut self) {}

    // Atomic hooks
    fn text(&mut self, text: &str) {}
    fn code(&mut self, value: &str) {}
    fn verbatim(&mut self, value: &str) {}
    fn cookie(&mut self, cookie: &Cookie) {}
    fn rule(&mut self) {}
    fn example_block(&mut self, block: &Block) {}
    fn export_block(&mut self, block: &Block) {}
    fn source_block(&mut self, block: &SourceBlock) {}
    fn inline_src(&mut self, src: &InlineSrc) {}
    fn link(&mut self, link: &Link) {}
    fn snippet(&mut self, snippet: &Snippet) {}
    fn timestamp(&mut self, timestamp: &Timestamp) {}
    fn fixed_width(&mut self, fixed_width: &FixedWidth) {}
    fn keyword(&mut self, keyword: &Keyword) {}
}
