//! Hand-written content accessors for the block elements.
//!
//! Block delimiters (`#+BEGIN_…`/`#+END_…`) and parameters carry their own
//! token kinds, so the content of a block is exactly its `TEXT` token
//! children.

use crate::syntax::support::text_of;

use super::{Comment, ExampleBlock, ExportBlock, FixedWidth, SourceBlock};

impl ExampleBlock {
    pub fn contents(&self) -> String {
        text_of(&self.syntax)
    }
}

impl ExportBlock {
    pub fn contents(&self) -> String {
        text_of(&self.syntax)
    }
}

impl SourceBlock {
    pub fn contents(&self) -> String {
        text_of(&self.syntax)
    }
}

impl FixedWidth {
    /// Content of the fixed-width run, without the `: ` prefixes.
    pub fn value(&self) -> String {
        text_of(&self.syntax)
    }
}

impl Comment {
    pub fn value(&self) -> String {
        text_of(&self.syntax)
    }
}
