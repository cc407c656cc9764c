//! Hand-written accessors for inline objects.

use crate::syntax::support::text_of;
use crate::syntax::SyntaxKind;

use super::{Code, Cookie, InlineSrc, Link, Snippet, Timestamp, Verbatim};

impl Link {
    /// Description text of the link, when one is present.
    pub fn description(&self) -> Option<String> {
        let description = text_of(&self.syntax);
        (!description.is_empty()).then_some(description)
    }
}

impl Cookie {
    /// The cookie including its brackets, e.g. `[1/3]`.
    pub fn value(&self) -> String {
        self.syntax.text().to_string()
    }
}

impl Code {
    pub fn value(&self) -> String {
        text_of(&self.syntax)
    }
}

impl Verbatim {
    pub fn value(&self) -> String {
        text_of(&self.syntax)
    }
}

impl InlineSrc {
    /// The source body between the braces of `src_lang{body}`.
    pub fn body(&self) -> String {
        text_of(&self.syntax)
    }
}

impl Snippet {
    /// The value portion of `@@name:value@@`.
    pub fn value(&self) -> String {
        text_of(&self.syntax)
    }
}

impl Timestamp {
    pub fn is_active(&self) -> bool {
        self.syntax.kind() == SyntaxKind::TIMESTAMP_ACTIVE
    }

    /// The timestamp as written, brackets included.
    pub fn raw(&self) -> String {
        self.syntax.text().to_string()
    }
}
