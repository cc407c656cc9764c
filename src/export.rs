//! Event-driven export.
//!
//! A traversal walks the tree depth-first and notifies a [`Handler`]:
//! container constructs get balanced start/end pairs (pre-order start,
//! post-order end), leaf constructs get a single atomic event carrying an
//! owned payload snapshot. Handlers implement only the hooks they care
//! about; every hook defaults to a no-op.
//!
//! A handler instance is driven by at most one traversal at a time and
//! accumulates its output monotonically; read it back once [`drive`]
//! returns.

mod driver;
mod handler;
mod html;
mod keywords;

pub use driver::drive;
pub use handler::{
    Block, Cookie, FixedWidth, Handler, InlineSrc, Keyword, Link, List, Snippet, SourceBlock,
    Timestamp, Title,
};
pub use html::{escape_html, HtmlRenderer};
pub use keywords::KeywordCollector;
