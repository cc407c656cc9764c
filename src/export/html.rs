//! HTML rendering handler.

use super::handler::{
    Block, Cookie, FixedWidth, Handler, InlineSrc, Keyword, Link, List, Snippet, SourceBlock,
    Timestamp, Title,
};

/// Escape the five HTML-reserved characters.
///
/// Pure substitution: each of `& < > " '` is replaced by its named entity,
/// everything else passes through untouched, order and multiplicity
/// preserved.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders traversal events into an append-only HTML buffer.
///
/// Each hook appends a fixed fragment. Hooks the renderer does not
/// implement (tables, timestamps, keywords, export blocks) fall through to
/// the protocol's no-ops and leave no trace in the output.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the renderer, returning the accumulated HTML.
    pub fn finish(self) -> String {
        self.output
    }
}

impl Handler for HtmlRenderer {
    fn document_start(&mut self) {
        self.output.push_str("<main>");
    }

    fn document_end(&mut self) {
        self.output.push_str("</main>");
    }

    fn section_start(&mut self) {
        self.output.push_str("<section>");
    }

    fn section_end(&mut self) {
        self.output.push_str("</section>");
    }

    fn title_start(&mut self, title: &Title) {
        self.output.push_str(&format!("<h{}>", title.level.min(6)));
    }

    fn title_end(&mut self, title: &Title) {
        self.output.push_str(&format!("</h{}>", title.level.min(6)));
    }

    fn paragraph_start(&mut self) {
        self.output.push_str("<p>");
    }

    fn paragraph_end(&mut self) {
        self.output.push_str("</p>");
    }

    fn list_start(&mut self, list: &List) {
        self.output
            .push_str(if list.ordered { "<ol>" } else { "<ul>" });
    }

    fn list_end(&mut self, list: &List) {
        self.output
            .push_str(if list.ordered { "</ol>" } else { "</ul>" });
    }

    fn list_item_start(&mut self) {
        self.output.push_str("<li>");
    }

    fn list_item_end(&mut self) {
        self.output.push_str("</li>");
    }

    fn bold_start(&mut self) {
        self.output.push_str("<b>");
    }

    fn bold_end(&mut self) {
        self.output.push_str("</b>");
    }

    fn italic_start(&mut self) {
        self.output.push_str("<i>");
    }

    fn italic_end(&mut self) {
        self.output.push_str("</i>");
    }

    fn strike_start(&mut self) {
        self.output.push_str("<s>");
    }

    fn strike_end(&mut self) {
        self.output.push_str("</s>");
    }

    fn underline_start(&mut self) {
        self.output.push_str("<u>");
    }

    fn underline_end(&mut self) {
        self.output.push_str("</u>");
    }

    fn quote_block_start(&mut self) {
        self.output.push_str("<blockquote>");
    }

    fn quote_block_end(&mut self) {
        self.output.push_str("</blockquote>");
    }

    fn center_block_start(&mut self) {
        self.output.push_str("<div class=\"center\">");
    }

    fn center_block_end(&mut self) {
        self.output.push_str("</div>");
    }

    fn verse_block_start(&mut self) {
        self.output.push_str("<p class=\"verse\">");
    }

    fn verse_block_end(&mut self) {
        self.output.push_str("</p>");
    }

    fn text(&mut self, text: &str) {
        self.output.push_str(&escape_html(text));
    }

    fn code(&mut self, value: &str) {
        self.output
            .push_str(&format!("<code>{}</code>", escape_html(value)));
    }

    fn verbatim(&mut self, value: &str) {
        self.output
            .push_str(&format!("<code>{}</code>", escape_html(value)));
    }

    fn cookie(&mut self, cookie: &Cookie) {
        self.output
            .push_str(&format!("<code>{}</code>", escape_html(&cookie.value)));
    }

    fn rule(&mut self) {
        self.output.push_str("<hr>");
    }

    fn example_block(&mut self, block: &Block) {
        self.output.push_str(&format!(
            "<pre class=\"example\">{}</pre>",
            escape_html(&block.contents)
        ));
    }

    fn source_block(&mut self, block: &SourceBlock) {
        self.output.push_str(&format!(
            "<pre class=\"example\">{}</pre>",
            escape_html(&block.contents)
        ));
    }

    fn inline_src(&mut self, src: &InlineSrc) {
        self.output.push_str(&format!(
            "<code class=\"src src-{}\">{}</code>",
            src.language,
            escape_html(&src.body)
        ));
    }

    fn link(&mut self, link: &Link) {
        let text = link.description.as_deref().unwrap_or(&link.path);
        self.output.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            link.path,
            escape_html(text)
        ));
    }

    /// Raw passthrough, but only for the HTML backend; snippets aimed at
    /// any other backend are dropped without a trace.
    fn snippet(&mut self, snippet: &Snippet) {
        if snippet.name.eq_ignore_ascii_case("html") {
            self.output.push_str(&snippet.value);
        }
    }

    fn fixed_width(&mut self, fixed_width: &FixedWidth) {
        self.output.push_str(&format!(
            "<pre class=\"example\">{}</pre>",
            escape_html(&fixed_width.value)
        ));
    }

    // Keywords and timestamps are metadata; rendering them is a different
    // backend's job.
    fn keyword(&mut self, _keyword: &Keyword) {}

    fn timestamp(&mut self, _timestamp: &Timestamp) {}
}
