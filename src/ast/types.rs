//! The node schema: one declarative entry per facade type.
//!
//! This is the data the generator in `macros.rs` compiles. Adding a facade
//! means adding an entry here; the registry in [`crate::schema`] picks it
//! up automatically.

use super::macros::org_ast;

org_ast! {
    /// The document root.
    Document(DOCUMENT) {
        pre_blank;
        first_child section -> Section;
        first_child first_headline -> Headline;
        last_child last_headline -> Headline;
        children headlines -> Headline;
    }

    /// Content before the first headline, or directly under one.
    Section(SECTION) {
        post_blank;
    }

    /// A `* Heading` line together with everything it owns.
    Headline(HEADLINE) {
        token stars -> HEADLINE_STARS;
        token keyword -> HEADLINE_KEYWORD;
        token priority -> HEADLINE_PRIORITY;
        token tags_raw -> HEADLINE_TAGS;
        first_child title -> HeadlineTitle;
        first_child planning -> Planning;
        first_child property_drawer -> PropertyDrawer;
        first_child section -> Section;
        children headlines -> Headline;
        post_blank;
    }

    /// The text portion of a headline.
    HeadlineTitle(HEADLINE_TITLE) {
        parent headline -> Headline;
    }

    /// `SCHEDULED:`/`DEADLINE:`/`CLOSED:` line under a headline.
    Planning(PLANNING) {}

    /// `:PROPERTIES:` drawer under a headline.
    PropertyDrawer(PROPERTY_DRAWER) {
        children properties -> NodeProperty;
    }

    /// One `:KEY: value` line inside a property drawer.
    NodeProperty(NODE_PROPERTY) {}

    Paragraph(PARAGRAPH) {
        post_blank;
        affiliated_keywords;
    }

    /// Plain or ordered list.
    List(LIST) {
        children items -> ListItem;
        post_blank;
        affiliated_keywords;
    }

    ListItem(LIST_ITEM) {
        token bullet -> LIST_BULLET;
    }

    OrgTable(ORG_TABLE) {
        children rows -> TableRow;
        post_blank;
        affiliated_keywords;
    }

    /// Standard row or horizontal rule row; two surface kinds of one
    /// semantic type.
    TableRow(TABLE_STANDARD_ROW | TABLE_RULE_ROW) {
        children cells -> TableCell;
    }

    TableCell(TABLE_CELL) {}

    QuoteBlock(QUOTE_BLOCK) {
        post_blank;
        affiliated_keywords;
    }

    CenterBlock(CENTER_BLOCK) {
        post_blank;
        affiliated_keywords;
    }

    VerseBlock(VERSE_BLOCK) {
        post_blank;
        affiliated_keywords;
    }

    ExampleBlock(EXAMPLE_BLOCK) {
        post_blank;
        affiliated_keywords;
    }

    ExportBlock(EXPORT_BLOCK) {
        post_blank;
        affiliated_keywords;
    }

    SourceBlock(SOURCE_BLOCK) {
        token language -> SRC_LANGUAGE;
        token arguments -> SRC_ARGUMENTS;
        post_blank;
        affiliated_keywords;
    }

    /// A run of `: `-prefixed lines.
    FixedWidth(FIXED_WIDTH) {
        post_blank;
        affiliated_keywords;
    }

    /// Horizontal rule (`-----`).
    Rule(RULE) {
        post_blank;
    }

    Comment(COMMENT) {
        post_blank;
    }

    /// Standalone `#+KEY: value` line.
    Keyword(KEYWORD) {
        token key -> KEYWORD_KEY;
        token optional -> KEYWORD_OPTIONAL;
        token value -> KEYWORD_VALUE;
    }

    /// `#+KEY: value` line preceding a structural element.
    AffiliatedKeyword(AFFILIATED_KEYWORD) {
        token key -> KEYWORD_KEY;
        token optional -> KEYWORD_OPTIONAL;
        token value -> KEYWORD_VALUE;
    }

    Bold(BOLD) {}

    Italic(ITALIC) {}

    Strike(STRIKE) {}

    Underline(UNDERLINE) {}

    Code(CODE) {}

    Verbatim(VERBATIM) {}

    /// Statistics cookie, `[1/3]` or `[50%]`.
    Cookie(COOKIE) {}

    InlineSrc(INLINE_SRC) {
        token language -> SRC_LANGUAGE;
    }

    Link(LINK) {
        token path -> LINK_PATH;
    }

    /// Export snippet, `@@backend:value@@`.
    Snippet(SNIPPET) {
        token name -> SNIPPET_NAME;
    }

    /// Active, inactive or diary timestamp. Range values share token kinds
    /// between both ends, hence the first/last split.
    Timestamp(TIMESTAMP_ACTIVE | TIMESTAMP_INACTIVE | TIMESTAMP_DIARY) {
        token year_start -> TIMESTAMP_YEAR;
        token month_start -> TIMESTAMP_MONTH;
        token day_start -> TIMESTAMP_DAY;
        token hour_start -> TIMESTAMP_HOUR;
        token minute_start -> TIMESTAMP_MINUTE;
        last_token year_end -> TIMESTAMP_YEAR;
        last_token month_end -> TIMESTAMP_MONTH;
        last_token day_end -> TIMESTAMP_DAY;
        last_token hour_end -> TIMESTAMP_HOUR;
        last_token minute_end -> TIMESTAMP_MINUTE;
    }
}
