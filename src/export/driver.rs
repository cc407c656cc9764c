//! Maps the tree walk onto handler hooks.
//!
//! The walk itself is rowan's `preorder_with_tokens`; this module only
//! decides, per kind, whether a node is a paired container (start on
//! enter, end on leave), an atomic leaf (one event, subtree skipped) or
//! structural noise (descend or skip silently). Balanced nesting follows
//! directly from the enter/leave discipline of the walk.

use rowan::ast::{support, AstNode};
use rowan::{NodeOrToken, WalkEvent};

use crate::ast;
use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

use super::handler::{
    Block, Cookie, FixedWidth, Handler, InlineSrc, Keyword, Link, List, Snippet, SourceBlock,
    Timestamp, Title,
};

/// Run one traversal of `root`, firing `handler`'s hooks in document
/// order. Output accumulates in the handler; there is no return value.
pub fn drive<H: Handler>(root: &SyntaxNode, handler: &mut H) {
    let mut captured = Captured::default();
    let mut preorder = root.preorder_with_tokens();
    while let Some(event) = preorder.next() {
        match event {
            WalkEvent::Enter(NodeOrToken::Node(node)) => {
                if let Descend::Skip = enter(&node, handler, &mut captured) {
                    preorder.skip_subtree();
                }
            }
            WalkEvent::Leave(NodeOrToken::Node(node)) => leave(&node, handler, &mut captured),
            WalkEvent::Enter(NodeOrToken::Token(token)) => {
                if token.kind() == SyntaxKind::TEXT {
                    handler.text(token.text());
                }
            }
            WalkEvent::Leave(NodeOrToken::Token(_)) => {}
        }
    }
}

/// Start payloads captured on enter and replayed on leave, so the end
/// event of a pair always sees the value its start event saw.
#[derive(Default)]
struct Captured {
    titles: Vec<Title>,
    lists: Vec<List>,
}

enum Descend {
    Yes,
    Skip,
}

fn enter<H: Handler>(node: &SyntaxNode, handler: &mut H, captured: &mut Captured) -> Descend {
    use SyntaxKind::*;

    match node.kind() {
        DOCUMENT => handler.document_start(),
        SECTION => handler.section_start(),
        // Structural only; the title node underneath carries the events.
        HEADLINE => {}
        HEADLINE_TITLE => {
            let title = title_payload(node);
            handler.title_start(&title);
            captured.titles.push(title);
        }
        PARAGRAPH => handler.paragraph_start(),
        LIST => {
            let list = List {
                ordered: ast::List::cast(node.clone()).map_or(false, |list| list.ordered()),
            };
            handler.list_start(&list);
            captured.lists.push(list);
        }
        LIST_ITEM => handler.list_item_start(),
        ORG_TABLE => handler.table_start(),
        TABLE_STANDARD_ROW | TABLE_RULE_ROW => handler.table_row_start(),
        TABLE_CELL => handler.table_cell_start(),
        QUOTE_BLOCK => handler.quote_block_start(),
        CENTER_BLOCK => handler.center_block_start(),
        VERSE_BLOCK => handler.verse_block_start(),
        BOLD => handler.bold_start(),
        ITALIC => handler.italic_start(),
        STRIKE => handler.strike_start(),
        UNDERLINE => handler.underline_start(),

        EXAMPLE_BLOCK => {
            let block = ast::ExampleBlock::cast(node.clone()).map_or_else(Block::default, |b| {
                Block {
                    contents: b.contents(),
                }
            });
            handler.example_block(&block);
            return Descend::Skip;
        }
        EXPORT_BLOCK => {
            let block = ast::ExportBlock::cast(node.clone()).map_or_else(Block::default, |b| {
                Block {
                    contents: b.contents(),
                }
            });
            handler.export_block(&block);
            return Descend::Skip;
        }
        SOURCE_BLOCK => {
            let block = source_block_payload(node);
            handler.source_block(&block);
            return Descend::Skip;
        }
        FIXED_WIDTH => {
            let value = ast::FixedWidth::cast(node.clone()).map_or_else(String::new, |f| f.value());
            handler.fixed_width(&FixedWidth { value });
            return Descend::Skip;
        }
        RULE => {
            handler.rule();
            return Descend::Skip;
        }
        KEYWORD | AFFILIATED_KEYWORD => {
            handler.keyword(&keyword_payload(node));
            return Descend::Skip;
        }
        CODE => {
            let value = ast::Code::cast(node.clone()).map_or_else(String::new, |c| c.value());
            handler.code(&value);
            return Descend::Skip;
        }
        VERBATIM => {
            let value = ast::Verbatim::cast(node.clone()).map_or_else(String::new, |v| v.value());
            handler.verbatim(&value);
            return Descend::Skip;
        }
        COOKIE => {
            handler.cookie(&Cookie {
                value: node.text().to_string(),
            });
            return Descend::Skip;
        }
        INLINE_SRC => {
            let src = ast::InlineSrc::cast(node.clone()).map_or_else(InlineSrc::default, |s| {
                InlineSrc {
                    language: token_text(s.language()).unwrap_or_default(),
                    body: s.body(),
                }
            });
            handler.inline_src(&src);
            return Descend::Skip;
        }
        LINK => {
            let link = ast::Link::cast(node.clone()).map_or_else(Link::default, |l| Link {
                path: token_text(l.path()).unwrap_or_default(),
                description: l.description(),
            });
            handler.link(&link);
            return Descend::Skip;
        }
        SNIPPET => {
            let snippet = ast::Snippet::cast(node.clone()).map_or_else(Snippet::default, |s| {
                Snippet {
                    name: token_text(s.name()).unwrap_or_default(),
                    value: s.value(),
                }
            });
            handler.snippet(&snippet);
            return Descend::Skip;
        }
        TIMESTAMP_ACTIVE | TIMESTAMP_INACTIVE | TIMESTAMP_DIARY => {
            handler.timestamp(&Timestamp {
                active: node.kind() == TIMESTAMP_ACTIVE,
                raw: node.text().to_string(),
            });
            return Descend::Skip;
        }

        // Metadata without hooks of their own; property drawers surface
        // through the title payload instead.
        PLANNING | COMMENT | PROPERTY_DRAWER => return Descend::Skip,

        _ => {}
    }
    Descend::Yes
}

fn leave<H: Handler>(node: &SyntaxNode, handler: &mut H, captured: &mut Captured) {
    use SyntaxKind::*;

    match node.kind() {
        DOCUMENT => handler.document_end(),
        SECTION => handler.section_end(),
        HEADLINE_TITLE => {
            let title = captured.titles.pop().unwrap_or_default();
            handler.title_end(&title);
        }
        PARAGRAPH => handler.paragraph_end(),
        LIST => {
            let list = captured.lists.pop().unwrap_or_default();
            handler.list_end(&list);
        }
        LIST_ITEM => handler.list_item_end(),
        ORG_TABLE => handler.table_end(),
        TABLE_STANDARD_ROW | TABLE_RULE_ROW => handler.table_row_end(),
        TABLE_CELL => handler.table_cell_end(),
        QUOTE_BLOCK => handler.quote_block_end(),
        CENTER_BLOCK => handler.center_block_end(),
        VERSE_BLOCK => handler.verse_block_end(),
        BOLD => handler.bold_end(),
        ITALIC => handler.italic_end(),
        STRIKE => handler.strike_end(),
        UNDERLINE => handler.underline_end(),
        _ => {}
    }
}

fn title_payload(node: &SyntaxNode) -> Title {
    let raw = node.text().to_string();
    match node.parent().and_then(ast::Headline::cast) {
        Some(headline) => Title {
            level: headline.level(),
            priority: token_text(headline.priority()),
            tags: headline.tags(),
            keyword: token_text(headline.keyword()),
            raw,
            properties: headline
                .property_drawer()
                .map(|drawer| drawer.to_hash_map())
                .unwrap_or_default(),
            post_blank: headline.post_blank(),
        },
        // A detached title is malformed input; degrade instead of failing.
        None => Title {
            level: 1,
            raw,
            ..Title::default()
        },
    }
}

fn source_block_payload(node: &SyntaxNode) -> SourceBlock {
    match ast::SourceBlock::cast(node.clone()) {
        Some(block) => SourceBlock {
            contents: block.contents(),
            language: token_text(block.language()).unwrap_or_default(),
            arguments: token_text(block.arguments()).unwrap_or_default(),
            post_blank: block.post_blank(),
        },
        None => SourceBlock::default(),
    }
}

fn keyword_payload(node: &SyntaxNode) -> Keyword {
    Keyword {
        key: token_text(support::token(node, SyntaxKind::KEYWORD_KEY)).unwrap_or_default(),
        optional: token_text(support::token(node, SyntaxKind::KEYWORD_OPTIONAL)),
        value: token_text(support::token(node, SyntaxKind::KEYWORD_VALUE)).unwrap_or_default(),
    }
}

fn token_text(token: Option<SyntaxToken>) -> Option<String> {
    token.map(|token| token.text().to_string())
}
