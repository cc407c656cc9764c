//! Facade navigation over hand-built trees.
//!
//! Trees are constructed directly through `orgview::testing` since parsing
//! is external to this crate; every test states the shape it builds.

use orgview::ast::{
    AstNode, Document, Headline, HeadlineTitle, List, OrgTable, Paragraph, PropertyDrawer,
    Section, TableRow, Timestamp,
};
use orgview::testing::{self, TreeBuilder};
use orgview::SyntaxKind;

#[test]
fn downcast_succeeds_on_matching_kind_and_keeps_the_span() {
    // DOCUMENT > SECTION > PARAGRAPH("hello")
    let doc = testing::document(|b| {
        b.node(SyntaxKind::SECTION, |b| {
            b.node(SyntaxKind::PARAGRAPH, |b| {
                b.token(SyntaxKind::TEXT, "hello");
            });
        });
    });

    let section_node = doc.first_child().unwrap();
    let paragraph_node = section_node.first_child().unwrap();

    let paragraph = Paragraph::cast(paragraph_node.clone()).unwrap();
    assert_eq!(paragraph.begin(), u32::from(paragraph_node.text_range().start()));
    assert_eq!(paragraph.end(), u32::from(paragraph_node.text_range().end()));
    assert_eq!((paragraph.begin(), paragraph.end()), (0, 5));
}

#[test]
fn downcast_returns_none_on_kind_mismatch() {
    let doc = testing::document(|b| {
        b.node(SyntaxKind::SECTION, |b| {
            b.node(SyntaxKind::PARAGRAPH, |b| {
                b.token(SyntaxKind::TEXT, "hello");
            });
        });
    });

    let section_node = doc.first_child().unwrap();
    assert!(List::cast(section_node.clone()).is_none());
    assert!(Paragraph::cast(section_node.clone()).is_none());
    assert!(Section::cast(section_node).is_some());
}

#[test]
fn multi_kind_facade_accepts_every_surface_variant() {
    for kind in [
        SyntaxKind::TIMESTAMP_ACTIVE,
        SyntaxKind::TIMESTAMP_INACTIVE,
        SyntaxKind::TIMESTAMP_DIARY,
    ] {
        let mut builder = TreeBuilder::new();
        builder.node(kind, |b| {
            b.token(SyntaxKind::TIMESTAMP_YEAR, "2024");
        });
        let node = builder.finish();
        assert!(Timestamp::cast(node).is_some(), "{kind:?} must cast");
    }

    for kind in [SyntaxKind::TABLE_STANDARD_ROW, SyntaxKind::TABLE_RULE_ROW] {
        let mut builder = TreeBuilder::new();
        builder.node(kind, |_| {});
        assert!(TableRow::cast(builder.finish()).is_some(), "{kind:?} must cast");
    }
}

#[test]
fn token_and_last_token_pick_opposite_ends_of_a_range() {
    // A timestamp range: both ends carry the same token kinds.
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::TIMESTAMP_ACTIVE, |b| {
        b.token(SyntaxKind::TIMESTAMP_YEAR, "2024");
        b.token(SyntaxKind::TIMESTAMP_MONTH, "01");
        b.token(SyntaxKind::TIMESTAMP_DAY, "15");
        b.token(SyntaxKind::TEXT, "--");
        b.token(SyntaxKind::TIMESTAMP_YEAR, "2025");
        b.token(SyntaxKind::TIMESTAMP_MONTH, "02");
        b.token(SyntaxKind::TIMESTAMP_DAY, "20");
    });
    let timestamp = Timestamp::cast(builder.finish()).unwrap();

    assert_eq!(timestamp.year_start().unwrap().text(), "2024");
    assert_eq!(timestamp.year_end().unwrap().text(), "2025");
    assert_eq!(timestamp.day_start().unwrap().text(), "15");
    assert_eq!(timestamp.day_end().unwrap().text(), "20");
    // No time portion: absence, not an error.
    assert!(timestamp.hour_start().is_none());
    assert!(timestamp.hour_end().is_none());
}

#[test]
fn single_value_timestamp_has_equal_start_and_end_tokens() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::TIMESTAMP_INACTIVE, |b| {
        b.token(SyntaxKind::TIMESTAMP_YEAR, "2024");
    });
    let timestamp = Timestamp::cast(builder.finish()).unwrap();

    assert_eq!(
        timestamp.year_start().unwrap().text(),
        timestamp.year_end().unwrap().text()
    );
    assert!(!timestamp.is_active());
}

#[test]
fn first_and_last_child_are_distinct_from_any_child() {
    // DOCUMENT > [SECTION, HEADLINE("one"), HEADLINE("two")]
    let doc_node = testing::document(|b| {
        b.node(SyntaxKind::SECTION, |_| {});
        b.node(SyntaxKind::HEADLINE, |b| {
            b.token(SyntaxKind::HEADLINE_STARS, "*");
            b.node(SyntaxKind::HEADLINE_TITLE, |b| {
                b.token(SyntaxKind::TEXT, "one");
            });
        });
        b.node(SyntaxKind::HEADLINE, |b| {
            b.token(SyntaxKind::HEADLINE_STARS, "*");
            b.node(SyntaxKind::HEADLINE_TITLE, |b| {
                b.token(SyntaxKind::TEXT, "two");
            });
        });
    });
    let document = Document::cast(doc_node).unwrap();

    assert!(document.section().is_some());
    assert_eq!(document.first_headline().unwrap().title_raw(), "one");
    assert_eq!(document.last_headline().unwrap().title_raw(), "two");
    assert_eq!(document.headlines().count(), 2);
}

#[test]
fn children_sequence_is_restartable() {
    let doc_node = testing::document(|b| {
        for _ in 0..3 {
            b.node(SyntaxKind::HEADLINE, |_| {});
        }
    });
    let document = Document::cast(doc_node).unwrap();

    // Two independent iterations over the same accessor.
    assert_eq!(document.headlines().count(), 3);
    let levels: Vec<usize> = document.headlines().map(|h| h.level()).collect();
    assert_eq!(levels, [1, 1, 1]);
}

#[test]
fn distinguished_children_are_found_among_interleaved_siblings() {
    // HEADLINE > [HEADLINE_TITLE, PLANNING, SECTION, HEADLINE]
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |b| {
        b.token(SyntaxKind::HEADLINE_STARS, "**");
        b.node(SyntaxKind::HEADLINE_TITLE, |b| {
            b.token(SyntaxKind::TEXT, "parent");
        });
        b.node(SyntaxKind::PLANNING, |_| {});
        b.node(SyntaxKind::SECTION, |_| {});
        b.node(SyntaxKind::HEADLINE, |b| {
            b.token(SyntaxKind::HEADLINE_STARS, "***");
        });
    });
    let headline = Headline::cast(builder.finish()).unwrap();

    assert_eq!(headline.level(), 2);
    assert!(headline.planning().is_some());
    assert!(headline.section().is_some());
    assert_eq!(headline.headlines().count(), 1);
    assert_eq!(headline.headlines().next().unwrap().level(), 3);
}

#[test]
fn parent_accessor_downcasts_the_immediate_parent() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |b| {
        b.token(SyntaxKind::HEADLINE_STARS, "*");
        b.node(SyntaxKind::HEADLINE_TITLE, |b| {
            b.token(SyntaxKind::TEXT, "t");
        });
    });
    let headline_node = builder.finish();
    let title_node = headline_node.first_child().unwrap();

    let title = HeadlineTitle::cast(title_node).unwrap();
    assert_eq!(title.headline().unwrap().level(), 1);

    // A detached title has no parent to downcast.
    let mut detached = TreeBuilder::new();
    detached.node(SyntaxKind::HEADLINE_TITLE, |_| {});
    let title = HeadlineTitle::cast(detached.finish()).unwrap();
    assert!(title.headline().is_none());
}

#[test]
fn headline_metadata_accessors() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |b| {
        b.token(SyntaxKind::HEADLINE_STARS, "***");
        b.token(SyntaxKind::HEADLINE_KEYWORD, "TODO");
        b.token(SyntaxKind::HEADLINE_PRIORITY, "A");
        b.node(SyntaxKind::HEADLINE_TITLE, |b| {
            b.token(SyntaxKind::TEXT, "write tests");
        });
        b.token(SyntaxKind::HEADLINE_TAGS, ":work:urgent:");
    });
    let headline = Headline::cast(builder.finish()).unwrap();

    assert_eq!(headline.level(), 3);
    assert_eq!(headline.keyword().unwrap().text(), "TODO");
    assert_eq!(headline.priority().unwrap().text(), "A");
    assert_eq!(headline.tags(), ["work", "urgent"]);
    assert_eq!(headline.title_raw(), "write tests");
}

#[test]
fn blank_line_counters_count_trivia_children() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::PARAGRAPH, |b| {
        b.token(SyntaxKind::TEXT, "content");
        b.token(SyntaxKind::BLANK_LINE, "\n");
        b.token(SyntaxKind::BLANK_LINE, "\n");
    });
    let paragraph = Paragraph::cast(builder.finish()).unwrap();
    assert_eq!(paragraph.post_blank(), 2);

    let doc_node = testing::document(|b| {
        b.token(SyntaxKind::BLANK_LINE, "\n");
        b.node(SyntaxKind::SECTION, |_| {});
    });
    let document = Document::cast(doc_node).unwrap();
    assert_eq!(document.pre_blank(), 1);
}

#[test]
fn list_ordering_is_read_from_the_first_bullet() {
    let mut ordered = TreeBuilder::new();
    ordered.node(SyntaxKind::LIST, |b| {
        b.node(SyntaxKind::LIST_ITEM, |b| {
            b.token(SyntaxKind::LIST_BULLET, "1. ");
            b.token(SyntaxKind::TEXT, "first");
        });
    });
    assert!(List::cast(ordered.finish()).unwrap().ordered());

    let mut unordered = TreeBuilder::new();
    unordered.node(SyntaxKind::LIST, |b| {
        b.node(SyntaxKind::LIST_ITEM, |b| {
            b.token(SyntaxKind::LIST_BULLET, "- ");
            b.token(SyntaxKind::TEXT, "first");
        });
    });
    assert!(!List::cast(unordered.finish()).unwrap().ordered());

    // No items at all: unordered, not a failure.
    let mut empty = TreeBuilder::new();
    empty.node(SyntaxKind::LIST, |_| {});
    assert!(!List::cast(empty.finish()).unwrap().ordered());
}

#[test]
fn table_rows_and_cells_navigate_in_document_order() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::ORG_TABLE, |b| {
        b.node(SyntaxKind::TABLE_STANDARD_ROW, |b| {
            b.node(SyntaxKind::TABLE_CELL, |b| b.token(SyntaxKind::TEXT, "a"));
            b.node(SyntaxKind::TABLE_CELL, |b| b.token(SyntaxKind::TEXT, "b"));
        });
        b.node(SyntaxKind::TABLE_RULE_ROW, |_| {});
        b.node(SyntaxKind::TABLE_STANDARD_ROW, |b| {
            b.node(SyntaxKind::TABLE_CELL, |b| b.token(SyntaxKind::TEXT, "c"));
        });
    });
    let table = OrgTable::cast(builder.finish()).unwrap();

    let rows: Vec<TableRow> = table.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].cells().count(), 2);
    assert_eq!(rows[1].cells().count(), 0);
    assert_eq!(rows[2].cells().count(), 1);
}

#[test]
fn property_drawer_pairs_keys_with_values() {
    fn property(b: &mut TreeBuilder, key: &str, value: &str) {
        b.node(SyntaxKind::NODE_PROPERTY, |b| {
            b.token(SyntaxKind::TEXT, key);
            b.token(SyntaxKind::TEXT, value);
        });
    }

    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |b| {
        b.token(SyntaxKind::HEADLINE_STARS, "*");
        b.node(SyntaxKind::HEADLINE_TITLE, |b| {
            b.token(SyntaxKind::TEXT, "t");
        });
        b.node(SyntaxKind::PROPERTY_DRAWER, |b| {
            property(b, "CUSTOM_ID", "someid");
            property(b, "ID", "id");
            // Value-less entry is malformed and skipped.
            b.node(SyntaxKind::NODE_PROPERTY, |b| {
                b.token(SyntaxKind::TEXT, "DANGLING");
            });
            property(b, "CUSTOM_ID", "shadowed");
        });
    });
    let headline = Headline::cast(builder.finish()).unwrap();
    let drawer = headline.property_drawer().unwrap();

    assert_eq!(drawer.properties().count(), 4);
    assert_eq!(drawer.iter().count(), 3);
    // `get` takes the first match, the map keeps the last.
    assert_eq!(drawer.get("CUSTOM_ID").unwrap().text(), "someid");
    assert_eq!(drawer.get("ID").unwrap().text(), "id");
    assert!(drawer.get("DANGLING").is_none());
    assert!(drawer.get("MISSING").is_none());

    let map = drawer.to_hash_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("CUSTOM_ID").map(String::as_str), Some("shadowed"));
}

#[test]
fn headline_without_a_drawer_has_no_properties() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |b| {
        b.token(SyntaxKind::HEADLINE_STARS, "*");
    });
    let headline = Headline::cast(builder.finish()).unwrap();
    assert!(headline.property_drawer().is_none());

    let mut empty = TreeBuilder::new();
    empty.node(SyntaxKind::PROPERTY_DRAWER, |_| {});
    let drawer = PropertyDrawer::cast(empty.finish()).unwrap();
    assert_eq!(drawer.iter().count(), 0);
    assert!(drawer.to_hash_map().is_empty());
}

#[test]
fn missing_structure_degrades_to_absence_everywhere() {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::HEADLINE, |_| {});
    let headline = Headline::cast(builder.finish()).unwrap();

    assert!(headline.keyword().is_none());
    assert!(headline.priority().is_none());
    assert!(headline.planning().is_none());
    assert!(headline.section().is_none());
    assert!(headline.title().is_none());
    assert_eq!(headline.headlines().count(), 0);
    assert_eq!(headline.tags(), Vec::<String>::new());
    assert_eq!(headline.title_raw(), "");
    // Degraded default, still a usable level.
    assert_eq!(headline.level(), 1);
}
