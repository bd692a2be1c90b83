//! Feed introspection tests using recorded Zotero API responses

mod common;

use rstest::rstest;
use zotero_workshop::{FeedDocument, PaginationLink, ZoteroError};

use common::load_fixture;

#[rstest]
#[case(PaginationLink::Next, Some("4"))]
#[case(PaginationLink::Previous, Some("0"))]
#[case(PaginationLink::Last, Some("40"))]
fn test_items_page_cursors(#[case] relation: PaginationLink, #[case] expected: Option<&str>) {
    let feed = FeedDocument::parse(&load_fixture("items_page.xml")).expect("fixture should parse");
    assert_eq!(feed.pagination_cursor(relation).as_deref(), expected);
}

#[rstest]
#[case(PaginationLink::Next, None)]
#[case(PaginationLink::Last, None)]
#[case(PaginationLink::Previous, Some("20"))]
#[case(PaginationLink::First, None)]
fn test_last_page_cursors(#[case] relation: PaginationLink, #[case] expected: Option<&str>) {
    let feed = FeedDocument::parse(&load_fixture("last_page.xml")).expect("fixture should parse");
    assert_eq!(feed.pagination_cursor(relation).as_deref(), expected);
}

#[test]
fn test_items_page_totals_and_entries() {
    let feed = FeedDocument::parse(&load_fixture("items_page.xml")).unwrap();

    assert_eq!(feed.total_results().unwrap(), 41);
    assert_eq!(feed.title().as_deref(), Some("Zotero / jboggs / Items"));

    let entries = feed.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key.as_deref(), Some("X42A7DEE"));
    assert_eq!(entries[0].item_type.as_deref(), Some("journalArticle"));
    assert_eq!(entries[0].num_children, Some(1));
    assert_eq!(
        entries[1].title.as_deref(),
        Some("Scholarly Communication & the Web")
    );
}

#[test]
fn test_created_item_key() {
    let feed = FeedDocument::parse(&load_fixture("created_item.xml")).unwrap();
    assert_eq!(feed.item_key().unwrap(), "NEWKEY23");
}

#[test]
fn test_single_entry_document() {
    let feed = FeedDocument::parse(&load_fixture("single_collection.xml")).unwrap();

    assert_eq!(feed.item_key().unwrap(), "COLL1234");
    assert!(matches!(
        feed.total_results(),
        Err(ZoteroError::MissingField { ref field }) if field == "totalResults"
    ));

    let entries = feed.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title.as_deref(), Some("THATCamp Submissions"));
    assert_eq!(feed.next_page_start(), None);
}

#[test]
fn test_minimal_documents() {
    let with_next = r#"<feed xmlns:atom="http://www.w3.org/2005/Atom"><atom:link rel="next" href="https://api.zotero.org/users/1/items?start=25"/></feed>"#;
    let feed = FeedDocument::parse(with_next).unwrap();
    assert_eq!(feed.next_page_start().as_deref(), Some("25"));

    let total = r#"<feed><totalResults xmlns="http://zotero.org/ns/api">42</totalResults></feed>"#;
    assert_eq!(FeedDocument::parse(total).unwrap().total_results().unwrap(), 42);

    let feed = FeedDocument::parse("<feed/>").unwrap();
    assert_eq!(feed.next_page_start(), None);
    assert!(matches!(
        feed.total_results(),
        Err(ZoteroError::MissingField { .. })
    ));
    assert!(matches!(feed.item_key(), Err(ZoteroError::MissingField { .. })));
}

#[test]
fn test_non_numeric_total_is_a_parse_failure() {
    let xml = r#"<feed xmlns:zapi="http://zotero.org/ns/api"><zapi:totalResults>many</zapi:totalResults></feed>"#;
    let feed = FeedDocument::parse(xml).unwrap();
    assert!(matches!(
        feed.total_results(),
        Err(ZoteroError::ParseFailure { .. })
    ));
}

#[test]
fn test_malformed_xml_is_rejected() {
    for body in ["<feed>", "<feed></entry>", "Forbidden", "<a><b></a></b>"] {
        assert!(
            matches!(
                FeedDocument::parse(body),
                Err(ZoteroError::ParseFailure { .. })
            ),
            "expected parse failure for {body:?}"
        );
    }
}
