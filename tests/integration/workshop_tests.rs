//! Workshop plugin tests against an in-memory host and a mocked Zotero API

mod common;

use std::fs;

use tracing_test::traced_test;
use wiremock::matchers::{body_string, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zotero_workshop::workshop::{
    FLUSH_OPTION, HookKind, InMemoryHost, TranslationDirs, WorkshopCallback, setup,
};
use zotero_workshop::{ClientConfig, Submission, WorkshopPlugin, WorkshopSettings, ZoteroError};

use common::{load_fixture, string_map};

const RECORD: u64 = 42;

fn plugin_for(mock_server: &MockServer) -> WorkshopPlugin {
    WorkshopPlugin::new().with_client_config(ClientConfig::new().with_base_url(mock_server.uri()))
}

fn configured_host(extra: &[(&str, &str)]) -> InMemoryHost {
    let mut host = InMemoryHost::new();
    let mut fields = vec![
        ("zotero_library_type", "groups"),
        ("zotero_id", "12345"),
        ("zotero_api_key", "secret"),
        ("sp_conference_name", "THATCamp"),
        ("sp_conference_date", "2011-06-04"),
    ];
    fields.extend_from_slice(extra);
    WorkshopPlugin::new().save_post(&mut host, RECORD, &string_map(&fields));
    host
}

fn posted_submission() -> std::collections::HashMap<String, String> {
    string_map(&[
        ("title", "Linked Data for Humanists"),
        ("lastName", "Boggs"),
        ("firstName", "Jeremy"),
        ("abstract", "Notes from a session."),
        ("Save", "Save"),
    ])
}

#[test]
fn test_setup_attaches_every_hook() {
    let mut host = InMemoryHost::new();
    setup(&mut host);

    assert_eq!(host.hooks.len(), 7);
    for name in ["init", "admin_init", "save_post", "activate", "deactivate"] {
        assert_eq!(host.hooks_named(name).len(), 1, "missing hook {name}");
    }

    let shortcode = host.hooks_named("spworkshopform");
    assert_eq!(shortcode[0].kind, HookKind::Shortcode);
    assert_eq!(shortcode[0].callback, WorkshopCallback::SubmissionShortcode);

    let filter = host.hooks_named("the_content");
    assert_eq!(filter[0].kind, HookKind::Filter);
}

#[test]
fn test_activation_flushes_rewrites_once() {
    let mut host = InMemoryHost::new();
    let plugin = WorkshopPlugin::new();

    plugin.activate(&mut host);
    assert_eq!(host.options.get(FLUSH_OPTION).map(String::as_str), Some("true"));

    plugin.init(&mut host);
    assert_eq!(host.rewrite_flushes, 1);
    assert!(!host.options.contains_key(FLUSH_OPTION));
    assert_eq!(host.content_types.len(), 1);
    assert_eq!(host.content_types[0].name, "sp_workshop");

    plugin.init(&mut host);
    assert_eq!(host.rewrite_flushes, 1);

    plugin.deactivate(&mut host);
    assert_eq!(host.rewrite_flushes, 2);
}

#[test]
fn test_admin_init_adds_meta_box() {
    let mut host = InMemoryHost::new();
    WorkshopPlugin::new().admin_init(&mut host);

    assert_eq!(host.meta_boxes.len(), 1);
    assert_eq!(host.meta_boxes[0].id, "zotero-information");
    assert_eq!(host.meta_boxes[0].content_type, "sp_workshop");
}

#[test]
fn test_save_post_keeps_only_settings_fields() {
    let mut host = InMemoryHost::new();
    let form = string_map(&[
        ("zotero_id", "12345"),
        ("zotero_collection_key", "COLL1234"),
        ("post_title", "ignored"),
    ]);

    let saved = WorkshopPlugin::new().save_post(&mut host, RECORD, &form);

    assert_eq!(saved, 2);
    let meta = &host.record_meta[&RECORD];
    assert_eq!(meta.len(), 2);
    assert_eq!(meta["zotero_collection_key"], "COLL1234");
}

#[test]
fn test_meta_box_renders_stored_values() {
    let host = configured_host(&[("sp_conference_location", "Fairfax & Arlington")]);
    let html = WorkshopPlugin::new().meta_box(&host, RECORD).unwrap();

    assert!(html.contains(r#"<option value="groups" selected>"#));
    assert!(html.contains(r#"name="zotero_id" value="12345""#));
    assert!(html.contains("Fairfax &amp; Arlington"));
}

#[test]
fn test_meta_box_shows_unknown_library_type_as_user() {
    let host = configured_host(&[("zotero_library_type", "teams")]);
    let html = WorkshopPlugin::new().meta_box(&host, RECORD).unwrap();

    assert!(html.contains(r#"<option value="users" selected>"#));
    assert!(html.contains(r#"<option value="groups">"#));
    assert!(html.contains(r#"name="zotero_api_key" value="secret""#));
}

#[tokio::test]
async fn test_unknown_library_type_blocks_submission() {
    let mock_server = MockServer::start().await;
    let host = configured_host(&[("zotero_library_type", "teams")]);
    let posted = posted_submission();

    let result = plugin_for(&mock_server)
        .submission_form(&host, RECORD, Some(&posted))
        .await;
    assert!(matches!(result, Err(ZoteroError::InvalidSettings { .. })));
}

#[test]
fn test_translations_follow_locale() {
    let custom = tempfile::tempdir().unwrap();
    let packaged = tempfile::tempdir().unwrap();
    let catalog = packaged.path().join("spworkshop-de_DE.mo");
    fs::write(&catalog, b"catalog").unwrap();

    let plugin = WorkshopPlugin::new()
        .with_translation_dirs(TranslationDirs::new(custom.path(), packaged.path()));

    let mut german = InMemoryHost::new().with_locale("de_DE");
    plugin.init(&mut german);
    assert_eq!(
        german.loaded_translations,
        vec![("spworkshop".to_string(), catalog)]
    );

    let mut french = InMemoryHost::new().with_locale("fr_FR");
    plugin.init(&mut french);
    assert!(french.loaded_translations.is_empty());
}

#[tokio::test]
async fn test_content_filter_leaves_other_content_alone() {
    let mock_server = MockServer::start().await;
    Mock::given(path_regex(".*"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let host = configured_host(&[]);
    let plugin = plugin_for(&mock_server);
    let posted = posted_submission();

    let page = plugin
        .content_filter(&host, RECORD, "page", "<p>About</p>", Some(&posted))
        .await
        .unwrap();
    assert_eq!(page, "<p>About</p>");

    let workshop = plugin
        .content_filter(&host, RECORD, "sp_workshop", "<p>Call for papers</p>", None)
        .await
        .unwrap();
    assert!(workshop.starts_with("<p>Call for papers</p><form"));
    assert!(workshop.contains(r#"name="abstract""#));
}

#[tokio::test]
#[traced_test]
async fn test_submission_is_created_and_filed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/items"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("created_item.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/collections/COLL1234/items"))
        .and(query_param("key", "secret"))
        .and(body_string("NEWKEY23"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = configured_host(&[("zotero_collection_key", "COLL1234")]);
    let plugin = plugin_for(&mock_server);
    let posted = posted_submission();

    let html = plugin
        .submission_form(&host, RECORD, Some(&posted))
        .await
        .expect("submission should be saved");
    assert!(html.starts_with(r#"<form method="post">"#));

    let requests = mock_server.received_requests().await.unwrap();
    let created: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let item = &created["items"][0];
    assert_eq!(item["itemType"], "conferencePaper");
    assert_eq!(item["title"], "Linked Data for Humanists");
    assert_eq!(item["creators"][0]["lastName"], "Boggs");
    assert_eq!(item["conferenceName"], "THATCamp");
    assert_eq!(item["date"], "2011-06-04");
}

#[tokio::test]
async fn test_submission_without_collection_posts_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/items"))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("created_item.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(path_regex("/collections/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let host = configured_host(&[]);
    let settings = WorkshopSettings::from_meta(&host.record_meta[&RECORD]).unwrap();
    let submission = Submission::from_form(&posted_submission()).unwrap();

    let key = plugin_for(&mock_server)
        .save_submission(&settings, &submission)
        .await
        .unwrap();
    assert_eq!(key, "NEWKEY23");
}

#[tokio::test]
async fn test_rejected_submission_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/items"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<error>Forbidden</error>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = configured_host(&[("zotero_collection_key", "COLL1234")]);
    let posted = posted_submission();
    let result = plugin_for(&mock_server)
        .submission_form(&host, RECORD, Some(&posted))
        .await;

    match result {
        Err(ZoteroError::ApiError { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.contains("Forbidden"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unconfigured_record_is_invalid() {
    let mock_server = MockServer::start().await;
    let host = InMemoryHost::new();
    let posted = posted_submission();

    let result = plugin_for(&mock_server)
        .submission_form(&host, RECORD, Some(&posted))
        .await;
    assert!(matches!(result, Err(ZoteroError::InvalidSettings { .. })));
}

#[tokio::test]
async fn test_rejected_collection_filing_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/items"))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("created_item.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/groups/12345/collections/COLL1234/items"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<error>Forbidden</error>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = configured_host(&[("zotero_collection_key", "COLL1234")]);
    let settings = WorkshopSettings::from_meta(&host.record_meta[&RECORD]).unwrap();
    let submission = Submission::from_form(&posted_submission()).unwrap();

    let result = plugin_for(&mock_server)
        .save_submission(&settings, &submission)
        .await;

    match result {
        Err(ZoteroError::ApiError { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "<error>Forbidden</error>");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}
