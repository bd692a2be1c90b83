//! Interfaces to the host content platform

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::workshop::{CONTENT_TYPE, META_BOX_ID, REWRITE_SLUG, SHORTCODE, TEXT_DOMAIN};

/// Storage and registries the host platform provides
pub trait WorkshopHost {
    fn register_content_type(&mut self, definition: ContentTypeDefinition);

    fn add_meta_box(&mut self, meta_box: MetaBoxDefinition);

    /// Site-wide option value
    fn option(&self, name: &str) -> Option<String>;

    fn set_option(&mut self, name: &str, value: &str);

    fn delete_option(&mut self, name: &str);

    fn flush_rewrite_rules(&mut self);

    /// All metadata stored for a record
    fn record_meta(&self, record_id: u64) -> HashMap<String, String>;

    fn update_record_meta(&mut self, record_id: u64, key: &str, value: &str);

    /// Active locale, e.g. `de_DE`
    fn locale(&self) -> String;

    fn load_translations(&mut self, domain: &str, path: &Path);
}

/// Kinds of host hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Action,
    Filter,
    Shortcode,
    Activation,
    Deactivation,
}

/// Plugin entry points the host calls back into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkshopCallback {
    /// [`WorkshopPlugin::init`](crate::workshop::WorkshopPlugin::init)
    Init,
    /// [`WorkshopPlugin::admin_init`](crate::workshop::WorkshopPlugin::admin_init)
    AdminInit,
    /// [`WorkshopPlugin::save_post`](crate::workshop::WorkshopPlugin::save_post)
    SavePost,
    /// [`WorkshopPlugin::activate`](crate::workshop::WorkshopPlugin::activate)
    Activate,
    /// [`WorkshopPlugin::deactivate`](crate::workshop::WorkshopPlugin::deactivate)
    Deactivate,
    /// [`WorkshopPlugin::submission_form`](crate::workshop::WorkshopPlugin::submission_form)
    SubmissionShortcode,
    /// [`WorkshopPlugin::content_filter`](crate::workshop::WorkshopPlugin::content_filter)
    ContentFilter,
}

/// One named hook and the callback attached to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookBinding {
    pub kind: HookKind,
    pub name: &'static str,
    pub callback: WorkshopCallback,
}

/// Where the host records hook attachments
pub trait HookRegistry {
    fn attach(&mut self, binding: HookBinding);
}

/// Every hook the workshop plugin listens on
pub fn bindings() -> [HookBinding; 7] {
    use HookKind::*;
    use WorkshopCallback::*;

    let bind = |kind, name, callback| HookBinding {
        kind,
        name,
        callback,
    };

    [
        bind(Action, "init", Init),
        bind(Action, "admin_init", AdminInit),
        bind(Action, "save_post", SavePost),
        bind(Activation, "activate", Activate),
        bind(Deactivation, "deactivate", Deactivate),
        bind(Shortcode, SHORTCODE, SubmissionShortcode),
        bind(Filter, "the_content", ContentFilter),
    ]
}

/// Attach all workshop callbacks to `registry`
pub fn setup<R: HookRegistry + ?Sized>(registry: &mut R) {
    for binding in bindings() {
        registry.attach(binding);
    }
}

/// Admin labels of the workshop content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeLabels {
    pub name: &'static str,
    pub singular_name: &'static str,
    pub add_new: &'static str,
    pub add_new_item: &'static str,
    pub edit_item: &'static str,
    pub new_item: &'static str,
    pub view_item: &'static str,
    pub search_items: &'static str,
    pub not_found: &'static str,
    pub not_found_in_trash: &'static str,
    pub parent_item_colon: &'static str,
}

/// Content type registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub labels: ContentTypeLabels,
    pub exclude_from_search: bool,
    pub publicly_queryable: bool,
    pub show_ui: bool,
    pub capability_type: &'static str,
    pub hierarchical: bool,
    pub supports: Vec<&'static str>,
    pub rewrite_slug: &'static str,
}

impl ContentTypeDefinition {
    pub fn workshop() -> Self {
        Self {
            name: CONTENT_TYPE,
            label: "workshop",
            labels: ContentTypeLabels {
                name: "Workshops",
                singular_name: "Workshop",
                add_new: "Add New",
                add_new_item: "Add New Workshop",
                edit_item: "Edit Workshop Entry",
                new_item: "New Workshop Entry",
                view_item: "View Workshop Entry",
                search_items: "Search Workshops",
                not_found: "No entries found",
                not_found_in_trash: "No entries found in Trash",
                parent_item_colon: "",
            },
            exclude_from_search: true,
            publicly_queryable: true,
            show_ui: true,
            capability_type: "page",
            hierarchical: true,
            supports: vec!["title", "editor"],
            rewrite_slug: REWRITE_SLUG,
        }
    }
}

/// Admin meta box registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaBoxDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub content_type: &'static str,
    pub context: &'static str,
    pub priority: &'static str,
}

impl MetaBoxDefinition {
    pub fn zotero_information() -> Self {
        Self {
            id: META_BOX_ID,
            title: "Workshop Information",
            content_type: CONTENT_TYPE,
            context: "side",
            priority: "low",
        }
    }
}

/// Directories searched for compiled translation catalogs.
///
/// A site-level custom directory takes precedence over the packaged one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDirs {
    pub custom: PathBuf,
    pub packaged: PathBuf,
}

impl TranslationDirs {
    pub fn new(custom: impl Into<PathBuf>, packaged: impl Into<PathBuf>) -> Self {
        Self {
            custom: custom.into(),
            packaged: packaged.into(),
        }
    }

    /// Catalog for `locale`, if one exists in either directory
    pub fn resolve(&self, locale: &str) -> Option<PathBuf> {
        let file_name = format!("{TEXT_DOMAIN}-{locale}.mo");
        [&self.custom, &self.packaged]
            .into_iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }
}
