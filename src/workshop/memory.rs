//! In-memory host implementation.
//!
//! Keeps every registration and stored value in plain collections. Useful for
//! tests and for embedding the workshop flow without a real content platform.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::workshop::host::{
    ContentTypeDefinition, HookBinding, HookRegistry, MetaBoxDefinition, WorkshopHost,
};

/// Host that records everything in memory
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    pub content_types: Vec<ContentTypeDefinition>,
    pub meta_boxes: Vec<MetaBoxDefinition>,
    pub hooks: Vec<HookBinding>,
    pub options: HashMap<String, String>,
    pub record_meta: HashMap<u64, HashMap<String, String>>,
    pub rewrite_flushes: usize,
    pub locale: String,
    pub loaded_translations: Vec<(String, PathBuf)>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            content_types: Vec::new(),
            meta_boxes: Vec::new(),
            hooks: Vec::new(),
            options: HashMap::new(),
            record_meta: HashMap::new(),
            rewrite_flushes: 0,
            locale: "en_US".to_string(),
            loaded_translations: Vec::new(),
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Hooks attached under `name`
    pub fn hooks_named(&self, name: &str) -> Vec<&HookBinding> {
        self.hooks.iter().filter(|b| b.name == name).collect()
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HookRegistry for InMemoryHost {
    fn attach(&mut self, binding: HookBinding) {
        self.hooks.push(binding);
    }
}

impl WorkshopHost for InMemoryHost {
    fn register_content_type(&mut self, definition: ContentTypeDefinition) {
        self.content_types.push(definition);
    }

    fn add_meta_box(&mut self, meta_box: MetaBoxDefinition) {
        self.meta_boxes.push(meta_box);
    }

    fn option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn set_option(&mut self, name: &str, value: &str) {
        self.options.insert(name.to_string(), value.to_string());
    }

    fn delete_option(&mut self, name: &str) {
        self.options.remove(name);
    }

    fn flush_rewrite_rules(&mut self) {
        self.rewrite_flushes += 1;
    }

    fn record_meta(&self, record_id: u64) -> HashMap<String, String> {
        self.record_meta.get(&record_id).cloned().unwrap_or_default()
    }

    fn update_record_meta(&mut self, record_id: u64, key: &str, value: &str) {
        self.record_meta
            .entry(record_id)
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn load_translations(&mut self, domain: &str, path: &Path) {
        self.loaded_translations
            .push((domain.to_string(), path.to_path_buf()));
    }
}
