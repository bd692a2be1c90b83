use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ZoteroError};
use crate::zotero::{LibraryScope, LibraryType};

/// Per-record Zotero configuration, as stored in the host's metadata.
///
/// Built in one step from the raw metadata map. Empty values count as absent;
/// `library_type` defaults to `users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkshopSettings {
    #[serde(rename = "zotero_library_type")]
    pub library_type: LibraryType,
    #[serde(rename = "zotero_id")]
    pub zotero_id: Option<String>,
    #[serde(rename = "zotero_api_key")]
    pub api_key: Option<String>,
    #[serde(rename = "zotero_collection_key")]
    pub collection_key: Option<String>,
    #[serde(rename = "sp_conference_name")]
    pub conference_name: Option<String>,
    #[serde(rename = "sp_conference_date")]
    pub conference_date: Option<String>,
    #[serde(rename = "sp_conference_location")]
    pub conference_location: Option<String>,
}

impl WorkshopSettings {
    /// Metadata keys owned by the workshop meta box
    pub const FIELD_KEYS: [&'static str; 7] = [
        "zotero_library_type",
        "zotero_id",
        "zotero_api_key",
        "zotero_collection_key",
        "sp_conference_name",
        "sp_conference_date",
        "sp_conference_location",
    ];

    /// Read settings from a record's metadata. Unknown keys are ignored.
    pub fn from_meta(meta: &HashMap<String, String>) -> Result<Self> {
        let fields: Map<String, Value> = meta
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| (key.clone(), Value::String(value.trim().to_string())))
            .collect();

        serde_json::from_value(Value::Object(fields)).map_err(|e| ZoteroError::InvalidSettings {
            message: e.to_string(),
        })
    }

    /// Like [`from_meta`](Self::from_meta), but an unrecognised library type
    /// falls back to `users`. For showing stored settings to be edited.
    pub fn from_meta_for_editing(meta: &HashMap<String, String>) -> Result<Self> {
        let key = Self::FIELD_KEYS[0];
        let known = meta.get(key).is_none_or(|value| {
            let value = value.trim();
            value.is_empty()
                || serde_json::from_value::<LibraryType>(Value::String(value.to_string())).is_ok()
        });

        if known {
            return Self::from_meta(meta);
        }
        let mut meta = meta.clone();
        meta.remove(key);
        Self::from_meta(&meta)
    }

    /// Library the record submits to
    pub fn scope(&self) -> Result<LibraryScope> {
        let id = self
            .zotero_id
            .as_deref()
            .ok_or_else(|| ZoteroError::InvalidSettings {
                message: "no Zotero ID configured".to_string(),
            })?;

        let id = id.parse::<u64>().map_err(|_| ZoteroError::InvalidSettings {
            message: format!("Zotero ID '{id}' is not numeric"),
        })?;

        Ok(LibraryScope::new(self.library_type, id))
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}
