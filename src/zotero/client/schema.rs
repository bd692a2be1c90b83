//! Item type, field and template lookups.
//!
//! These endpoints are global (not tied to a library) and answer JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use super::ZoteroClient;
use crate::error::Result;
use crate::zotero::params::RequestParams;

/// An entry of `/itemTypes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeInfo {
    pub item_type: String,
    pub localized: String,
}

/// An entry of `/itemFields`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFieldInfo {
    pub field: String,
    pub localized: String,
}

/// An entry of `/itemTypeCreatorTypes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorTypeInfo {
    pub creator_type: String,
    pub localized: String,
}

/// An entry of `/creatorFields`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorFieldInfo {
    pub field: String,
    pub localized: String,
}

impl ZoteroClient {
    /// All item types
    #[instrument(skip(self))]
    pub async fn item_types(&self) -> Result<Vec<ItemTypeInfo>> {
        self.request_json("itemTypes", &RequestParams::new()).await
    }

    /// All item fields
    #[instrument(skip(self))]
    pub async fn item_fields(&self) -> Result<Vec<ItemFieldInfo>> {
        self.request_json("itemFields", &RequestParams::new()).await
    }

    /// Creator types valid for an item type
    #[instrument(skip(self))]
    pub async fn item_type_creator_types(&self, item_type: &str) -> Result<Vec<CreatorTypeInfo>> {
        self.request_json(
            "itemTypeCreatorTypes",
            &RequestParams::new().item_type(item_type),
        )
        .await
    }

    /// Localized creator field names
    #[instrument(skip(self))]
    pub async fn creator_fields(&self) -> Result<Vec<CreatorFieldInfo>> {
        self.request_json("creatorFields", &RequestParams::new()).await
    }

    /// Empty item template for an item type, ready to fill in and send to
    /// [`create_items`](ZoteroClient::create_items)
    #[instrument(skip(self))]
    pub async fn item_template(&self, item_type: &str) -> Result<Value> {
        self.request_json("items/new", &RequestParams::new().item_type(item_type))
            .await
    }
}
