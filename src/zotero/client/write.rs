use tracing::{debug, info, instrument};

use super::ZoteroClient;
use crate::error::{Result, ZoteroError};
use crate::zotero::feed::FeedDocument;
use crate::zotero::params::RequestParams;
use crate::zotero::scope::LibraryScope;

impl ZoteroClient {
    /// Create items from a pre-serialized payload.
    ///
    /// The payload is sent as-is; its shape is not checked. Read the new key with
    /// [`FeedDocument::item_key`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zotero_workshop::{LibraryScope, ZoteroClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ZoteroClient::new("your_api_key_here")?;
    ///     let payload = r#"{"items":[{"itemType":"book","title":"Example"}]}"#;
    ///     let created = client.create_items(LibraryScope::User(475425), payload).await?;
    ///     println!("created {}", created.item_key()?);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, payload), fields(scope = %scope, payload_len = payload.len()))]
    pub async fn create_items(&self, scope: LibraryScope, payload: &str) -> Result<FeedDocument> {
        let document = self
            .request(&scope.path("items"), &RequestParams::new(), Some(payload))
            .await?;
        info!(status = ?document.status(), "Item creation request completed");
        Ok(document)
    }

    /// File existing items into a collection and parse the answer as a feed.
    ///
    /// `item_keys` is a space-delimited list of item keys. The API usually
    /// answers with `204 No Content`, which this method reports as
    /// `TransportFailure`; use [`file_items`](Self::file_items) when only the
    /// outcome matters.
    #[instrument(skip(self), fields(scope = %scope))]
    pub async fn add_items_to_collection(
        &self,
        scope: LibraryScope,
        collection_key: &str,
        item_keys: &str,
    ) -> Result<FeedDocument> {
        self.request(
            &scope.path(&format!("collections/{collection_key}/items")),
            &RequestParams::new(),
            Some(item_keys),
        )
        .await
    }

    /// File existing items into a collection, accepting an empty answer.
    ///
    /// # Errors
    ///
    /// * `ZoteroError::ApiError` - If the API answers with a non-2xx status
    /// * `ZoteroError::TransportFailure` - If the request could not be completed
    #[instrument(skip(self), fields(scope = %scope))]
    pub async fn file_items(
        &self,
        scope: LibraryScope,
        collection_key: &str,
        item_keys: &str,
    ) -> Result<u16> {
        let (status, text) = self
            .post_raw(
                &scope.path(&format!("collections/{collection_key}/items")),
                &RequestParams::new(),
                item_keys,
            )
            .await?;

        if !(200..300).contains(&status) {
            return Err(ZoteroError::ApiError {
                status,
                message: text.trim().to_string(),
            });
        }

        debug!(status, "Items filed into collection");
        Ok(status)
    }
}
