use tracing::instrument;

use super::ZoteroClient;
use crate::error::Result;
use crate::zotero::feed::FeedDocument;
use crate::zotero::params::RequestParams;
use crate::zotero::scope::LibraryScope;

impl ZoteroClient {
    /// All items in a library
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zotero_workshop::{LibraryScope, RequestParams, ZoteroClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ZoteroClient::new("your_api_key_here")?;
    ///     let feed = client
    ///         .items(LibraryScope::User(475425), &RequestParams::new().limit(25))
    ///         .await?;
    ///
    ///     println!("{} items", feed.total_results()?);
    ///     if let Some(start) = feed.next_page_start() {
    ///         println!("next page starts at {start}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn items(&self, scope: LibraryScope, params: &RequestParams) -> Result<FeedDocument> {
        self.request(&scope.path("items"), params, None).await
    }

    /// Top-level items (no child notes or attachments)
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn top_items(
        &self,
        scope: LibraryScope,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(&scope.path("items/top"), params, None).await
    }

    /// A single item by key
    #[instrument(skip(self, params), fields(scope = %scope, item_key = %item_key))]
    pub async fn item(
        &self,
        scope: LibraryScope,
        item_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(&scope.path(&format!("items/{item_key}")), params, None)
            .await
    }

    /// Child notes and attachments of an item
    #[instrument(skip(self, params), fields(scope = %scope, item_key = %item_key))]
    pub async fn item_children(
        &self,
        scope: LibraryScope,
        item_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(
            &scope.path(&format!("items/{item_key}/children")),
            params,
            None,
        )
        .await
    }

    /// Tags attached to an item
    #[instrument(skip(self, params), fields(scope = %scope, item_key = %item_key))]
    pub async fn item_tags(
        &self,
        scope: LibraryScope,
        item_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(&scope.path(&format!("items/{item_key}/tags")), params, None)
            .await
    }

    /// Download URI of an attachment's file. Nothing is fetched.
    pub fn item_file_uri(
        &self,
        scope: LibraryScope,
        item_key: &str,
        params: &RequestParams,
    ) -> String {
        self.build_uri(&scope.path(&format!("items/{item_key}/file")), params)
    }

    /// A group's own entry
    #[instrument(skip(self, params))]
    pub async fn group(&self, group_id: u64, params: &RequestParams) -> Result<FeedDocument> {
        self.request(&format!("groups/{group_id}"), params, None)
            .await
    }
}
