use tracing::instrument;

use super::ZoteroClient;
use crate::error::Result;
use crate::zotero::feed::FeedDocument;
use crate::zotero::params::RequestParams;
use crate::zotero::scope::LibraryScope;

impl ZoteroClient {
    /// All collections in a library
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn collections(
        &self,
        scope: LibraryScope,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(&scope.path("collections"), params, None).await
    }

    /// Collections that have no parent collection
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn top_collections(
        &self,
        scope: LibraryScope,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(&scope.path("collections/top"), params, None)
            .await
    }

    #[instrument(skip(self, params), fields(scope = %scope, collection_key = %collection_key))]
    pub async fn collection(
        &self,
        scope: LibraryScope,
        collection_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(
            &scope.path(&format!("collections/{collection_key}")),
            params,
            None,
        )
        .await
    }

    /// Items filed in a collection
    #[instrument(skip(self, params), fields(scope = %scope, collection_key = %collection_key))]
    pub async fn collection_items(
        &self,
        scope: LibraryScope,
        collection_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(
            &scope.path(&format!("collections/{collection_key}/items")),
            params,
            None,
        )
        .await
    }

    /// Top-level items filed in a collection
    #[instrument(skip(self, params), fields(scope = %scope, collection_key = %collection_key))]
    pub async fn collection_top_items(
        &self,
        scope: LibraryScope,
        collection_key: &str,
        params: &RequestParams,
    ) -> Result<FeedDocument> {
        self.request(
            &scope.path(&format!("collections/{collection_key}/items/top")),
            params,
            None,
        )
        .await
    }
}
