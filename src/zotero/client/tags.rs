use tracing::{debug, instrument};

use super::ZoteroClient;
use crate::error::Result;
use crate::zotero::feed::FeedDocument;
use crate::zotero::params::RequestParams;
use crate::zotero::scope::LibraryScope;

impl ZoteroClient {
    /// All tags in a library
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn tags(&self, scope: LibraryScope, params: &RequestParams) -> Result<FeedDocument> {
        self.request(&scope.path("tags"), params, None).await
    }

    /// A single tag.
    ///
    /// Returns `Ok(None)` without sending anything when the tag is empty.
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn tag(
        &self,
        scope: LibraryScope,
        tag: &str,
        params: &RequestParams,
    ) -> Result<Option<FeedDocument>> {
        let Some(segment) = encode_tag(tag) else {
            debug!("Empty tag, skipping request");
            return Ok(None);
        };
        self.request(&scope.path(&format!("tags/{segment}")), params, None)
            .await
            .map(Some)
    }

    /// Items carrying a tag.
    ///
    /// Returns `Ok(None)` without sending anything when the tag is empty.
    #[instrument(skip(self, params), fields(scope = %scope))]
    pub async fn tag_items(
        &self,
        scope: LibraryScope,
        tag: &str,
        params: &RequestParams,
    ) -> Result<Option<FeedDocument>> {
        let Some(segment) = encode_tag(tag) else {
            debug!("Empty tag, skipping request");
            return Ok(None);
        };
        self.request(&scope.path(&format!("tags/{segment}/items")), params, None)
            .await
            .map(Some)
    }
}

/// Percent-encode a tag for use as a path segment; `None` if nothing is left
pub(crate) fn encode_tag(tag: &str) -> Option<String> {
    let encoded = urlencoding::encode(tag);
    if encoded.is_empty() {
        None
    } else {
        Some(encoded.into_owned())
    }
}
