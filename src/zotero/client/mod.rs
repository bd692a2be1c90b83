mod collections;
mod items;
mod schema;
mod tags;
mod write;

pub use schema::{CreatorFieldInfo, CreatorTypeInfo, ItemFieldInfo, ItemTypeInfo};

use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{Result, ZoteroError};
use crate::zotero::feed::FeedDocument;
use crate::zotero::params::RequestParams;

/// Client for the Zotero web API
///
/// Every method maps one REST path onto one request. Responses are parsed into
/// a [`FeedDocument`]; HTTP error statuses are kept on the document rather than
/// turned into errors.
#[derive(Clone)]
pub struct ZoteroClient {
    /// Used for GET; redirects are returned to the caller untouched
    client: Client,
    /// Used for POST; follows redirects
    redirecting_client: Client,
    base_url: String,
    config: ClientConfig,
}

impl ZoteroClient {
    /// Create a client with a default API key.
    ///
    /// An empty key means requests carry no `key` parameter unless the caller
    /// adds one.
    ///
    /// # Errors
    ///
    /// * `ZoteroError::TransportUnavailable` - If the HTTP transport cannot be initialized
    ///
    /// # Example
    ///
    /// ```
    /// use zotero_workshop::ZoteroClient;
    ///
    /// let client = ZoteroClient::new("your_api_key_here").unwrap();
    /// ```
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new().with_api_key(api_key))
    }

    /// Create a client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use zotero_workshop::{ClientConfig, ZoteroClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_timeout(Duration::from_secs(10));
    ///
    /// let client = ZoteroClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = http_builder(&config)
            .redirect(Policy::none())
            .build()
            .map_err(ZoteroError::TransportUnavailable)?;

        let redirecting_client = http_builder(&config)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(ZoteroError::TransportUnavailable)?;

        Ok(Self {
            client,
            redirecting_client,
            base_url: config.effective_base_url(),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full request URI for `path`.
    ///
    /// The configured API key is added as `key` unless `params` already has one.
    /// Parameters are encoded in key order.
    ///
    /// # Example
    ///
    /// ```
    /// use zotero_workshop::{RequestParams, ZoteroClient};
    ///
    /// let client = ZoteroClient::new("abc").unwrap();
    /// let uri = client.build_uri("users/1/items", &RequestParams::new().limit(5));
    /// assert_eq!(uri, "https://api.zotero.org/users/1/items?key=abc&limit=5");
    /// ```
    pub fn build_uri(&self, path: &str, params: &RequestParams) -> String {
        let mut uri = self.endpoint(path);
        let params = params.with_default_key(self.config.effective_api_key());
        if !params.is_empty() {
            uri.push('?');
            uri.push_str(&params.to_query_string());
        }
        uri
    }

    /// Issue a request and parse the XML response.
    ///
    /// Without a body this is a GET that does not follow redirects. With a body
    /// it is a POST of the raw payload that does.
    ///
    /// # Errors
    ///
    /// * `ZoteroError::TransportFailure` - Connection, timeout or body read failure, or an empty body
    /// * `ZoteroError::ParseFailure` - If the body is not well-formed XML
    #[instrument(skip(self, params, body), fields(path = %path, post = body.is_some()))]
    pub async fn request(
        &self,
        path: &str,
        params: &RequestParams,
        body: Option<&str>,
    ) -> Result<FeedDocument> {
        let request = match body {
            Some(body) => self
                .redirecting_client
                .post(self.build_uri(path, params))
                .body(body.to_string()),
            None => self.client.get(self.build_uri(path, params)),
        };

        let (status, text) = self.send(path, request).await?;
        let document = FeedDocument::parse(&text)?.with_status(status);
        debug!(status, "Parsed Zotero API response");
        Ok(document)
    }

    /// GET a JSON endpoint and decode it
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &RequestParams,
    ) -> Result<T> {
        let request = self.client.get(self.build_uri(path, params));
        let (status, text) = self.send(path, request).await?;

        if !(200..300).contains(&status) {
            return Err(ZoteroError::ApiError {
                status,
                message: text.trim().to_string(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// POST a body and return the status with whatever body came back.
    ///
    /// For writes the API may answer without content (`204 No Content`), so an
    /// empty body is not an error here.
    pub(crate) async fn post_raw(
        &self,
        path: &str,
        params: &RequestParams,
        body: &str,
    ) -> Result<(u16, String)> {
        let request = self
            .redirecting_client
            .post(self.build_uri(path, params))
            .body(body.to_string());
        self.send_raw(path, request).await
    }

    /// Send a prepared request and read a non-empty body
    async fn send(&self, path: &str, request: RequestBuilder) -> Result<(u16, String)> {
        let (status, text) = self.send_raw(path, request).await?;

        if text.is_empty() {
            return Err(ZoteroError::TransportFailure {
                url: self.endpoint(path),
                reason: format!("empty response body (HTTP {status})"),
            });
        }

        Ok((status, text))
    }

    /// Send a prepared request and read the body.
    ///
    /// Errors name the endpoint without its query string so the key never
    /// ends up in messages.
    async fn send_raw(&self, path: &str, request: RequestBuilder) -> Result<(u16, String)> {
        let endpoint = self.endpoint(path);

        debug!("Making Zotero API request");
        let response = request
            .send()
            .await
            .map_err(|e| ZoteroError::transport(&endpoint, e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ZoteroError::transport(&endpoint, e))?;

        Ok((status, text))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn http_builder(config: &ClientConfig) -> ClientBuilder {
    Client::builder()
        .user_agent(config.effective_user_agent())
        .timeout(config.timeout)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
}
