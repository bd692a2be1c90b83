//! Query-string parameters for Zotero API requests

use std::collections::BTreeMap;
use std::fmt::Display;

/// Name of the authentication parameter
pub const KEY_PARAM: &str = "key";

/// Query parameters for a request.
///
/// Keys are kept sorted, so two parameter sets holding the same pairs always
/// serialize to the same query string regardless of insertion order.
///
/// # Example
///
/// ```
/// use zotero_workshop::RequestParams;
///
/// let params = RequestParams::new().format("atom").limit(25).start(50);
/// assert_eq!(params.to_query_string(), "format=atom&limit=25&start=50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    pub fn insert<K: Into<String>, V: Display>(&mut self, key: K, value: V) -> &mut Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<K: Into<String>, V: Display>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Response format (`atom`, `keys`, `bib`, ...)
    pub fn format(self, format: &str) -> Self {
        self.with("format", format)
    }

    /// Entry content (`html`, `json`, `none`, ...)
    pub fn content(self, content: &str) -> Self {
        self.with("content", content)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Page offset, usually taken from a previous feed's pagination cursor
    pub fn start<V: Display>(self, start: V) -> Self {
        self.with("start", start)
    }

    pub fn order(self, field: &str) -> Self {
        self.with("order", field)
    }

    /// Sort direction, `asc` or `desc`
    pub fn sort(self, direction: &str) -> Self {
        self.with("sort", direction)
    }

    pub fn tag(self, tag: &str) -> Self {
        self.with("tag", tag)
    }

    pub fn item_type(self, item_type: &str) -> Self {
        self.with("itemType", item_type)
    }

    /// Quick search
    pub fn q(self, query: &str) -> Self {
        self.with("q", query)
    }

    /// Copy of these parameters with `api_key` added when no `key` is present
    pub(crate) fn with_default_key(&self, api_key: Option<&str>) -> RequestParams {
        let mut params = self.clone();
        if let Some(key) = api_key {
            if !params.contains_key(KEY_PARAM) {
                params.insert(KEY_PARAM, key);
            }
        }
        params
    }

    /// Percent-encoded `k=v&k=v` string in key order
    pub fn to_query_string(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
