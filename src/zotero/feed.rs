//! Parsed Zotero API responses and the lookups callers run on them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoteroError};
use crate::zotero::xml::{Element, parse_document};

/// Atom namespace, used for feed-level elements such as `link`
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Zotero API namespace, used for `totalResults`, `key`, `itemType`, ...
pub const ZOTERO_API_NS: &str = "http://zotero.org/ns/api";

/// Pagination relations found in a feed's `<link rel="...">` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationLink {
    First,
    Next,
    Last,
    Previous,
}

impl PaginationLink {
    pub const ALL: [PaginationLink; 4] = [
        PaginationLink::First,
        PaginationLink::Next,
        PaginationLink::Last,
        PaginationLink::Previous,
    ];

    /// `rel` values accepted for this relation; the API emits `prev`
    fn rel_names(&self) -> &'static [&'static str] {
        match self {
            PaginationLink::First => &["first"],
            PaginationLink::Next => &["next"],
            PaginationLink::Last => &["last"],
            PaginationLink::Previous => &["prev", "previous"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.rel_names()[0]
    }
}

impl fmt::Display for PaginationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationLink {
    type Err = ZoteroError;

    fn from_str(s: &str) -> Result<Self> {
        PaginationLink::ALL
            .into_iter()
            .find(|link| link.rel_names().contains(&s))
            .ok_or_else(|| ZoteroError::parse(format!("unknown pagination relation '{s}'")))
    }
}

/// Summary of one `atom:entry`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub key: Option<String>,
    pub item_type: Option<String>,
    pub num_children: Option<u32>,
}

/// A parsed Atom/XML response.
///
/// Holds the element tree, the original text, and the HTTP status the response
/// arrived with. Error statuses are not turned into errors by the client, so
/// callers check [`is_success`](Self::is_success) when it matters.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    root: Element,
    xml: String,
    status: Option<u16>,
}

impl FeedDocument {
    /// Parse a response body. Malformed XML yields `ParseFailure`.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = parse_document(xml)?;
        Ok(Self {
            root,
            xml: xml.to_string(),
            status: None,
        })
    }

    pub(crate) fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// HTTP status of the response, when the document came from the network
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// True unless the response carried a non-2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_none_or(|status| (200..300).contains(&status))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn as_xml(&self) -> &str {
        &self.xml
    }

    /// Feed title (the root's `atom:title`)
    pub fn title(&self) -> Option<String> {
        self.root
            .child(ATOM_NS, "title")
            .map(|title| title.text_content().trim().to_string())
    }

    /// Opaque cursor for a pagination relation.
    ///
    /// Finds the first Atom `link` whose `rel` matches and returns the text after
    /// the last `=` of its `href`. `None` when the link is missing or carries no
    /// cursor.
    pub fn pagination_cursor(&self, relation: PaginationLink) -> Option<String> {
        let names = relation.rel_names();
        let href = self
            .root
            .descendants()
            .into_iter()
            .filter(|e| e.is(ATOM_NS, "link"))
            .find(|link| link.attribute("rel").is_some_and(|rel| names.contains(&rel)))?
            .attribute("href")?;

        match href.rsplit_once('=') {
            Some((_, cursor)) if !cursor.is_empty() => Some(cursor.to_string()),
            _ => None,
        }
    }

    pub fn next_page_start(&self) -> Option<String> {
        self.pagination_cursor(PaginationLink::Next)
    }

    pub fn previous_page_start(&self) -> Option<String> {
        self.pagination_cursor(PaginationLink::Previous)
    }

    pub fn first_page_start(&self) -> Option<String> {
        self.pagination_cursor(PaginationLink::First)
    }

    pub fn last_page_start(&self) -> Option<String> {
        self.pagination_cursor(PaginationLink::Last)
    }

    /// Value of `zapi:totalResults`
    pub fn total_results(&self) -> Result<u64> {
        let text = self.api_field("totalResults")?;
        text.parse::<u64>().map_err(|_| {
            ZoteroError::parse(format!("totalResults is not a number: '{text}'"))
        })
    }

    /// Value of the first `zapi:key`, i.e. the key of a just-created item
    pub fn item_key(&self) -> Result<String> {
        let key = self.api_field("key")?;
        if key.is_empty() {
            return Err(ZoteroError::missing("key"));
        }
        Ok(key)
    }

    /// All entries of the feed, or the root itself for single-entry responses
    pub fn entries(&self) -> Vec<FeedEntry> {
        if self.root.is(ATOM_NS, "entry") {
            return vec![entry_summary(&self.root)];
        }
        self.root
            .child_elements()
            .filter(|e| e.is(ATOM_NS, "entry"))
            .map(entry_summary)
            .collect()
    }

    fn api_field(&self, name: &str) -> Result<String> {
        self.root
            .find(ZOTERO_API_NS, name)
            .map(|e| e.text_content().trim().to_string())
            .ok_or_else(|| ZoteroError::missing(name))
    }
}

fn entry_summary(entry: &Element) -> FeedEntry {
    let text = |ns: &str, name: &str| {
        entry
            .child(ns, name)
            .map(|e| e.text_content().trim().to_string())
    };

    FeedEntry {
        title: text(ATOM_NS, "title"),
        key: text(ZOTERO_API_NS, "key"),
        item_type: text(ZOTERO_API_NS, "itemType"),
        num_children: text(ZOTERO_API_NS, "numChildren").and_then(|n| n.parse().ok()),
    }
}
