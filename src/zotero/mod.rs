//! Zotero web API client
//!
//! This module maps the Zotero REST paths onto async methods and parses the
//! Atom/XML responses into [`FeedDocument`]s.

pub mod client;
pub mod feed;
pub mod params;
pub mod scope;
pub mod xml;

// Re-export public types
pub use client::{CreatorFieldInfo, CreatorTypeInfo, ItemFieldInfo, ItemTypeInfo, ZoteroClient};
pub use feed::{ATOM_NS, FeedDocument, FeedEntry, PaginationLink, ZOTERO_API_NS};
pub use params::RequestParams;
pub use scope::{LibraryScope, LibraryType};
