//! # Zotero Workshop
//!
//! A Rust client library for the Zotero web API, plus the pieces needed to
//! collect workshop paper submissions into a Zotero library.
//!
//! ## Features
//!
//! - **Zotero API Integration**: Items, collections, tags, groups and item schema lookups
//! - **Feed Introspection**: Pagination cursors, result totals and created item keys
//! - **Async Support**: Built on tokio and reqwest
//! - **Error Handling**: One error enum covering transport, parsing and missing fields
//! - **Workshop Submissions**: Typed per-record settings and a host-agnostic plugin layer
//!
//! ## Quick Start
//!
//! ### Paging through a library
//!
//! ```no_run
//! use zotero_workshop::{LibraryScope, RequestParams, ZoteroClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZoteroClient::new("your_api_key_here")?;
//!     let scope = LibraryScope::User(475425);
//!
//!     let mut params = RequestParams::new().limit(50);
//!     loop {
//!         let feed = client.top_items(scope, &params).await?;
//!         for entry in feed.entries() {
//!             println!("{:?}: {:?}", entry.key, entry.title);
//!         }
//!         match feed.next_page_start() {
//!             Some(start) => params = params.start(start),
//!             None => break,
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Creating an item
//!
//! ```no_run
//! use zotero_workshop::{LibraryScope, ZoteroClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZoteroClient::new("your_api_key_here")?;
//!     let scope = LibraryScope::Group(12345);
//!
//!     let payload = r#"{"items":[{"itemType":"book","title":"Example"}]}"#;
//!     let created = client.create_items(scope, payload).await?;
//!     let key = created.item_key()?;
//!
//!     client.file_items(scope, "COLL1234", &key).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod workshop;
pub mod zotero;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{Result, ZoteroError};
pub use workshop::{Submission, WorkshopPlugin, WorkshopSettings};
pub use zotero::{
    FeedDocument, FeedEntry, LibraryScope, LibraryType, PaginationLink, RequestParams,
    ZoteroClient,
};
