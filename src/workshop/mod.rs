//! Workshop submissions backed by a Zotero library
//!
//! A host content platform stores one Zotero configuration per "workshop"
//! record. Visitors fill in a public form; each submission becomes a
//! `conferencePaper` item in the configured library and, optionally, is filed
//! into a collection.
//!
//! The host is reached only through the [`WorkshopHost`] and [`HookRegistry`]
//! traits. Registration is explicit: call [`setup`] with the host's registry,
//! then route each [`WorkshopCallback`] to the matching [`WorkshopPlugin`]
//! method.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use zotero_workshop::workshop::{InMemoryHost, WorkshopPlugin, setup};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut host = InMemoryHost::new();
//!     setup(&mut host);
//!
//!     let plugin = WorkshopPlugin::new();
//!     plugin.activate(&mut host);
//!     plugin.init(&mut host);
//!
//!     let form: HashMap<String, String> = [
//!         ("zotero_library_type", "groups"),
//!         ("zotero_id", "12345"),
//!         ("zotero_api_key", "your_api_key_here"),
//!     ]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!     plugin.save_post(&mut host, 1, &form);
//!
//!     let html = plugin.submission_form(&host, 1, None).await?;
//!     println!("{html}");
//!     Ok(())
//! }
//! ```

pub mod forms;
pub mod host;
pub mod memory;
pub mod plugin;
pub mod settings;
pub mod submission;

pub use host::{
    ContentTypeDefinition, ContentTypeLabels, HookBinding, HookKind, HookRegistry,
    MetaBoxDefinition, TranslationDirs, WorkshopCallback, WorkshopHost, bindings, setup,
};
pub use memory::InMemoryHost;
pub use plugin::WorkshopPlugin;
pub use settings::WorkshopSettings;
pub use submission::Submission;

/// Content type registered for workshop records
pub const CONTENT_TYPE: &str = "sp_workshop";

/// Rewrite slug of workshop records
pub const REWRITE_SLUG: &str = "workshop";

/// Translation domain
pub const TEXT_DOMAIN: &str = "spworkshop";

/// Option set on activation; rewrite rules are flushed once on the next init
pub const FLUSH_OPTION: &str = "scholarpress_workshop_flush";

/// Shortcode rendering the submission form
pub const SHORTCODE: &str = "spworkshopform";

/// Identifier of the admin meta box
pub const META_BOX_ID: &str = "zotero-information";
