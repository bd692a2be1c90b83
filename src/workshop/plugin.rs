use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Result, ZoteroError};
use crate::workshop::forms::{render_meta_box, render_submission_form};
use crate::workshop::host::{
    ContentTypeDefinition, MetaBoxDefinition, TranslationDirs, WorkshopHost,
};
use crate::workshop::settings::WorkshopSettings;
use crate::workshop::submission::Submission;
use crate::workshop::{CONTENT_TYPE, FLUSH_OPTION, TEXT_DOMAIN};
use crate::zotero::ZoteroClient;

/// Workshop plugin callbacks.
///
/// Holds no per-request state; each submission builds its own client from the
/// record's settings on top of `client_config`.
#[derive(Debug, Clone, Default)]
pub struct WorkshopPlugin {
    client_config: ClientConfig,
    translation_dirs: Option<TranslationDirs>,
}

impl WorkshopPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base configuration for the clients used by submissions.
    ///
    /// The API key is always replaced by the one stored on the record.
    pub fn with_client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    pub fn with_translation_dirs(mut self, dirs: TranslationDirs) -> Self {
        self.translation_dirs = Some(dirs);
        self
    }

    /// Mark rewrite rules for flushing on the next init
    pub fn activate<H: WorkshopHost + ?Sized>(&self, host: &mut H) {
        host.set_option(FLUSH_OPTION, "true");
    }

    pub fn deactivate<H: WorkshopHost + ?Sized>(&self, host: &mut H) {
        host.delete_option(FLUSH_OPTION);
        host.flush_rewrite_rules();
    }

    /// Load translations, register the content type, flush rewrites once after activation
    #[instrument(skip(self, host))]
    pub fn init<H: WorkshopHost + ?Sized>(&self, host: &mut H) {
        if let Some(dirs) = &self.translation_dirs {
            let locale = host.locale();
            match dirs.resolve(&locale) {
                Some(path) => host.load_translations(TEXT_DOMAIN, &path),
                None => debug!(%locale, "No translation catalog found"),
            }
        }

        host.register_content_type(ContentTypeDefinition::workshop());

        if host.option(FLUSH_OPTION).as_deref() == Some("true") {
            host.flush_rewrite_rules();
            host.delete_option(FLUSH_OPTION);
        }
    }

    pub fn admin_init<H: WorkshopHost + ?Sized>(&self, host: &mut H) {
        host.add_meta_box(MetaBoxDefinition::zotero_information());
    }

    /// Meta box HTML for a record.
    ///
    /// An unrecognised library type is shown as a user library so it can be corrected.
    pub fn meta_box<H: WorkshopHost + ?Sized>(&self, host: &H, record_id: u64) -> Result<String> {
        let settings = WorkshopSettings::from_meta_for_editing(&host.record_meta(record_id))?;
        Ok(render_meta_box(&settings))
    }

    /// Persist the settings fields present in a saved admin form.
    ///
    /// Returns how many fields were written.
    #[instrument(skip(self, host, form))]
    pub fn save_post<H: WorkshopHost + ?Sized>(
        &self,
        host: &mut H,
        record_id: u64,
        form: &HashMap<String, String>,
    ) -> usize {
        let mut saved = 0;
        for key in WorkshopSettings::FIELD_KEYS {
            if let Some(value) = form.get(key) {
                host.update_record_meta(record_id, key, value);
                saved += 1;
            }
        }
        debug!(saved, "Saved workshop settings");
        saved
    }

    /// Submission form HTML.
    ///
    /// When `posted` holds form data it is sent to Zotero first.
    pub async fn submission_form<H: WorkshopHost + ?Sized>(
        &self,
        host: &H,
        record_id: u64,
        posted: Option<&HashMap<String, String>>,
    ) -> Result<String> {
        if let Some(form) = posted.filter(|form| !form.is_empty()) {
            let settings = WorkshopSettings::from_meta(&host.record_meta(record_id))?;
            let submission = Submission::from_form(form)?;
            self.save_submission(&settings, &submission).await?;
        }
        Ok(render_submission_form())
    }

    /// Append the submission form to workshop record content; other content is
    /// returned unchanged
    pub async fn content_filter<H: WorkshopHost + ?Sized>(
        &self,
        host: &H,
        record_id: u64,
        content_type: &str,
        content: &str,
        posted: Option<&HashMap<String, String>>,
    ) -> Result<String> {
        if content_type != CONTENT_TYPE {
            return Ok(content.to_string());
        }
        let form = self.submission_form(host, record_id, posted).await?;
        Ok(format!("{content}{form}"))
    }

    /// Create a Zotero item for a submission and file it into the configured
    /// collection. Returns the new item's key.
    ///
    /// # Errors
    ///
    /// * `ZoteroError::InvalidSettings` - If the record has no usable library
    /// * `ZoteroError::ApiError` - If the API answers item creation or collection filing with an error status
    /// * `ZoteroError::MissingField` - If the response carries no item key
    #[instrument(skip_all, fields(title = %submission.title))]
    pub async fn save_submission(
        &self,
        settings: &WorkshopSettings,
        submission: &Submission,
    ) -> Result<String> {
        let scope = settings.scope()?;
        let client = ZoteroClient::with_config(
            self.client_config.clone().with_api_key(settings.api_key()),
        )?;

        let payload = submission.item_payload(settings)?;
        let created = client.create_items(scope, &payload).await?;
        if !created.is_success() {
            return Err(ZoteroError::ApiError {
                status: created.status().unwrap_or_default(),
                message: created.as_xml().trim().to_string(),
            });
        }
        let item_key = created.item_key()?;

        if let Some(collection_key) = &settings.collection_key {
            client
                .file_items(scope, collection_key, &item_key)
                .await?;
            debug!(%collection_key, "Filed submission into collection");
        }

        info!(%item_key, %scope, "Saved workshop submission to Zotero");
        Ok(item_key)
    }
}
