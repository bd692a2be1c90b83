use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;
use crate::workshop::settings::WorkshopSettings;

/// Item type created for every submission
pub const SUBMISSION_ITEM_TYPE: &str = "conferencePaper";

/// Fields posted by the public submission form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub title: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Submission {
    /// Read a submission from posted form fields; other fields are ignored
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self> {
        Ok(serde_json::from_value(serde_json::to_value(form)?)?)
    }

    /// Item-creation body for this submission, with the conference details of
    /// the workshop record
    pub fn item_payload(&self, settings: &WorkshopSettings) -> Result<String> {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        let payload = json!({
            "items": [{
                "itemType": SUBMISSION_ITEM_TYPE,
                "title": self.title,
                "creators": [{
                    "creatorType": "author",
                    "firstName": self.first_name,
                    "lastName": self.last_name,
                }],
                "abstractNote": self.abstract_text,
                "date": field(&settings.conference_date),
                "conferenceName": field(&settings.conference_name),
                "place": field(&settings.conference_location),
            }]
        });

        Ok(serde_json::to_string(&payload)?)
    }
}
