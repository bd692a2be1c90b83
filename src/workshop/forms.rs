//! HTML rendered into host pages

use crate::workshop::settings::WorkshopSettings;
use crate::zotero::LibraryType;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Public form for submitting a paper to a workshop
pub fn render_submission_form() -> String {
    concat!(
        r#"<form method="post">"#,
        r#"<label>Title</label><br />"#,
        r#"<input name="title" value=""><br />"#,
        r#"<label>Last Name</label><br />"#,
        r#"<input name="lastName" value=""><br />"#,
        r#"<label>First Name</label><br />"#,
        r#"<input name="firstName" value=""><br />"#,
        r#"<label>Abstract</label><br />"#,
        r#"<textarea cols="50" rows="4" name="abstract"></textarea><br />"#,
        r#"<input type="submit" name="Save" value="Save">"#,
        r#"</form>"#,
    )
    .to_string()
}

/// Admin meta box holding a record's Zotero settings
pub fn render_meta_box(settings: &WorkshopSettings) -> String {
    let (user_selected, group_selected) = match settings.library_type {
        LibraryType::Users => (" selected", ""),
        LibraryType::Groups => ("", " selected"),
    };
    let value = |field: &Option<String>| escape_html(field.as_deref().unwrap_or(""));

    let mut html = String::new();
    html.push_str(r#"<p><label for="zotero_library_type"><strong>Zotero Library Type</strong></label></p>"#);
    html.push_str("<p><em>The type of library you wish to use.</em></p>");
    html.push_str(r#"<p><select name="zotero_library_type">"#);
    html.push_str(&format!(
        r#"<option value="users"{user_selected}>User Library</option>"#
    ));
    html.push_str(&format!(
        r#"<option value="groups"{group_selected}>Group Library</option>"#
    ));
    html.push_str("</select></p>");

    text_input(&mut html, "zotero_id", "Zotero ID", None, &value(&settings.zotero_id));
    text_input(&mut html, "zotero_api_key", "API Key", None, &value(&settings.api_key));
    text_input(
        &mut html,
        "zotero_collection_key",
        "Collection Key",
        Some("Add your collection key to save items to a specific collection."),
        &value(&settings.collection_key),
    );
    text_input(
        &mut html,
        "sp_conference_name",
        "Conference Name:",
        None,
        &value(&settings.conference_name),
    );
    text_input(
        &mut html,
        "sp_conference_date",
        "Conference Date:",
        None,
        &value(&settings.conference_date),
    );
    text_input(
        &mut html,
        "sp_conference_location",
        "Conference Location:",
        None,
        &value(&settings.conference_location),
    );
    html
}

fn text_input(html: &mut String, name: &str, label: &str, hint: Option<&str>, value: &str) {
    html.push_str(&format!("<p><label><strong>{label}</strong></label></p>"));
    if let Some(hint) = hint {
        html.push_str(&format!("<p><em>{hint}</em></p>"));
    }
    html.push_str(&format!(r#"<p><input name="{name}" value="{value}" /></p>"#));
}
