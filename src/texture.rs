//! Texture records returned by suggestion sources
//!
//! A texture is passed through the widget untouched. Only the display
//! helpers here look inside it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Maximum number of description characters shown in a suggestion row
pub const DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// A searchable texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Opaque identity, used only to tell textures apart
    #[serde(default)]
    pub id: serde_json::Value,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

impl Texture {
    pub fn new(id: impl Into<serde_json::Value>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail_url: &str) -> Self {
        self.thumbnail_url = thumbnail_url.to_string();
        self
    }

    /// Description as shown in a suggestion row
    pub fn short_description(&self) -> Cow<'_, str> {
        truncate_description(&self.description)
    }

    /// Last path segment of the thumbnail reference, without query string
    ///
    /// A terminal cannot show the image itself, so rows show its file name.
    pub fn thumbnail_label(&self) -> &str {
        let without_query = self
            .thumbnail_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        without_query
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

/// Cut a description to [`DESCRIPTION_LIMIT`] characters followed by `...`
///
/// Counts characters, not bytes or words. Text at or under the limit is
/// returned unchanged.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &description[..cut], ELLIPSIS)),
        None => Cow::Borrowed(description),
    }
}
