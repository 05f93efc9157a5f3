//! PageSummary - the fields extracted from the API response.

use serde::{Deserialize, Serialize};

/// The parts of a page-summary response this tool cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    /// Page title, `"No title"` when the response lacks one
    pub title: String,
    /// Extract text, `"No summary"` when the response lacks one
    pub extract: String,
    /// Thumbnail image URL, if the response carries one
    pub thumbnail: Option<String>,
}

/// Raw response shape. Every field is optional; the API omits them freely
/// for redirects, disambiguation pages, and missing pages.
#[derive(Debug, Deserialize)]
struct RawSummary {
    title: Option<String>,
    extract: Option<String>,
    thumbnail: Option<RawThumbnail>,
}

#[derive(Debug, Deserialize)]
struct RawThumbnail {
    source: Option<String>,
}

impl PageSummary {
    /// Parse a response body, substituting fallback text for missing
    /// required fields. Malformed JSON is the caller's problem.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSummary = serde_json::from_str(json)?;

        Ok(Self {
            title: raw.title.unwrap_or_else(|| "No title".to_string()),
            extract: raw.extract.unwrap_or_else(|| "No summary".to_string()),
            thumbnail: raw.thumbnail.and_then(|t| t.source),
        })
    }

    /// Whether a thumbnail URL was present in the response
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}
