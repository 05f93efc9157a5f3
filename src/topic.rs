//! Topic validation and name derivation.
//!
//! A [`Topic`] is the user-supplied page name. It derives the URL path
//! segment and the filesystem slug used for the output files.

use thiserror::Error;

/// Rejected topic input. The `Display` text is shown to the user as-is.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Topic cannot be empty.")]
pub struct EmptyTopic;

/// A validated, non-empty topic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    raw: String,
}

impl Topic {
    /// Validate user input into a `Topic`.
    ///
    /// Empty or whitespace-only input is rejected. The accepted string is
    /// kept verbatim, interior spacing included.
    pub fn parse(input: impl Into<String>) -> Result<Self, EmptyTopic> {
        let raw = input.into();
        if raw.trim().is_empty() {
            return Err(EmptyTopic);
        }
        Ok(Self { raw })
    }

    /// The topic exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// URL path segment: spaces replaced with underscores, nothing else
    /// touched. Characters outside the space/word set pass through and may
    /// yield an unintended URL.
    pub fn page_segment(&self) -> String {
        self.raw.replace(' ', "_")
    }

    /// Filesystem slug: the page segment, lowercased. Distinct topics can
    /// collapse to the same slug and silently overwrite each other's output.
    pub fn file_slug(&self) -> String {
        self.page_segment().to_lowercase()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
