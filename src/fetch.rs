//! Wikipedia REST API client.
//!
//! Uses reqwest for a single GET against the page-summary endpoint.

use crate::topic::Topic;
use reqwest::Client;
use thiserror::Error;

/// Base endpoint for the page-summary API
const API_BASE: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// User-Agent string identifying this client, as the REST API asks for
const USER_AGENT: &str = concat!(
    "wikisum/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/wikisum/wikisum)"
);

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failures and non-2xx statuses both land here; the caller
    /// treats them as one category.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Build the summary endpoint URL for a topic.
pub fn summary_url(topic: &Topic) -> String {
    format!("{}/{}", API_BASE, topic.page_segment())
}

/// Create the HTTP client used for the request. Client defaults apply for
/// timeouts and redirects.
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Fetch the summary for a topic, returning the raw JSON body.
///
/// The body is kept as a string so the raw-JSON page can embed the response
/// exactly as received.
pub async fn fetch_summary(topic: &Topic) -> Result<String, FetchError> {
    let client = create_client()?;

    let response = client
        .get(summary_url(topic))
        .send()
        .await?
        .error_for_status()?;

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_underscored_segment() {
        let topic = Topic::parse("Python (programming language)").unwrap();
        assert_eq!(
            summary_url(&topic),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Python_(programming_language)"
        );
    }

    #[test]
    fn url_keeps_single_word_topics_as_is() {
        let topic = Topic::parse("Ferris").unwrap();
        assert_eq!(
            summary_url(&topic),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Ferris"
        );
    }
}
