//! HTML rendering for the two output documents.
//!
//! Both pages are built by plain string interpolation. Title and extract
//! text are embedded as received from the API; only the raw-JSON dump is
//! entity-encoded, since it lands inside a `<pre>` block verbatim.

use crate::summary::PageSummary;

/// Render the summary document: title heading, extract paragraph, and an
/// `<img>` tag when a thumbnail URL is present.
pub fn summary_page(page: &PageSummary) -> String {
    let image = match &page.thumbnail {
        Some(url) => format!(
            "\n    <img src=\"{}\" alt=\"{}\" style=\"max-width:300px;\" />",
            url, page.title
        ),
        None => String::new(),
    };

    format!(
        r#"<html>
<head>
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <p>{extract}</p>{image}
</body>
</html>
"#,
        title = page.title,
        extract = page.extract,
        image = image,
    )
}

/// Render the raw-JSON document: the encoded response body in a `<pre>`
/// block, for inspection when the summary page looks off.
pub fn raw_json_page(title: &str, json: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>Raw JSON for {title}</title>
</head>
<body>
    <pre>{json}</pre>
</body>
</html>
"#,
        title = title,
        json = html_encode(json),
    )
}

/// Encode the characters that would break out of an HTML text node.
fn html_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#39;"),
            other => encoded.push(other),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(thumbnail: Option<&str>) -> PageSummary {
        PageSummary {
            title: "Rust".to_string(),
            extract: "A systems language.".to_string(),
            thumbnail: thumbnail.map(str::to_string),
        }
    }

    #[test]
    fn summary_page_without_thumbnail_has_no_img() {
        let html = summary_page(&page(None));
        assert!(!html.contains("<img"));
        assert!(html.contains("<h1>Rust</h1>"));
        assert!(html.contains("<p>A systems language.</p>"));
    }

    #[test]
    fn summary_page_with_thumbnail_has_one_img_with_exact_url() {
        let html = summary_page(&page(Some("https://upload.wikimedia.org/rust.png")));
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains("src=\"https://upload.wikimedia.org/rust.png\""));
        assert!(html.contains("alt=\"Rust\""));
    }

    #[test]
    fn raw_page_titles_after_the_topic() {
        let html = raw_json_page("Rust", "{}");
        assert!(html.contains("<title>Raw JSON for Rust</title>"));
    }

    #[test]
    fn raw_page_encodes_json_body() {
        let html = raw_json_page("Rust", r#"{"extract": "1 < 2 & \"quoted\""}"#);
        assert!(html.contains("&quot;extract&quot;"));
        assert!(html.contains("1 &lt; 2 &amp;"));
        // Nothing from the body survives as markup
        assert!(!html.contains(r#""extract""#));
    }

    #[test]
    fn encode_covers_the_five_specials() {
        assert_eq!(html_encode(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
