// src/schedule/extract.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

use crate::config::PAYLOAD_SCRIPT_ID;
use crate::error::ScrapeError;

static PAYLOAD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!("script#{}", PAYLOAD_SCRIPT_ID))
        .expect("payload selector should parse")
});

/// Return the text of the embedded state `<script>` exactly as it appears.
///
/// Does not check that the text is JSON. A missing element or one with no
/// text is `NotFound`.
#[instrument(level = "debug", skip(document), fields(document_len = document.len()))]
pub fn extract_payload(document: &str) -> Result<String, ScrapeError> {
    let html = Html::parse_document(document);
    let script = html.select(&PAYLOAD_SELECTOR).next().ok_or_else(|| {
        warn!(id = PAYLOAD_SCRIPT_ID, "Payload script not found");
        ScrapeError::NotFound
    })?;

    let payload: String = script.text().collect();
    if payload.is_empty() {
        warn!(id = PAYLOAD_SCRIPT_ID, "Payload script is empty");
        return Err(ScrapeError::NotFound);
    }

    debug!(payload_len = payload.len(), "Extracted payload");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn returns_script_text_verbatim() {
        let doc = r#"<html><head>
            <script>var ignored = 1;</script>
            <script id="__NEXT_DATA__" type="application/json">{"a":"x &amp; <b>y</b>"}</script>
            </head><body></body></html>"#;
        assert_eq!(
            extract_payload(doc).unwrap(),
            r#"{"a":"x &amp; <b>y</b>"}"#
        );
    }

    #[test]
    fn does_not_validate_payload() {
        let doc = r#"<script id="__NEXT_DATA__">not json {</script>"#;
        assert_eq!(extract_payload(doc).unwrap(), "not json {");
    }

    #[test]
    fn first_marker_wins() {
        let doc = r#"<html><head>
            <script id="__NEXT_DATA__">{"n":1}</script>
            </head><body>
            <script id="__NEXT_DATA__">{"n":2}</script>
            </body></html>"#;
        assert_eq!(extract_payload(doc).unwrap(), r#"{"n":1}"#);
    }

    #[test]
    fn missing_marker_is_not_found() {
        let doc = r#"<html><script id="__OTHER__">{}</script><div id="__NEXT_DATA__">{}</div></html>"#;
        assert_eq!(extract_payload(doc).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn empty_marker_is_not_found() {
        let doc = r#"<script id="__NEXT_DATA__"></script>"#;
        assert!(matches!(extract_payload(doc), Err(ScrapeError::NotFound)));
    }
}
