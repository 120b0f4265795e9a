use gloo::net::http::Request;
use thiserror::Error;

/// Phrase list served next to the page.
pub(crate) const DEFAULT_URL: &str = "config.json";

#[derive(Error, Debug)]
pub(crate) enum SourceError {
    #[error("Phrase request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("Phrase request returned HTTP {0}")]
    Status(u16),
    #[error("Phrase list is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Appends a volatile query parameter so every load bypasses the HTTP cache.
pub(crate) fn cache_busted(url: &str, now_millis: f64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={}", now_millis as u64)
}

pub(crate) fn parse_phrases(body: &str) -> Result<Vec<String>, SourceError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches the phrase list once. Failures are not retried.
pub(crate) async fn fetch_phrases(url: &str) -> Result<Vec<String>, SourceError> {
    let url = cache_busted(url, js_sys::Date::now());
    log::debug!("fetching phrases from {}", url);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(SourceError::Status(response.status()));
    }
    let phrases = parse_phrases(&response.text().await?)?;
    log::debug!("fetched {} phrases", phrases.len());
    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_buster_picks_the_right_separator() {
        assert_eq!(cache_busted("config.json", 1700.0), "config.json?t=1700");
        assert_eq!(
            cache_busted("config.json?lang=en", 1700.9),
            "config.json?lang=en&t=1700"
        );
    }

    #[test]
    fn parses_a_string_array() {
        assert_eq!(
            parse_phrases(r#"["a", "b"]"#).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn rejects_anything_else() {
        assert!(matches!(parse_phrases("{}"), Err(SourceError::Parse(_))));
        assert!(matches!(parse_phrases("[1, 2]"), Err(SourceError::Parse(_))));
        assert!(matches!(parse_phrases("<html>"), Err(SourceError::Parse(_))));
    }
}
