use regex::Regex;
use serde_json::Value;

use crate::domain::ticket::TicketInfo;
use crate::error::{AppError, AppResult};
use crate::providers::TicketProvider;

const PROVIDER_NAME: &str = "Trello card";

/// Matches Trello card URLs such as
/// `https://trello.com/c/abcd1234/123-card-title`. The card number and
/// title slug segments are both optional.
const TRELLO_CARD_PATTERN: &str =
    r"^https?://(?:www\.)?trello\.com/c/([a-zA-Z0-9]+)(?:/(\d+)(?:-([^/]+))?)?";

pub struct TrelloProvider {
    pattern: Regex,
}

impl TrelloProvider {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TRELLO_CARD_PATTERN).expect("Trello card pattern compiles"),
        }
    }
}

impl Default for TrelloProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketProvider for TrelloProvider {
    fn is_ticket_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    fn extract_ticket_info(&self, url: &str, title_text: Option<&str>) -> AppResult<TicketInfo> {
        let captures = self.pattern.captures(url).ok_or_else(|| AppError::InvalidUrl {
            provider: PROVIDER_NAME,
            url: url.to_string(),
        })?;

        let url_title = captures
            .get(3)
            .map(|slug| strip_query(slug.as_str()).replace('-', " "));

        let mut info = TicketInfo::new(url);
        info.id = captures.get(2).map(|number| number.as_str().to_string());
        info.title = title_text.map(str::to_string).or(url_title);
        info.metadata.insert(
            "uuid".to_string(),
            Value::String(captures[1].to_string()),
        );
        Ok(info)
    }

    fn match_patterns(&self) -> &'static [&'static str] {
        &["https://trello.com/c/*", "https://www.trello.com/c/*"]
    }
}

/// The title slug capture can swallow a trailing query string; drop it.
fn strip_query(slug: &str) -> &str {
    slug.split('?').next().unwrap_or(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_card_urls() {
        let provider = TrelloProvider::new();
        for url in [
            "https://trello.com/c/abcd1234/123-card-title",
            "https://trello.com/c/abcd1234/123",
            "https://trello.com/c/abcd1234",
            "http://trello.com/c/xyz98765/1-a",
            "https://www.trello.com/c/abcd1234/55-another-card",
        ] {
            assert!(provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn rejects_non_card_urls() {
        let provider = TrelloProvider::new();
        for url in [
            "https://trello.com/b/abcd1234/board-name",
            "https://trello.com",
            "https://example.com/c/abcd1234/123-card-title",
        ] {
            assert!(!provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn extracts_id_title_and_uuid() {
        let provider = TrelloProvider::new();
        let url = "https://trello.com/c/abcd1234/123-card-title";
        let info = provider.extract_ticket_info(url, None).unwrap();

        assert_eq!(info.url, url);
        assert_eq!(info.id.as_deref(), Some("123"));
        assert_eq!(info.title.as_deref(), Some("card title"));
        assert_eq!(info.metadata["uuid"], "abcd1234");
    }

    #[test]
    fn card_without_number_has_no_id() {
        let provider = TrelloProvider::new();
        let info = provider
            .extract_ticket_info("https://trello.com/c/abcd1234", None)
            .unwrap();
        assert!(info.id.is_none());
        assert!(info.title.is_none());
        assert_eq!(info.metadata["uuid"], "abcd1234");
    }

    #[test]
    fn strips_query_string_from_url_title() {
        let provider = TrelloProvider::new();
        let info = provider
            .extract_ticket_info(
                "https://trello.com/c/abcd1234/123-card-title?filter=none",
                None,
            )
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("card title"));
    }

    #[test]
    fn supplied_title_overrides_url_slug() {
        let provider = TrelloProvider::new();
        let info = provider
            .extract_ticket_info(
                "https://trello.com/c/abcd1234/123-card-title",
                Some("Scraped Card Title"),
            )
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("Scraped Card Title"));
    }

    #[test]
    fn extract_fails_on_non_matching_url() {
        let provider = TrelloProvider::new();
        assert!(matches!(
            provider.extract_ticket_info("https://trello.com/b/abcd1234", None),
            Err(AppError::InvalidUrl { .. })
        ));
    }
}
