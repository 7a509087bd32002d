use regex::Regex;
use serde_json::Value;

use crate::domain::ticket::TicketInfo;
use crate::error::{AppError, AppResult};
use crate::providers::TicketProvider;

const PROVIDER_NAME: &str = "GitHub Issues";

/// Matches GitHub issue URLs such as
/// `https://github.com/owner/repo/issues/123`.
const GITHUB_ISSUES_PATTERN: &str =
    r"^https?://(?:www\.)?github\.com/([^/]+)/([^/]+)/(issues)/(\d+)";

pub struct GithubIssuesProvider {
    pattern: Regex,
}

impl GithubIssuesProvider {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(GITHUB_ISSUES_PATTERN).expect("GitHub issues pattern compiles"),
        }
    }
}

impl Default for GithubIssuesProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketProvider for GithubIssuesProvider {
    fn is_ticket_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    fn extract_ticket_info(&self, url: &str, title_text: Option<&str>) -> AppResult<TicketInfo> {
        let captures = self.pattern.captures(url).ok_or_else(|| AppError::InvalidUrl {
            provider: PROVIDER_NAME,
            url: url.to_string(),
        })?;

        let mut info = TicketInfo::new(url);
        info.id = Some(captures[4].to_string());
        info.title = title_text.map(str::to_string);
        info.metadata
            .insert("owner".to_string(), Value::String(captures[1].to_string()));
        info.metadata
            .insert("repo".to_string(), Value::String(captures[2].to_string()));
        info.metadata
            .insert("type".to_string(), Value::String(captures[3].to_string()));
        Ok(info)
    }

    fn match_patterns(&self) -> &'static [&'static str] {
        &["https://github.com/*/*/issues/*", "https://www.github.com/*/*/issues/*"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_issue_urls() {
        let provider = GithubIssuesProvider::new();
        for url in [
            "https://github.com/facebook/react/issues/123",
            "https://github.com/microsoft/typescript/issues/45678",
            "http://github.com/owner/repo/issues/1",
            "https://www.github.com/owner/repo/issues/999",
        ] {
            assert!(provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn rejects_other_github_urls() {
        let provider = GithubIssuesProvider::new();
        for url in [
            "https://github.com/facebook/react",
            "https://github.com/facebook/react/tree/main",
            "https://github.com/facebook/react/blob/main/README.md",
            "https://github.com/facebook/react/pull/123",
            "https://github.com",
            "https://gitlab.com/owner/repo/issues/123",
        ] {
            assert!(!provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn extracts_id_and_metadata() {
        let provider = GithubIssuesProvider::new();
        let url = "https://github.com/facebook/react/issues/123";
        let info = provider.extract_ticket_info(url, None).unwrap();

        assert_eq!(info.url, url);
        assert_eq!(info.id.as_deref(), Some("123"));
        assert!(info.title.is_none());
        assert_eq!(info.metadata["owner"], "facebook");
        assert_eq!(info.metadata["repo"], "react");
        assert_eq!(info.metadata["type"], "issues");
    }

    #[test]
    fn uses_supplied_title_text() {
        let provider = GithubIssuesProvider::new();
        let info = provider
            .extract_ticket_info(
                "https://github.com/owner/repo/issues/7",
                Some("Fix login redirect"),
            )
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("Fix login redirect"));
    }

    #[test]
    fn extract_fails_on_non_matching_url() {
        let provider = GithubIssuesProvider::new();
        let err = provider
            .extract_ticket_info("https://github.com/facebook/react", None)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
    }

    #[test]
    fn matching_urls_always_extract() {
        let provider = GithubIssuesProvider::new();
        let url = "https://github.com/a/b/issues/42?tab=comments";
        if provider.is_ticket_url(url) {
            assert!(provider.extract_ticket_info(url, None).is_ok());
        }
    }
}
