use regex::Regex;
use serde_json::Value;

use crate::domain::ticket::TicketInfo;
use crate::error::{AppError, AppResult};
use crate::providers::TicketProvider;

const PROVIDER_NAME: &str = "Linear issue";

/// Matches Linear issue URLs such as
/// `https://linear.app/workspace/issue/API-42/issue-title`.
const LINEAR_ISSUE_PATTERN: &str =
    r"^https?://linear\.app/([^/]+)/issue/([^/]+)-(\d+)(?:/([^?]*))?";

pub struct LinearProvider {
    pattern: Regex,
}

impl LinearProvider {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LINEAR_ISSUE_PATTERN).expect("Linear issue pattern compiles"),
        }
    }
}

impl Default for LinearProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketProvider for LinearProvider {
    fn is_ticket_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    fn extract_ticket_info(&self, url: &str, title_text: Option<&str>) -> AppResult<TicketInfo> {
        let captures = self.pattern.captures(url).ok_or_else(|| AppError::InvalidUrl {
            provider: PROVIDER_NAME,
            url: url.to_string(),
        })?;

        let workspace = &captures[1];
        let project_code = &captures[2];
        let issue_number = &captures[3];
        let url_title = captures
            .get(4)
            .map(|slug| slug.as_str().replace('-', " "))
            .filter(|title| !title.is_empty());

        let mut info = TicketInfo::new(url);
        info.id = Some(format!("{project_code}-{issue_number}"));
        info.title = title_text.map(str::to_string).or(url_title);
        info.metadata.insert(
            "workspace".to_string(),
            Value::String(workspace.to_string()),
        );
        info.metadata.insert(
            "projectCode".to_string(),
            Value::String(project_code.to_string()),
        );
        info.metadata.insert(
            "issueNumber".to_string(),
            Value::String(issue_number.to_string()),
        );
        Ok(info)
    }

    fn title_selector(&self) -> Option<&'static str> {
        Some(".ProseMirror.editor[aria-label='Issue title'] p.text-node")
    }

    fn match_patterns(&self) -> &'static [&'static str] {
        &["https://linear.app/*/issue/*/*"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_issue_urls() {
        let provider = LinearProvider::new();
        for url in [
            "https://linear.app/acme/issue/API-42/fix-login-redirect",
            "https://linear.app/acme/issue/API-42",
            "http://linear.app/my-team/issue/WEB-1",
        ] {
            assert!(provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn rejects_non_issue_urls() {
        let provider = LinearProvider::new();
        for url in [
            "https://linear.app/acme/project/roadmap",
            "https://linear.app/acme/issue/nodigits",
            "https://example.com/acme/issue/API-42",
        ] {
            assert!(!provider.is_ticket_url(url), "{url}");
        }
    }

    #[test]
    fn extracts_composite_id_and_metadata() {
        let provider = LinearProvider::new();
        let url = "https://linear.app/acme/issue/API-42/fix-login-redirect";
        let info = provider.extract_ticket_info(url, None).unwrap();

        assert_eq!(info.url, url);
        assert_eq!(info.id.as_deref(), Some("API-42"));
        assert_eq!(info.title.as_deref(), Some("fix login redirect"));
        assert_eq!(info.metadata["workspace"], "acme");
        assert_eq!(info.metadata["projectCode"], "API");
        assert_eq!(info.metadata["issueNumber"], "42");
    }

    #[test]
    fn issue_without_slug_has_no_title() {
        let provider = LinearProvider::new();
        let info = provider
            .extract_ticket_info("https://linear.app/acme/issue/API-42", None)
            .unwrap();
        assert_eq!(info.id.as_deref(), Some("API-42"));
        assert!(info.title.is_none());
    }

    #[test]
    fn supplied_title_overrides_url_slug() {
        let provider = LinearProvider::new();
        let info = provider
            .extract_ticket_info(
                "https://linear.app/acme/issue/API-42/fix-login-redirect",
                Some("Fix login redirect loop"),
            )
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("Fix login redirect loop"));
    }

    #[test]
    fn query_string_excluded_from_title() {
        let provider = LinearProvider::new();
        let info = provider
            .extract_ticket_info(
                "https://linear.app/acme/issue/API-42/fix-login?view=board",
                None,
            )
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("fix login"));
    }

    #[test]
    fn exposes_a_title_selector() {
        let provider = LinearProvider::new();
        assert!(provider.title_selector().is_some());
    }

    #[test]
    fn extract_fails_on_non_matching_url() {
        let provider = LinearProvider::new();
        assert!(matches!(
            provider.extract_ticket_info("https://linear.app/acme/project/x", None),
            Err(AppError::InvalidUrl { .. })
        ));
    }
}
