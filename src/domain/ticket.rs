use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured fields extracted from a ticket URL by exactly one provider.
///
/// `metadata` carries provider-specific fields (owner/repo, card uuid,
/// workspace) that default templates do not consume but custom callers may.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl TicketInfo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_url_and_nothing_else() {
        let info = TicketInfo::new("https://example.com/ticket/1");
        assert_eq!(info.url, "https://example.com/ticket/1");
        assert!(info.id.is_none());
        assert!(info.title.is_none());
        assert!(info.metadata.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_fields() {
        let mut info = TicketInfo::new("https://example.com");
        info.id = Some("123".to_string());
        info.metadata
            .insert("projectCode".to_string(), Value::String("API".to_string()));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["id"], "123");
        assert_eq!(json["metadata"]["projectCode"], "API");
        assert!(json.get("title").is_none());
    }
}
