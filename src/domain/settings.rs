use serde::{Deserialize, Serialize};

use crate::domain::template;
use crate::error::{AppError, AppResult};

/// User settings for name generation. Loaded from the settings file at
/// startup and written back on every validated change; the generation
/// core only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub username: String,
    pub templates: Templates,
    pub categories: Vec<Category>,
    pub enforce_lowercase: bool,
    pub replacement_character: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_selected_category_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_selected_mode: Option<GenerationMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Templates {
    pub branch_name: String,
    pub pr_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationMode {
    BranchName,
    PrTitle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: "your_user_name".to_string(),
            templates: Templates {
                branch_name: "{username}/{category}/{id}-{title}".to_string(),
                pr_title: "[{id}] {Title}".to_string(),
            },
            categories: vec![
                Category::new("1", "feat"),
                Category::new("2", "bug"),
                Category::new("3", "chore"),
                Category::new("4", "docs"),
                Category::new("5", "refactor"),
                Category::new("6", "test"),
            ],
            enforce_lowercase: true,
            replacement_character: "-".to_string(),
            last_selected_category_index: None,
            last_selected_mode: None,
        }
    }
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Settings {
    /// Checks the invariants the UI schema would normally enforce.
    pub fn validate(&self) -> AppResult<()> {
        if self.categories.is_empty() {
            return Err(AppError::Configuration(
                "at least one category is required".to_string(),
            ));
        }
        if self.replacement_character.chars().count() != 1 {
            return Err(AppError::InvalidReplacement);
        }
        if let Some(index) = self.last_selected_category_index {
            if index >= self.categories.len() {
                return Err(AppError::Configuration(format!(
                    "category index {index} is out of range"
                )));
            }
        }
        for (label, value) in [
            ("branch name template", &self.templates.branch_name),
            ("PR title template", &self.templates.pr_title),
        ] {
            let invalid = template::find_invalid_placeholders(value);
            if !invalid.is_empty() {
                return Err(AppError::Configuration(format!(
                    "{label} contains unknown placeholders: {}",
                    invalid.join(", ")
                )));
            }
        }
        let invalid = template::find_invalid_template_chars(&self.templates.branch_name);
        if !invalid.is_empty() {
            return Err(AppError::Configuration(format!(
                "branch name template contains invalid characters: {}",
                invalid.join(", ")
            )));
        }
        Ok(())
    }

    /// Name of the currently selected category, falling back to the first
    /// entry when no selection was stored or the stored index is stale.
    pub fn default_category(&self) -> &str {
        self.last_selected_category_index
            .and_then(|index| self.categories.get(index))
            .or_else(|| self.categories.first())
            .map(|category| category.name.as_str())
            .unwrap_or_default()
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }
}
