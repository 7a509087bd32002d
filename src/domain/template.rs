use std::sync::LazyLock;

use regex::Regex;

/// Placeholders the name generator understands, lowercase and capitalized.
pub const VALID_PLACEHOLDERS: [&str; 8] = [
    "{id}",
    "{title}",
    "{category}",
    "{username}",
    "{Id}",
    "{Title}",
    "{Category}",
    "{Username}",
];

/// Characters git refuses in branch names (plus space), checked against
/// the template text outside of placeholders.
const INVALID_BRANCH_CHARS: [char; 10] = [' ', '~', '^', ':', '?', '*', '[', ']', '\\', '.'];

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern compiles"));

pub fn has_invalid_branch_chars(value: &str) -> bool {
    value.chars().any(|ch| INVALID_BRANCH_CHARS.contains(&ch))
}

/// Lists the offending characters, reporting a space as the word "space"
/// so it survives display.
pub fn find_invalid_branch_chars(value: &str) -> Vec<String> {
    INVALID_BRANCH_CHARS
        .iter()
        .filter(|ch| value.contains(**ch))
        .map(|ch| {
            if *ch == ' ' {
                "space".to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

fn without_placeholders(value: &str) -> String {
    let mut stripped = value.to_string();
    for placeholder in VALID_PLACEHOLDERS {
        stripped = stripped.replace(placeholder, "");
    }
    stripped
}

pub fn is_valid_template(value: &str) -> bool {
    !has_invalid_branch_chars(&without_placeholders(value))
}

pub fn find_invalid_template_chars(value: &str) -> Vec<String> {
    find_invalid_branch_chars(&without_placeholders(value))
}

/// Every `{…}` group that is not a recognized placeholder.
pub fn find_invalid_placeholders(value: &str) -> Vec<String> {
    PLACEHOLDER_PATTERN
        .find_iter(value)
        .map(|group| group.as_str().to_string())
        .filter(|group| !VALID_PLACEHOLDERS.contains(&group.as_str()))
        .collect()
}

pub fn has_invalid_placeholders(value: &str) -> bool {
    !find_invalid_placeholders(value).is_empty()
}
