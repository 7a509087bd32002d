use crate::domain::settings::Settings;
use crate::domain::ticket::TicketInfo;
use crate::error::{AppError, AppResult};
use crate::slug::{SlugOptions, slugify};

/// Options controlling how [`generate_name`] processes field values.
/// `skip_slugify` bypasses the slug pipeline entirely (used for PR
/// titles, which keep their natural text).
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub lower: bool,
    pub replacement: String,
    pub skip_slugify: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            lower: true,
            replacement: "_".to_string(),
            skip_slugify: false,
        }
    }
}

/// Substitutes `{id}`, `{title}`, `{category}` and `{username}` (plus
/// their `{Id}`-style capitalized variants) into `template`.
///
/// Field values run through the slugifier; capitalized variants skip
/// lowercasing and uppercase the first character of the processed value.
/// The username is copied verbatim. `ticket.category` falls back to
/// `default_category`. Fails with [`AppError::MissingFields`] before any
/// substitution when the template references a field with no value.
pub fn generate_name(
    template: &str,
    ticket: &TicketInfo,
    username: &str,
    default_category: &str,
    options: &GeneratorOptions,
) -> AppResult<String> {
    let category = ticket.category.as_deref().or(Some(default_category));
    // Presence is checked (and reported) in this order; `username` is a
    // direct argument and can never be absent.
    let fields = [
        ("id", ticket.id.as_deref()),
        ("title", ticket.title.as_deref()),
        ("category", category),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(name, value)| references_field(template, name) && value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing.join(", ")));
    }

    let mut result = template.to_string();
    for (name, value) in fields {
        let lower_placeholder = format!("{{{name}}}");
        let upper_placeholder = format!("{{{}}}", capitalize_first(name));
        result = result.replace(
            &lower_placeholder,
            &process_field(value, false, options)?,
        );
        result = result.replace(
            &upper_placeholder,
            &process_field(value, true, options)?,
        );
    }

    result = result.replace("{username}", username);
    result = result.replace("{Username}", &capitalize_first(username));

    Ok(result)
}

/// Branch name for a ticket using the configured branch template and
/// formatting settings.
pub fn branch_name(settings: &Settings, ticket: &TicketInfo) -> AppResult<String> {
    generate_name(
        &settings.templates.branch_name,
        ticket,
        &settings.username,
        settings.default_category(),
        &GeneratorOptions {
            lower: settings.enforce_lowercase,
            replacement: settings.replacement_character.clone(),
            skip_slugify: false,
        },
    )
}

/// PR title for a ticket. Titles keep their natural text: fields are not
/// slugified and words stay separated by spaces.
pub fn pr_title(settings: &Settings, ticket: &TicketInfo) -> AppResult<String> {
    generate_name(
        &settings.templates.pr_title,
        ticket,
        &settings.username,
        settings.default_category(),
        &GeneratorOptions {
            lower: false,
            replacement: " ".to_string(),
            skip_slugify: true,
        },
    )
}

fn references_field(template: &str, name: &str) -> bool {
    template.contains(&format!("{{{name}}}"))
        || template.contains(&format!("{{{}}}", capitalize_first(name)))
}

fn process_field(
    value: Option<&str>,
    capitalize: bool,
    options: &GeneratorOptions,
) -> AppResult<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    if options.skip_slugify {
        return Ok(if capitalize {
            capitalize_first(value)
        } else {
            value.to_string()
        });
    }

    // Capitalized placeholders skip lowercasing so the slug keeps its
    // original casing beyond the uppercased lead character.
    let slug_options = SlugOptions::new(
        if capitalize { false } else { options.lower },
        options.replacement.clone(),
    );
    let processed = slugify(value, &slug_options)?;

    Ok(if capitalize {
        capitalize_first(&processed)
    } else {
        processed
    })
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
