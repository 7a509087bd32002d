use base64::prelude::{BASE64_STANDARD, Engine as _};
use percent_encoding::percent_decode_str;

use crate::error::{AppError, AppResult};

/// Options controlling [`slugify`] output.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    pub lower: bool,
    pub replacement: String,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            lower: true,
            replacement: "-".to_string(),
        }
    }
}

impl SlugOptions {
    pub fn new(lower: bool, replacement: impl Into<String>) -> Self {
        Self {
            lower,
            replacement: replacement.into(),
        }
    }
}

/// Converts a string into a git-branch-friendly slug.
///
/// The pipeline, in order: lowercase (when `lower` is set), best-effort
/// percent-decode, emoji-to-shortcode replacement, Unicode-to-ASCII
/// transliteration, then non-alphanumeric runs collapse to a single
/// replacement character with leading/trailing replacements stripped.
/// Inputs that slug down to nothing (pure punctuation, unsupported
/// scripts) fall back to a base64 encoding of the original bytes so the
/// result is never empty for non-empty input.
pub fn slugify(text: &str, options: &SlugOptions) -> AppResult<String> {
    let replacement = single_char(&options.replacement)?;

    let lowered = if options.lower {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    // Percent-decoding is best-effort normalization; a literal '%' in
    // the input must not fail the whole slug.
    let decoded = match percent_decode_str(&lowered).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => lowered,
    };

    let named = replace_emoji(&decoded);
    let ascii = deunicode::deunicode(&named);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(replacement);
            }
            slug.push(ch);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() && !text.is_empty() {
        return Ok(base64_fallback(text, replacement));
    }

    Ok(slug)
}

fn single_char(replacement: &str) -> AppResult<char> {
    let mut chars = replacement.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(AppError::InvalidReplacement),
    }
}

/// Replaces each emoji code point with its `:shortcode:` token. Emoji
/// without a known shortcode pass through to transliteration unchanged.
fn replace_emoji(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        match emojis::get(ch.encode_utf8(&mut buf)).and_then(|emoji| emoji.shortcode()) {
            Some(code) => {
                out.push(':');
                out.push_str(code);
                out.push(':');
            }
            None => out.push(ch),
        }
    }
    out
}

/// Encodes the original input so wholly unsluggable text still yields a
/// non-empty, branch-safe token. Padding is dropped and '/' (a path
/// separator in branch names) becomes the replacement character.
fn base64_fallback(original: &str, replacement: char) -> String {
    BASE64_STANDARD
        .encode(original.as_bytes())
        .trim_end_matches('=')
        .replace('/', &replacement.to_string())
}
