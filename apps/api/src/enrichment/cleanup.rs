//! Post-processing of model output: trim and strip one known boilerplate prefix.

use crate::enrichment::prompts::KNOWN_PREFIXES;

/// Trims `text`, then removes the first prefix of `KNOWN_PREFIXES` it starts with
/// (case-insensitive) and trims again. Later prefixes are not re-checked after a strip.
pub fn strip_known_prefix(text: &str) -> &str {
    let text = text.trim();
    for prefix in KNOWN_PREFIXES {
        if let Some(rest) = strip_prefix_ignore_case(text, prefix) {
            return rest.trim();
        }
    }
    text
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = chars.next().map(|(i, _)| i).unwrap_or(text.len());
    Some(&text[offset..])
}
