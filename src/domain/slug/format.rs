// src/domain/slug/format.rs
use super::transliteration::transliterate;

/// Turns free text into a URL-safe slug.
///
/// Transliteration runs first so Cyrillic letters survive the character
/// filter. Spaces become hyphens, anything outside `[A-Za-z0-9_-]` is dropped
/// and the result is lowercased. Consecutive spaces are not collapsed.
pub fn format_slug(raw: &str) -> String {
    transliterate(raw)
        .chars()
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .filter(|ch| is_slug_char(*ch))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Shortens a slug to at most `max_len` bytes, cutting at the last hyphen
/// inside the limit when there is one.
pub fn truncate_slug(slug: &str, max_len: usize) -> &str {
    if slug.len() <= max_len {
        return slug;
    }
    let Some(head) = slug.get(..max_len) else {
        return slug;
    };
    match head.rfind('-') {
        Some(cut) if cut > 0 => &head[..cut],
        _ => head,
    }
}

/// ASCII word characters plus the hyphen.
pub fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
