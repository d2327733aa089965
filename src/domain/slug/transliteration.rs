// src/domain/slug/transliteration.rs
use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowercase Cyrillic (plus apostrophes) to Latin, following the Ukrainian
/// national transliteration with a few Russian letters kept for old content.
pub const TRANSLITERATION_TABLE: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "h"),
    ('ґ', "g"),
    ('д', "d"),
    ('е', "e"),
    ('є', "ie"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "y"),
    ('і', "i"),
    ('ї', "i"),
    ('й', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ь', ""),
    ('ю', "iu"),
    ('я', "ia"),
    ('\'', ""),
    ('\u{02BC}', ""),
    ('\u{2019}', ""),
    // russian holdovers
    ('ы', "y"),
    ('э', "e"),
    ('ё', "io"),
    ('ъ', ""),
];

static LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| TRANSLITERATION_TABLE.iter().copied().collect());

/// Latin replacement for a single lowercase character, if it has one.
pub fn latin_for(ch: char) -> Option<&'static str> {
    LOOKUP.get(&ch).copied()
}

/// Lowercases `text` and replaces every mapped character with its Latin
/// spelling. Characters outside the table are copied through unchanged.
pub fn transliterate(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match latin_for(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

    #[test]
    fn every_key_is_lowercase() {
        for (ch, _) in TRANSLITERATION_TABLE {
            assert_eq!(ch.to_lowercase().next(), Some(*ch), "key {ch:?}");
        }
    }

    #[test]
    fn ukrainian_alphabet_is_fully_covered() {
        for ch in UKRAINIAN_ALPHABET.chars() {
            assert!(latin_for(ch).is_some(), "missing mapping for {ch}");
        }
    }

    #[test]
    fn ukrainian_text_becomes_ascii() {
        let input = format!("{UKRAINIAN_ALPHABET} 0123 {UKRAINIAN_ALPHABET}-ʼ'");
        let out = transliterate(&input);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' '),
            "non ascii output: {out}"
        );
    }

    #[test]
    fn uppercase_is_lowered_before_lookup() {
        assert_eq!(transliterate("ЖИТОМИР"), "zhytomyr");
        assert_eq!(transliterate("Ґанок"), "ganok");
    }

    #[test]
    fn digraphs_expand() {
        assert_eq!(transliterate("щука"), "shchuka");
        assert_eq!(transliterate("юля"), "iulia");
        assert_eq!(transliterate("єва"), "ieva");
    }

    #[test]
    fn silent_letters_disappear() {
        assert_eq!(transliterate("біль"), "bil");
        assert_eq!(transliterate("м'ята"), "miata");
        assert_eq!(transliterate("об\u{02BC}єкт"), "obiekt");
        assert_eq!(transliterate("подъезд"), "podezd");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(transliterate("abc 123!"), "abc 123!");
        assert_eq!(transliterate("日本"), "日本");
    }

    #[test]
    fn empty_input() {
        assert_eq!(transliterate(""), "");
    }
}
