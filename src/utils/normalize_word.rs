use crate::types::{Word, WordRef};

/// Returns `true` for the characters stripped from every token: ASCII
/// punctuation and ASCII whitespace (vertical tab included).
fn is_stripped_char(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_whitespace() || c == '\x0b'
}

/// Normalizes a raw token into a `Word`.
///
/// The token is trimmed, lowercased, and every ASCII punctuation or whitespace
/// character is removed from anywhere inside it, so `"It's"` becomes `"its"`.
/// The result can be empty (a lone `'` normalizes to `""`).
///
/// Normalizing an already-normalized word returns it unchanged.
pub fn normalize_word(token: &WordRef) -> Word {
    token
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped_char(*c))
        .collect()
}
