use unicode_normalization::UnicodeNormalization;

/// Canonical form used for fingerprinting: BOM removal, Unicode NFC,
/// whitespace runs collapsed to a single U+0020, trimmed.
pub fn normalize_text(text: &str) -> String {
    let no_bom = text.replace('\u{FEFF}', "");
    let mut result = String::with_capacity(no_bom.len());
    let mut prev_space = false;
    for c in no_bom.nfc() {
        if c.is_whitespace() {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result.trim().to_string()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count().min(u32::MAX as usize) as u32
}

/// Case-insensitive substring test against a list of lowercase needles.
pub(crate) fn key_contains_any(key: &str, needles: &[&str]) -> bool {
    let lower = key.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}
