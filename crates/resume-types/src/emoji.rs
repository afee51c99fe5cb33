//! Emoji normalization
//!
//! ATS parsers are known to strip or misparse emoji, so every text span
//! is cleaned at parse time. The same ranges are scanned by the
//! compliance checker to detect residue in finished artifacts.

/// Inclusive codepoint ranges treated as emoji/symbol noise:
/// emoticons, pictographs, transport symbols, flags, dingbats,
/// supplemental symbols, misc symbols, variation selectors, zero-width
/// and word joiners, watch/hourglass.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2702, 0x27B0),
    (0x1F900, 0x1F9FF),
    (0x2600, 0x26FF),
    (0xFE00, 0xFE0F),
    (0x200D, 0x200D),
    (0x2060, 0x2060),
    (0x231A, 0x231B),
];

fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}

/// Delete every emoji codepoint from `text`.
pub fn strip_emojis(text: &str) -> String {
    text.chars().filter(|c| !is_emoji(*c)).collect()
}

/// True when `text` contains at least one emoji codepoint.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}
