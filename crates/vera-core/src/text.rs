//! Text preview helpers.

/// Number of characters kept when storing the analysed text.
pub const PREVIEW_CHARS: usize = 100;

/// Marker appended when the stored text was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Cut `text` to its first `max_chars` characters, appending
/// [`TRUNCATION_MARKER`] when anything was dropped.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
            out.push_str(&text[..cut]);
            out.push_str(TRUNCATION_MARKER);
            out
        }
        None => text.to_string(),
    }
}

/// Whitespace-delimited token count; blank text yields 0.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether the text has any non-whitespace content.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
