//! Cursor-relative word boundaries
//!
//! Offsets are character offsets into the text, never byte offsets.

const SEPARATOR: char = ' ';

/// Finds the `(start, end)` character offsets of the word under `cursor_pos`.
///
/// A word is delimited by spaces or the ends of the text. When the cursor sits
/// right after a space the word starts at the cursor; when it sits on a space
/// the word ends at the cursor. A cursor beyond the text is clamped to its end.
pub fn locate_word(text: &str, cursor_pos: usize) -> (usize, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor_pos.min(chars.len());

    let end = if chars.get(cursor) == Some(&SEPARATOR) {
        cursor
    } else {
        next_space(&chars, cursor)
    };

    let start = if cursor > 0 && chars[cursor - 1] == SEPARATOR {
        cursor
    } else {
        prev_space(&chars, cursor)
    };

    (start, end)
}

/// Index of the next space at or after `from`, or the text length
fn next_space(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|&c| c == SEPARATOR)
        .map_or(chars.len(), |i| from + i)
}

/// Index just past the last space before `to`, or 0
fn prev_space(chars: &[char], to: usize) -> usize {
    chars[..to]
        .iter()
        .rposition(|&c| c == SEPARATOR)
        .map_or(0, |i| i + 1)
}

/// Extracts the characters in `[start, end)`
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}
