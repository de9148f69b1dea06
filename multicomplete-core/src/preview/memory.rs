//! In-memory text field for headless hosts

use crate::filter::char_slice;
use crate::types::{KeyEvent, VirtualKey};
use super::TextField;

/// A [`TextField`] backed by a `String`.
///
/// [`MemoryField::apply_key`] performs the default editing behaviour of a
/// single-line input for keys the preview passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: String,
    cursor: usize,
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field holding `value` with the cursor at its end
    pub fn with_text(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert `text` at the cursor and move the cursor past it
    pub fn insert_str(&mut self, text: &str) {
        let len = self.len();
        let mut value = char_slice(&self.value, 0, self.cursor);
        value.push_str(text);
        value.push_str(&char_slice(&self.value, self.cursor, len));
        self.value = value;
        self.cursor += text.chars().count();
    }

    /// Remove `count` characters starting at `at`
    fn remove(&mut self, at: usize, count: usize) {
        let len = self.len();
        let mut value = char_slice(&self.value, 0, at);
        value.push_str(&char_slice(&self.value, at + count, len));
        self.value = value;
    }

    /// Apply the default action of `event`. Returns true if the value changed.
    pub fn apply_key(&mut self, event: &KeyEvent) -> bool {
        match event.virtual_key() {
            Some(VirtualKey::Back) => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove(self.cursor, 1);
                true
            }
            Some(VirtualKey::Delete) => {
                if self.cursor >= self.len() {
                    return false;
                }
                self.remove(self.cursor, 1);
                true
            }
            Some(VirtualKey::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Some(VirtualKey::Right) => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            _ if event.modifiers.ctrl || event.modifiers.alt => false,
            _ => match event.character {
                Some(ch) if !ch.is_control() => {
                    self.insert_str(ch.encode_utf8(&mut [0; 4]));
                    true
                }
                _ => false,
            },
        }
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.cursor.min(self.len());
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len());
    }
}
