//! Keyboard input representation

use super::VirtualKey;

/// Represents a keyboard event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// DOM key code
    pub key_code: u16,
    /// Modifier flags reported on the event itself
    pub modifiers: ModifierState,
    /// Character produced by the key (if any)
    pub character: Option<char>,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(key_code: u16, modifiers: ModifierState, character: Option<char>) -> Self {
        Self {
            key_code,
            modifiers,
            character,
        }
    }

    /// Creates an event for a known key without modifiers
    pub fn from_vk(key: VirtualKey) -> Self {
        let character = (key == VirtualKey::Space).then_some(' ');
        Self::new(key.key_code(), ModifierState::default(), character)
    }

    /// Creates an event for a printable character
    pub fn from_char(ch: char) -> Self {
        if ch == ' ' {
            return Self::from_vk(VirtualKey::Space);
        }
        let key_code = if ch.is_ascii_alphanumeric() {
            ch.to_ascii_uppercase() as u16
        } else {
            0
        };
        Self::new(key_code, ModifierState::default(), Some(ch))
    }

    /// Returns the same event with the given modifiers
    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The key this event maps to, if it is one the dispatch knows about
    pub fn virtual_key(&self) -> Option<VirtualKey> {
        VirtualKey::from_key_code(self.key_code)
    }
}

/// State of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl ModifierState {
    /// Creates a new modifier state
    pub fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        Self { shift, ctrl, alt }
    }
}

/// Ctrl/Shift state observed from document-level key-down/key-up events.
///
/// Hosts feed every key event they see here, whether or not the text field
/// has focus, so that a modified arrow key is recognised even when the event
/// itself does not carry the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierTracker {
    ctrl_down: bool,
    shift_down: bool,
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, event: &KeyEvent) {
        match event.virtual_key() {
            Some(VirtualKey::Control) => self.ctrl_down = true,
            Some(VirtualKey::Shift) => self.shift_down = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, event: &KeyEvent) {
        match event.virtual_key() {
            Some(VirtualKey::Control) => self.ctrl_down = false,
            Some(VirtualKey::Shift) => self.shift_down = false,
            _ => {}
        }
    }

    pub fn ctrl_down(&self) -> bool {
        self.ctrl_down
    }

    pub fn shift_down(&self) -> bool {
        self.shift_down
    }

    /// True if Ctrl or Shift is held, either as tracked here or as reported on `event`
    pub fn is_modified(&self, event: &KeyEvent) -> bool {
        self.ctrl_down || self.shift_down || event.modifiers.ctrl || event.modifiers.shift
    }
}
