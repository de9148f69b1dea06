use std::collections::HashMap;

/// Keys the preview dispatch cares about, keyed by their DOM `keyCode`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    Back = 8,              // Backspace
    Tab = 9,
    Return = 13,           // Enter
    Shift = 16,
    Control = 17,
    Menu = 18,             // Alt
    Escape = 27,
    Space = 32,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
    Delete = 46,
}

impl VirtualKey {
    /// Maps a raw key code to a known key. Unknown codes yield `None`.
    pub fn from_key_code(code: u16) -> Option<Self> {
        match code {
            8 => Some(VirtualKey::Back),
            9 => Some(VirtualKey::Tab),
            13 => Some(VirtualKey::Return),
            16 => Some(VirtualKey::Shift),
            17 => Some(VirtualKey::Control),
            18 => Some(VirtualKey::Menu),
            27 => Some(VirtualKey::Escape),
            32 => Some(VirtualKey::Space),
            37 => Some(VirtualKey::Left),
            38 => Some(VirtualKey::Up),
            39 => Some(VirtualKey::Right),
            40 => Some(VirtualKey::Down),
            46 => Some(VirtualKey::Delete),
            _ => None,
        }
    }

    /// Raw DOM key code
    pub fn key_code(self) -> u16 {
        self as u16
    }
}

pub fn create_key_name_map() -> HashMap<&'static str, VirtualKey> {
    let mut map = HashMap::new();

    // Editing keys
    map.insert("BACKSPACE", VirtualKey::Back);
    map.insert("BACK", VirtualKey::Back);
    map.insert("DELETE", VirtualKey::Delete);
    map.insert("DEL", VirtualKey::Delete);
    map.insert("SPACE", VirtualKey::Space);

    // Acceptance / cancellation
    map.insert("TAB", VirtualKey::Tab);
    map.insert("ENTER", VirtualKey::Return);
    map.insert("RETURN", VirtualKey::Return);
    map.insert("ESCAPE", VirtualKey::Escape);
    map.insert("ESC", VirtualKey::Escape);

    // Arrows
    map.insert("LEFT", VirtualKey::Left);
    map.insert("UP", VirtualKey::Up);
    map.insert("RIGHT", VirtualKey::Right);
    map.insert("DOWN", VirtualKey::Down);

    // Modifiers pressed on their own
    map.insert("SHIFT", VirtualKey::Shift);
    map.insert("CTRL", VirtualKey::Control);
    map.insert("CONTROL", VirtualKey::Control);
    map.insert("ALT", VirtualKey::Menu);

    map
}
