//! Key stroke parsing and representation

use crate::error::{Error, Result};
use crate::types::{KeyEvent, ModifierState, VirtualKey, create_key_name_map};

/// A parsed key stroke: a named key or a printable character, plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    /// A named key such as `DOWN` or `ENTER`
    pub key: Option<VirtualKey>,
    /// A printable character typed by the stroke
    pub character: Option<char>,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyStroke {
    /// Parse a key stroke like "down", "CTRL+RIGHT", "shift tab" or "@"
    ///
    /// # Examples
    /// ```
    /// use multicomplete_core::{KeyStroke, VirtualKey};
    ///
    /// let stroke = KeyStroke::parse("ctrl+right").unwrap();
    /// assert!(stroke.ctrl);
    /// assert_eq!(stroke.key, Some(VirtualKey::Right));
    /// ```
    pub fn parse(stroke: &str) -> Result<Self> {
        if stroke.trim().is_empty() {
            // A lone space is the space key
            if stroke == " " {
                return Ok(Self::from_char(' '));
            }
            return Err(Error::ParseError("Empty key stroke".to_string()));
        }

        // A single character is typed as-is, even '+'
        let trimmed = stroke.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Self::from_char(ch));
        }

        let parts: Vec<&str> = trimmed
            .split(|c| c == '+' || c == ' ')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return Err(Error::ParseError(format!("No key in stroke {:?}", stroke)));
        }

        let names = create_key_name_map();
        let mut ctrl = false;
        let mut alt = false;
        let mut shift = false;
        let mut main: Option<KeyStroke> = None;
        let last = parts.len() - 1;

        for (i, part) in parts.iter().enumerate() {
            let upper = part.to_uppercase();
            // A modifier name in last position is the modifier key itself
            if i != last {
                match upper.as_str() {
                    "CTRL" | "CONTROL" => {
                        ctrl = true;
                        continue;
                    }
                    "ALT" | "OPTION" => {
                        alt = true;
                        continue;
                    }
                    "SHIFT" => {
                        shift = true;
                        continue;
                    }
                    _ => {}
                }
            }

            if main.is_some() {
                return Err(Error::ParseError(format!("Multiple keys specified: {:?}", part)));
            }
            let mut chars = part.chars();
            main = match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Self::from_char(ch)),
                _ => match names.get(upper.as_str()) {
                    Some(&key) => Some(Self::from_key(key)),
                    None => return Err(Error::ParseError(format!("Unknown key: {}", part))),
                },
            };
        }

        let Some(main) = main else {
            return Err(Error::ParseError(format!("No key specified in {:?}", stroke)));
        };

        Ok(Self {
            ctrl,
            alt,
            shift,
            ..main
        })
    }

    pub fn from_key(key: VirtualKey) -> Self {
        Self {
            key: Some(key),
            character: None,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn from_char(ch: char) -> Self {
        Self {
            key: None,
            character: Some(ch),
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn modifiers(&self) -> ModifierState {
        ModifierState::new(self.shift, self.ctrl, self.alt)
    }

    /// The key event a host would deliver for this stroke
    pub fn to_event(&self) -> KeyEvent {
        let event = match (self.key, self.character) {
            (Some(key), _) => KeyEvent::from_vk(key),
            (None, Some(ch)) => KeyEvent::from_char(ch),
            (None, None) => KeyEvent::new(0, ModifierState::default(), None),
        };
        event.with_modifiers(self.modifiers())
    }

    /// Parse a comma-separated script of strokes.
    ///
    /// A `type:<text>` entry expands to one stroke per character of `<text>`.
    /// `,` itself is written as `comma`.
    pub fn parse_script(script: &str) -> Result<Vec<Self>> {
        let mut strokes = Vec::new();
        for entry in script.split(',') {
            if let Some(text) = entry.trim_start().strip_prefix("type:") {
                strokes.extend(text.chars().map(Self::from_char));
            } else if entry.trim().eq_ignore_ascii_case("comma") {
                strokes.push(Self::from_char(','));
            } else if entry.trim().is_empty() {
                continue;
            } else {
                strokes.push(Self::parse(entry.trim())?);
            }
        }
        Ok(strokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        let stroke = KeyStroke::parse("down").unwrap();
        assert_eq!(stroke.key, Some(VirtualKey::Down));
        assert_eq!(stroke.ctrl, false);

        assert_eq!(KeyStroke::parse("ENTER").unwrap().key, Some(VirtualKey::Return));
        assert_eq!(KeyStroke::parse("esc").unwrap().key, Some(VirtualKey::Escape));
        assert_eq!(KeyStroke::parse("Tab").unwrap().key, Some(VirtualKey::Tab));
    }

    #[test]
    fn test_parse_modifiers() {
        let stroke = KeyStroke::parse("CTRL+SHIFT+RIGHT").unwrap();
        assert_eq!(stroke.key, Some(VirtualKey::Right));
        assert_eq!(stroke.ctrl, true);
        assert_eq!(stroke.shift, true);
        assert_eq!(stroke.alt, false);

        let stroke = KeyStroke::parse("shift tab").unwrap();
        assert_eq!(stroke.key, Some(VirtualKey::Tab));
        assert_eq!(stroke.shift, true);
    }

    #[test]
    fn test_parse_characters() {
        assert_eq!(KeyStroke::parse("@").unwrap().character, Some('@'));
        assert_eq!(KeyStroke::parse("+").unwrap().character, Some('+'));
        assert_eq!(KeyStroke::parse(" ").unwrap().character, Some(' '));

        let stroke = KeyStroke::parse("ctrl+v").unwrap();
        assert_eq!(stroke.character, Some('v'));
        assert!(stroke.ctrl);
    }

    #[test]
    fn test_lone_modifier_is_a_key() {
        let stroke = KeyStroke::parse("ctrl").unwrap();
        assert_eq!(stroke.key, Some(VirtualKey::Control));
        assert_eq!(stroke.ctrl, false);
    }

    #[test]
    fn test_to_event() {
        let event = KeyStroke::parse("ctrl+right").unwrap().to_event();
        assert_eq!(event.virtual_key(), Some(VirtualKey::Right));
        assert!(event.modifiers.ctrl);

        let event = KeyStroke::parse("a").unwrap().to_event();
        assert_eq!(event.character, Some('a'));
        assert_eq!(event.virtual_key(), None);
    }

    #[test]
    fn test_parse_script() {
        let strokes = KeyStroke::parse_script("type:@al, down, enter").unwrap();
        assert_eq!(strokes.len(), 5);
        assert_eq!(strokes[0].character, Some('@'));
        assert_eq!(strokes[3].key, Some(VirtualKey::Down));
        assert_eq!(strokes[4].key, Some(VirtualKey::Return));

        let strokes = KeyStroke::parse_script("type:a b,comma").unwrap();
        assert_eq!(strokes.len(), 4);
        assert_eq!(strokes[1].character, Some(' '));
        assert_eq!(strokes[3].character, Some(','));
    }

    #[test]
    fn test_parse_errors() {
        assert!(KeyStroke::parse("").is_err());
        assert!(KeyStroke::parse("ctrl+unknown").is_err());
        assert!(KeyStroke::parse("ctrl+a+b").is_err());
        assert!(KeyStroke::parse_script("down, bogus").is_err());
    }
}
