use serde::Deserialize;

/// Widget options.
///
/// `fuzzy_filter` defaults to substring matching; set it to `false` for
/// prefix matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub fuzzy_filter: bool,
    /// Class name given to the highlighted item; passed through to the surface
    pub active_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fuzzy_filter: true,
            active_class: "active".to_string(),
        }
    }
}

impl Options {
    pub fn prefix() -> Self {
        Self {
            fuzzy_filter: false,
            ..Self::default()
        }
    }
}
