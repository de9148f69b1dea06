//! Result of dispatching a key to the preview

/// What the preview did with a key, and what the host must do with the event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Action taken
    pub action: KeyAction,
    /// The host must suppress the key's default behaviour
    pub prevent_default: bool,
    /// The host must stop the event from reaching further listeners
    pub stop_propagation: bool,
}

/// Types of actions the preview can take for a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Key not intercepted; the field handles it normally
    PassThrough,
    /// Highlight moved to the given candidate index
    Navigated(usize),
    /// A completion was written to the field (the inserted text)
    Accepted(String),
    /// The list was dismissed with Escape
    Cancelled,
    /// The list was closed without a completion
    Closed,
}

impl KeyOutcome {
    /// Key not intercepted
    pub fn pass_through() -> Self {
        Self {
            action: KeyAction::PassThrough,
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// Key handled without suppressing the default
    pub fn observed(action: KeyAction) -> Self {
        Self {
            action,
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// Key consumed by the preview
    pub fn consumed(action: KeyAction) -> Self {
        Self {
            action,
            prevent_default: true,
            stop_propagation: false,
        }
    }

    /// Also stop propagation
    pub fn and_stop(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Whether the host should treat the key as swallowed
    pub fn is_consumed(&self) -> bool {
        self.prevent_default
    }
}
