pub mod types;
pub mod error;
pub mod filter;
pub mod preview;
pub mod keystroke;
pub mod widget;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use filter::{EditContext, FilterEngine, MarkerMatcher, filter, locate_word};
pub use preview::{
    ClickTarget, DisplaySurface, Hooks, KeyAction, KeyOutcome, MemoryField, PreviewController,
    PreviewPhase, PreviewState, RenderItem, TextField,
};
pub use keystroke::KeyStroke;
pub use widget::MultiComplete;
