//! Marker detection, word boundaries and list filtering
//!
//! This is the half of the widget that reads the text field. It never touches
//! the display surface; its only output is an [`EditContext`].

mod boundary;
mod context;
mod engine;
mod marker;

pub use boundary::locate_word;
pub(crate) use boundary::char_slice;
pub use context::EditContext;
pub use engine::{FilterEngine, filter};
pub use marker::MarkerMatcher;
