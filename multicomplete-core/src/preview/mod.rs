//! Preview list - navigation, selection and in-place replacement
//!
//! The controller only depends on the [`EditContext`](crate::EditContext) and
//! results pushed into it, never on how they were computed.

mod controller;
mod hooks;
mod memory;
mod output;
mod state;
mod surface;

pub use controller::PreviewController;
pub use hooks::Hooks;
pub use memory::MemoryField;
pub use output::{KeyAction, KeyOutcome};
pub use state::{PreviewPhase, PreviewState};
pub use surface::{ClickTarget, DisplaySurface, RenderItem, TextField};
