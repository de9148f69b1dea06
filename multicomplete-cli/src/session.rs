use log::{debug, warn};
use multicomplete_core::{
    Dataset, KeyAction, KeyStroke, MemoryField, MultiComplete, Options, TextField,
};

use crate::surface::TerminalSurface;

pub type Widget = MultiComplete<MemoryField, TerminalSurface>;

/// Drives a widget the way a browser delivers key events
pub struct Session {
    widget: Widget,
}

impl Session {
    pub fn new(
        options: Options,
        dataset: Dataset,
        text: &str,
        cursor: Option<usize>,
    ) -> anyhow::Result<Self> {
        let mut field = MemoryField::with_text(text);
        if let Some(cursor) = cursor {
            field.set_cursor(cursor);
        }
        let widget = MultiComplete::new(options, dataset, field, TerminalSurface::new())?;
        Ok(Self { widget })
    }

    /// Deliver one stroke and return what the widget did with it
    pub fn press(&mut self, stroke: &KeyStroke) -> KeyAction {
        let event = stroke.to_event();
        self.widget.observe_key_down(&event);
        let outcome = self.widget.on_field_key_down(&event);
        if !outcome.is_consumed() {
            self.widget.field_mut().apply_key(&event);
        }
        self.widget.observe_key_up(&event);
        if let Err(err) = self.widget.on_key_up(&event) {
            // Already logged by the widget; keep replaying
            debug!("continuing after {}", err);
        }
        outcome.action
    }

    /// Replay every stroke, logging the actions that changed the field
    pub fn replay(&mut self, strokes: &[KeyStroke]) {
        for stroke in strokes {
            match self.press(stroke) {
                KeyAction::PassThrough => {}
                KeyAction::Accepted(text) => debug!("accepted {:?}", text),
                KeyAction::Navigated(index) => debug!("previewing item {}", index),
                KeyAction::Cancelled => debug!("preview cancelled"),
                KeyAction::Closed => debug!("preview closed"),
            }
        }
    }

    /// Recompute from the current field without a key event
    pub fn refresh(&mut self) {
        if let Err(err) = self.widget.on_input() {
            warn!("initial render: {}", err);
        }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }
}
