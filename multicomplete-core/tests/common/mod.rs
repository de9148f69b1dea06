#![allow(dead_code)]

use multicomplete_core::{
    Dataset, DisplaySurface, KeyEvent, KeyOutcome, KeyStroke, MemoryField, MultiComplete, Options,
    RenderItem, TextField, VirtualKey,
};

/// A display surface that records what it was told to show
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub items: Vec<RenderItem>,
    pub visible: bool,
    pub highlighted: Option<usize>,
    pub highlight_class: String,
    pub scrolled_to: Vec<usize>,
    pub renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every child, in order
    pub fn texts(&self) -> Vec<String> {
        self.items.iter().map(|item| item.text.clone()).collect()
    }

    /// Text of the highlighted child
    pub fn highlighted_text(&self) -> Option<String> {
        self.highlighted
            .and_then(|index| self.items.get(index))
            .map(|item| item.text.clone())
    }
}

impl DisplaySurface for RecordingSurface {
    fn replace_children(&mut self, items: Vec<RenderItem>) {
        self.items = items;
        self.renders += 1;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_highlighted(&mut self, index: Option<usize>, class_name: &str) {
        self.highlighted = index;
        self.highlight_class = class_name.to_string();
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.scrolled_to.push(index);
    }
}

pub type TestWidget = MultiComplete<MemoryField, RecordingSurface>;

/// The `@` people list used throughout the tests
pub fn people() -> Dataset {
    Dataset::new().with_list('@', ["alice", "albert", "bob"])
}

/// Widget in prefix mode over `dataset`, with an empty field
pub fn prefix_widget(dataset: Dataset) -> TestWidget {
    MultiComplete::new(Options::prefix(), dataset, MemoryField::new(), RecordingSurface::new())
        .unwrap()
}

/// Widget in fuzzy mode over `dataset`, with an empty field
pub fn fuzzy_widget(dataset: Dataset) -> TestWidget {
    MultiComplete::new(Options::default(), dataset, MemoryField::new(), RecordingSurface::new())
        .unwrap()
}

/// Deliver one key the way a browser would: document key-down, field
/// key-down, the field's default action unless suppressed, document key-up,
/// field key-up.
pub fn press_event(widget: &mut TestWidget, event: KeyEvent) -> KeyOutcome {
    widget.observe_key_down(&event);
    let outcome = widget.on_field_key_down(&event);
    if !outcome.is_consumed() {
        widget.field_mut().apply_key(&event);
    }
    widget.observe_key_up(&event);
    // Render contract errors are reported through the return value; tests
    // that care call on_input directly.
    let _ = widget.on_key_up(&event);
    outcome
}

/// Press a key described by a stroke string such as "down" or "ctrl+right"
pub fn press(widget: &mut TestWidget, stroke: &str) -> KeyOutcome {
    press_event(widget, KeyStroke::parse(stroke).unwrap().to_event())
}

pub fn press_vk(widget: &mut TestWidget, key: VirtualKey) -> KeyOutcome {
    press_event(widget, KeyEvent::from_vk(key))
}

/// Type `text` one character at a time
pub fn type_text(widget: &mut TestWidget, text: &str) {
    for ch in text.chars() {
        press_event(widget, KeyEvent::from_char(ch));
    }
}

pub fn field_value(widget: &TestWidget) -> String {
    widget.field().value()
}

pub fn field_cursor(widget: &TestWidget) -> usize {
    widget.field().cursor()
}
