use std::fmt;

use multicomplete_core::{DisplaySurface, RenderItem};

/// Result list kept in memory and printed as text
#[derive(Debug, Default)]
pub struct TerminalSurface {
    items: Vec<RenderItem>,
    visible: bool,
    highlighted: Option<usize>,
    class_name: String,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl DisplaySurface for TerminalSurface {
    fn replace_children(&mut self, items: Vec<RenderItem>) {
        self.items = items;
        self.highlighted = None;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_highlighted(&mut self, index: Option<usize>, class_name: &str) {
        self.highlighted = index;
        self.class_name = class_name.to_string();
    }

    fn scroll_into_view(&mut self, index: usize) {
        log::trace!("scroll to child {}", index);
    }
}

impl fmt::Display for TerminalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.visible {
            return write!(f, "  (list hidden)");
        }
        for (i, item) in self.items.iter().enumerate() {
            let shown = item.markup.as_deref().unwrap_or(&item.text);
            if self.highlighted == Some(i) {
                writeln!(f, "> {} [{}]", shown, self.class_name)?;
            } else {
                writeln!(f, "  {}", shown)?;
            }
        }
        Ok(())
    }
}
