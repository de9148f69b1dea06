//! Interfaces the host implements for the text field and the result list

/// The text input the widget reads from and writes completions into.
///
/// Offsets are character offsets.
pub trait TextField {
    /// Current full text
    fn value(&self) -> String;

    /// Current cursor offset
    fn cursor(&self) -> usize;

    fn set_value(&mut self, value: &str);

    fn set_cursor(&mut self, offset: usize);
}

/// The element the result list is rendered into.
///
/// Child indices count every rendered child, including a leading custom entry.
pub trait DisplaySurface {
    /// Replace all children with `items`, in order
    fn replace_children(&mut self, items: Vec<RenderItem>);

    fn show(&mut self);

    fn hide(&mut self);

    /// Mark one child as highlighted (or none) using `class_name`
    fn set_highlighted(&mut self, index: Option<usize>, class_name: &str);

    fn scroll_into_view(&mut self, index: usize);
}

/// One rendered child of the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    /// Plain text of the item; for candidates, the candidate itself
    pub text: String,
    /// Custom markup produced by a template hook
    pub markup: Option<String>,
    /// Whether this child is a selectable candidate
    pub is_candidate: bool,
}

impl RenderItem {
    /// A candidate rendered as plain text
    pub fn candidate(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
            is_candidate: true,
        }
    }

    /// A candidate rendered through a template
    pub fn templated(text: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            markup: Some(markup.into()),
            ..Self::candidate(text)
        }
    }

    /// A non-selectable entry, such as a header inserted before the candidates
    pub fn custom(text: impl Into<String>, markup: Option<String>) -> Self {
        Self {
            text: text.into(),
            markup,
            is_candidate: false,
        }
    }

    /// Whether the item has anything to render
    pub fn is_renderable(&self) -> bool {
        !self.text.trim().is_empty()
            || self.markup.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

/// Where a pointer click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A rendered child, by child index
    Child(usize),
    /// The list container or anything that is not a child
    Container,
}
