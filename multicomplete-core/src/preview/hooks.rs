//! Optional callbacks that customise rendering and replacement

use std::fmt;

use super::RenderItem;

type BeforeReplaceFn = dyn Fn(Option<char>, &str) -> String;
type ActiveTextFn = dyn Fn(&RenderItem) -> String;
type TemplateFn = dyn Fn(Option<char>, &str) -> String;
type InsertFirstFn = dyn Fn() -> RenderItem;

/// Optional hooks. Each is only invoked when set.
#[derive(Default)]
pub struct Hooks {
    before_replace: Option<Box<BeforeReplaceFn>>,
    get_active_text: Option<Box<ActiveTextFn>>,
    output_template: Option<Box<TemplateFn>>,
    insert_first: Option<Box<InsertFirstFn>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the text written over the current word.
    /// Receives the active marker and the completion text; the returned string
    /// is inserted as-is, so it must include the marker if it should stay.
    pub fn before_replace(mut self, f: impl Fn(Option<char>, &str) -> String + 'static) -> Self {
        self.before_replace = Some(Box::new(f));
        self
    }

    /// Extract the completion text from a rendered item.
    /// Without it, the item's raw text is used.
    pub fn get_active_text(mut self, f: impl Fn(&RenderItem) -> String + 'static) -> Self {
        self.get_active_text = Some(Box::new(f));
        self
    }

    /// Produce markup for a candidate. Without it, candidates render as plain text.
    pub fn output_template(mut self, f: impl Fn(Option<char>, &str) -> String + 'static) -> Self {
        self.output_template = Some(Box::new(f));
        self
    }

    /// Produce an entry placed before the candidates on every render
    pub fn insert_first(mut self, f: impl Fn() -> RenderItem + 'static) -> Self {
        self.insert_first = Some(Box::new(f));
        self
    }

    /// Text spliced over the current word: the hook's output, or the marker
    /// followed by `text`
    pub(crate) fn replacement(&self, marker: Option<char>, text: &str) -> String {
        match &self.before_replace {
            Some(f) => f(marker, text),
            None => marker.into_iter().chain(text.chars()).collect(),
        }
    }

    pub(crate) fn active_text(&self, item: &RenderItem) -> String {
        match &self.get_active_text {
            Some(f) => f(item),
            None => item.text.clone(),
        }
    }

    pub(crate) fn template(&self, marker: Option<char>, candidate: &str) -> Option<String> {
        self.output_template.as_ref().map(|f| f(marker, candidate))
    }

    pub(crate) fn leading_item(&self) -> Option<RenderItem> {
        self.insert_first.as_ref().map(|f| f())
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_replace", &self.before_replace.is_some())
            .field("get_active_text", &self.get_active_text.is_some())
            .field("output_template", &self.output_template.is_some())
            .field("insert_first", &self.insert_first.is_some())
            .finish()
    }
}
