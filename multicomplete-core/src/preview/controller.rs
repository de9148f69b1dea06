use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::filter::{EditContext, char_slice};
use crate::types::{KeyEvent, ModifierTracker, VirtualKey};
use super::{
    ClickTarget, DisplaySurface, Hooks, KeyAction, KeyOutcome, PreviewState, RenderItem, TextField,
};

/// Appended after every completion
const SEPARATOR: char = ' ';

/// Shows filtered results on a [`DisplaySurface`], handles navigation keys and
/// clicks, and writes the chosen completion back into a [`TextField`].
#[derive(Debug)]
pub struct PreviewController<S> {
    surface: S,
    hooks: Hooks,
    active_class: String,
    state: PreviewState,
    modifiers: ModifierTracker,
    /// Context of the list currently shown; replacements splice into its `val`
    context: Option<EditContext>,
    /// Rendered children, leading custom entry included
    items: Vec<RenderItem>,
    /// Number of non-candidate children before the first candidate
    leading: usize,
}

impl<S: DisplaySurface> PreviewController<S> {
    pub fn new(surface: S, active_class: impl Into<String>) -> Self {
        Self {
            surface,
            hooks: Hooks::default(),
            active_class: active_class.into(),
            state: PreviewState::new(),
            modifiers: ModifierTracker::new(),
            context: None,
            items: Vec::new(),
            leading: 0,
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn set_hooks(&mut self, hooks: Hooks) {
        self.hooks = hooks;
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut PreviewState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn context(&self) -> Option<&EditContext> {
        self.context.as_ref()
    }

    pub fn modifiers(&self) -> &ModifierTracker {
        &self.modifiers
    }

    /// Every rendered child, in display order
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    /// The rendered candidates, without the leading custom entry
    pub fn candidates(&self) -> &[RenderItem] {
        &self.items[self.leading..]
    }

    /// The currently highlighted candidate
    pub fn highlighted(&self) -> Option<&RenderItem> {
        self.state
            .highlighted_index()
            .and_then(|index| self.candidates().get(index))
    }

    /// Document-level key-down, for modifier tracking
    pub fn observe_key_down(&mut self, event: &KeyEvent) {
        self.modifiers.key_down(event);
    }

    /// Document-level key-up, for modifier tracking
    pub fn observe_key_up(&mut self, event: &KeyEvent) {
        self.modifiers.key_up(event);
    }

    /// Display `results` for `context`.
    ///
    /// Empty results, or a cancelled preview, clear the display instead. A hook
    /// that produces an unusable node is reported as
    /// [`Error::RenderContract`] after the rest of the list has been rendered
    /// without it.
    pub fn show_results(&mut self, results: Vec<String>, context: EditContext) -> Result<()> {
        if self.state.has_cancelled() {
            debug!("preview cancelled, suppressing {} results", results.len());
            self.clear();
            return Ok(());
        }
        if results.is_empty() {
            self.clear();
            return Ok(());
        }

        let marker = context.active_marker;
        let mut contract_error = None;
        let mut items = Vec::with_capacity(results.len() + 1);

        if let Some(item) = self.hooks.leading_item() {
            if item.is_renderable() {
                items.push(item);
            } else {
                contract_error = Some(Error::RenderContract(
                    "insert_first returned a node with nothing to render".to_string(),
                ));
            }
        }
        let leading = items.len();

        for candidate in results {
            let item = match self.hooks.template(marker, &candidate) {
                Some(markup) if !markup.trim().is_empty() => {
                    RenderItem::templated(candidate, markup)
                }
                Some(_) => {
                    if contract_error.is_none() {
                        contract_error = Some(Error::RenderContract(format!(
                            "output_template returned no markup for {:?}",
                            candidate
                        )));
                    }
                    RenderItem::candidate(candidate)
                }
                None => RenderItem::candidate(candidate),
            };
            items.push(item);
        }

        trace!("showing {} items ({} leading)", items.len(), leading);
        self.surface.replace_children(items.clone());
        self.items = items;
        self.leading = leading;
        self.context = Some(context);
        self.highlight(0);
        self.surface.show();

        match contract_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Empty and hide the list
    pub fn clear(&mut self) {
        self.surface.replace_children(Vec::new());
        self.surface.set_highlighted(None, &self.active_class);
        self.surface.hide();
        self.items.clear();
        self.leading = 0;
        self.state.stop_previewing();
    }

    /// Close the list and forget the context, clearing a latched cancel
    pub fn reset(&mut self) {
        self.clear();
        self.state.reset();
        self.context = None;
    }

    /// Move the highlight by `delta`, wrapping at both ends, and preview the
    /// newly highlighted completion in the field. Returns the new index.
    pub fn navigate<F: TextField + ?Sized>(
        &mut self,
        delta: isize,
        field: &mut F,
    ) -> Option<usize> {
        if !self.state.is_previewing() {
            return None;
        }
        let len = self.candidates().len();
        let current = self.state.highlighted_index()?;
        if len == 0 {
            return None;
        }

        let len = len as isize;
        let next = (current as isize + delta.rem_euclid(len)).rem_euclid(len) as usize;
        self.highlight(next);
        self.accept_highlighted(field);
        Some(next)
    }

    /// Write the highlighted completion into the field. The list stays open.
    /// Returns the inserted text.
    pub fn accept_highlighted<F: TextField + ?Sized>(&mut self, field: &mut F) -> Option<String> {
        let index = self.state.highlighted_index()?;
        let child = self.leading + index;
        self.surface.scroll_into_view(child);
        let text = self.hooks.active_text(self.items.get(child)?);
        self.replace_in_place(&text, field)
    }

    /// Write the clicked completion into the field and close the list.
    /// Clicks that do not land on a candidate are ignored.
    pub fn accept_clicked<F: TextField + ?Sized>(
        &mut self,
        target: ClickTarget,
        field: &mut F,
    ) -> Option<String> {
        let ClickTarget::Child(child) = target else {
            trace!("click outside the list items ignored");
            return None;
        };
        let text = match self.items.get(child) {
            Some(item) if item.is_candidate => self.hooks.active_text(item),
            _ => {
                debug!("click on child {} is not a candidate, ignored", child);
                return None;
            }
        };

        let inserted = self.replace_in_place(&text, field);
        self.clear();
        inserted
    }

    /// Replace the current word with `text`, add a separator, and put the
    /// cursor after the separator.
    ///
    /// Without a `before_replace` hook the marker is kept in front of `text`;
    /// with one, exactly the hook's output is inserted. The splice is always
    /// made into the value captured with the context, so successive calls
    /// replace each other. Returns the inserted text.
    pub fn replace_in_place<F: TextField + ?Sized>(
        &mut self,
        text: &str,
        field: &mut F,
    ) -> Option<String> {
        let Some(context) = self.context.as_ref() else {
            warn!("no edit context to replace into");
            return None;
        };

        let inserted = self.hooks.replacement(context.active_marker, text);

        let val_len = context.val.chars().count();
        let mut value = char_slice(&context.val, 0, context.start);
        value.push_str(&inserted);
        value.push(SEPARATOR);
        value.push_str(&char_slice(&context.val, context.end, val_len));
        let cursor = context.start + inserted.chars().count() + 1;

        trace!(
            "replacing [{}, {}) with {:?}, cursor -> {}",
            context.start,
            context.end,
            inserted,
            cursor
        );
        field.set_value(&value);
        field.set_cursor(cursor);
        self.state.set_input_focus(true);
        Some(inserted)
    }

    /// Dispatch a key from the focused field or the result list
    pub fn handle_key<F: TextField + ?Sized>(
        &mut self,
        event: &KeyEvent,
        field: &mut F,
    ) -> KeyOutcome {
        let previewing = self.state.is_previewing();

        match event.virtual_key() {
            Some(VirtualKey::Up) if previewing => self.navigate_outcome(-1, field),
            Some(VirtualKey::Down) if previewing && self.candidates().len() > 1 => {
                self.navigate_outcome(1, field)
            }
            Some(VirtualKey::Down | VirtualKey::Tab) if previewing => {
                self.accept_and_close(field).and_stop()
            }
            Some(VirtualKey::Right) if self.modifiers.is_modified(event) => {
                KeyOutcome::pass_through()
            }
            Some(VirtualKey::Right) if previewing => self.accept_and_close(field),
            Some(VirtualKey::Return) if previewing => self.accept_and_close(field).and_stop(),
            Some(VirtualKey::Escape) if previewing => {
                self.clear();
                self.state.cancel();
                debug!("preview cancelled");
                KeyOutcome::consumed(KeyAction::Cancelled)
            }
            Some(VirtualKey::Space) => {
                self.state.clear_cancelled();
                self.clear();
                KeyOutcome::observed(KeyAction::Closed)
            }
            _ if previewing => {
                self.state.stop_previewing();
                KeyOutcome::pass_through()
            }
            _ => KeyOutcome::pass_through(),
        }
    }

    fn navigate_outcome<F: TextField + ?Sized>(
        &mut self,
        delta: isize,
        field: &mut F,
    ) -> KeyOutcome {
        match self.navigate(delta, field) {
            Some(index) => KeyOutcome::consumed(KeyAction::Navigated(index)),
            None => KeyOutcome::pass_through(),
        }
    }

    fn accept_and_close<F: TextField + ?Sized>(&mut self, field: &mut F) -> KeyOutcome {
        let inserted = self.accept_highlighted(field);
        self.clear();
        match inserted {
            Some(text) => KeyOutcome::consumed(KeyAction::Accepted(text)),
            None => KeyOutcome::consumed(KeyAction::Closed),
        }
    }

    /// Highlight candidate `index`, keeping state and surface in step
    fn highlight(&mut self, index: usize) {
        self.state.preview(index);
        self.surface
            .set_highlighted(Some(self.leading + index), &self.active_class);
    }
}
