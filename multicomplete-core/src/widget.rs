//! The composed widget: one text field, one filter engine, one preview

use log::{debug, warn};

use crate::error::Result;
use crate::filter::{EditContext, FilterEngine};
use crate::preview::{
    ClickTarget, DisplaySurface, Hooks, KeyOutcome, PreviewController, PreviewState, TextField,
};
use crate::types::{Dataset, KeyEvent, Options};

/// Marker-triggered autocomplete attached to one text field.
///
/// The host forwards events:
/// - [`on_field_key_down`](Self::on_field_key_down) for key-down on the field,
///   honouring the returned [`KeyOutcome`]
/// - [`on_key_up`](Self::on_key_up) (or [`on_input`](Self::on_input)) once
///   the field's value reflects the key
/// - [`on_list_key_up`](Self::on_list_key_up) and [`on_click`](Self::on_click)
///   for events on the result list
/// - [`observe_key_down`](Self::observe_key_down) /
///   [`observe_key_up`](Self::observe_key_up) for every key event in the
///   document, to track held modifiers
#[derive(Debug)]
pub struct MultiComplete<F, S> {
    options: Options,
    field: F,
    engine: FilterEngine,
    preview: PreviewController<S>,
    context: Option<EditContext>,
    /// The last field key-down was swallowed by the preview
    last_key_consumed: bool,
}

impl<F: TextField, S: DisplaySurface> MultiComplete<F, S> {
    /// Create the widget. Fails with a configuration error if `dataset` is empty.
    pub fn new(options: Options, dataset: Dataset, field: F, surface: S) -> Result<Self> {
        let engine = FilterEngine::new(dataset, options.fuzzy_filter)?;
        let preview = PreviewController::new(surface, options.active_class.clone());
        debug!(
            "multicomplete ready: markers {}, fuzzy {}",
            engine.matcher().as_str(),
            options.fuzzy_filter
        );

        Ok(Self {
            options,
            field,
            engine,
            preview,
            context: None,
            last_key_consumed: false,
        })
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.preview.set_hooks(hooks);
        self
    }

    /// Replace the dataset between edits
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<()> {
        self.engine.set_dataset(dataset)
    }

    /// Recompute the context from the field and push the results to the preview
    pub fn on_input(&mut self) -> Result<()> {
        let value = self.field.value();
        let cursor = self.field.cursor();
        let context = self.engine.compute_context(&value, cursor);
        let results = context.filtered_results.clone();
        self.context = Some(context.clone());

        self.preview.show_results(results, context).inspect_err(|err| {
            warn!("{}", err);
        })
    }

    /// Key-down on the text field
    pub fn on_field_key_down(&mut self, event: &KeyEvent) -> KeyOutcome {
        self.preview.state_mut().set_input_focus(true);
        let outcome = self.preview.handle_key(event, &mut self.field);
        self.last_key_consumed = outcome.is_consumed();
        outcome
    }

    /// Key-up on the text field. Recomputes unless the matching key-down was
    /// swallowed by the preview.
    pub fn on_key_up(&mut self, _event: &KeyEvent) -> Result<()> {
        if std::mem::take(&mut self.last_key_consumed) {
            return Ok(());
        }
        self.on_input()
    }

    /// Key-up on the result list
    pub fn on_list_key_up(&mut self, event: &KeyEvent) -> KeyOutcome {
        self.preview.state_mut().set_input_focus(false);
        self.preview.handle_key(event, &mut self.field)
    }

    /// Close the list and clear a latched cancel, as if the field was just attached
    pub fn reset(&mut self) {
        self.preview.reset();
        self.context = None;
        self.last_key_consumed = false;
    }

    /// Pointer click on the result list. Returns the inserted text.
    pub fn on_click(&mut self, target: ClickTarget) -> Option<String> {
        self.preview.accept_clicked(target, &mut self.field)
    }

    /// Document-level key-down
    pub fn observe_key_down(&mut self, event: &KeyEvent) {
        self.preview.observe_key_down(event);
    }

    /// Document-level key-up
    pub fn observe_key_up(&mut self, event: &KeyEvent) {
        self.preview.observe_key_up(event);
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        self.preview.surface()
    }

    /// The most recently computed context
    pub fn context(&self) -> Option<&EditContext> {
        self.context.as_ref()
    }

    pub fn state(&self) -> &PreviewState {
        self.preview.state()
    }
}
