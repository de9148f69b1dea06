//! Preview state management

/// Where the preview state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewPhase {
    /// Nothing shown, keys pass through
    #[default]
    Idle,
    /// A list is visible and navigation keys are intercepted
    Previewing,
    /// The user dismissed the list; results stay hidden until a space is typed
    Cancelled,
}

/// Manages the state of the preview list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    phase: PreviewPhase,
    /// Candidate index, only set while previewing
    highlighted_index: Option<usize>,
    input_has_focus: bool,
}

impl PreviewState {
    /// Creates a new idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the state completely, including a latched cancel
    pub fn reset(&mut self) {
        self.phase = PreviewPhase::Idle;
        self.highlighted_index = None;
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    pub fn is_previewing(&self) -> bool {
        self.phase == PreviewPhase::Previewing
    }

    pub fn has_cancelled(&self) -> bool {
        self.phase == PreviewPhase::Cancelled
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    pub fn input_has_focus(&self) -> bool {
        self.input_has_focus
    }

    pub(crate) fn set_input_focus(&mut self, focused: bool) {
        self.input_has_focus = focused;
    }

    /// Enter previewing with `index` highlighted
    pub(crate) fn preview(&mut self, index: usize) {
        self.phase = PreviewPhase::Previewing;
        self.highlighted_index = Some(index);
    }

    /// Leave previewing. A latched cancel is kept.
    pub(crate) fn stop_previewing(&mut self) {
        if self.phase == PreviewPhase::Previewing {
            self.phase = PreviewPhase::Idle;
        }
        self.highlighted_index = None;
    }

    pub(crate) fn cancel(&mut self) {
        self.phase = PreviewPhase::Cancelled;
        self.highlighted_index = None;
    }

    /// Clears a latched cancel
    pub(crate) fn clear_cancelled(&mut self) {
        if self.phase == PreviewPhase::Cancelled {
            self.phase = PreviewPhase::Idle;
        }
    }
}
