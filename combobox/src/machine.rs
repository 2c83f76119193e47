//! Interaction state machine.
//!
//! [`transition`] is a pure function from the current [`ControlState`] and an
//! event to an [`Outcome`]: the next state, an optional selection command and
//! the reason to report to the host. Applying the outcome is the controller's
//! job (see [`crate::Combobox`]).

use crate::rows::{RowMapping, RowTarget};

/// Open/highlight/query state of a combobox.
///
/// Invariant: `highlighted_index` is `None` whenever `is_open` is false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlState {
    pub is_open: bool,
    /// Highlighted row, counting the "select all" row when present.
    pub highlighted_index: Option<usize>,
    pub input_value: String,
}

impl ControlState {
    pub fn new(is_open: bool) -> Self {
        Self {
            is_open,
            highlighted_index: None,
            input_value: String::new(),
        }
    }

    fn closed(&self) -> Self {
        Self {
            is_open: false,
            highlighted_index: None,
            input_value: self.input_value.clone(),
        }
    }

    fn highlighted(&self, index: Option<usize>) -> Self {
        Self {
            highlighted_index: index,
            ..self.clone()
        }
    }
}

/// Interaction events fed by the presentation layer.
///
/// Row indices count the leading "select all" row when the combobox has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// Pointer click on a row.
    ItemClick { row: usize },
    /// Enter key: activates the highlighted row.
    Enter,
    Escape,
    /// Pointer released outside the combobox.
    OuterPointerUp,
    /// Focus moved outside the combobox.
    Blur,
    ArrowDown,
    ArrowUp,
    Home,
    End,
    /// Pointer moved onto a row.
    ItemPointerEnter { row: usize },
    ToggleButtonClick,
    /// Space pressed while the toggle button is focused.
    ToggleButtonSpace,
    /// The query input now holds this text.
    InputChange(String),
    /// The "clear selection" badge was activated.
    ClearSelection,
    /// The "clear query" control was activated.
    ClearInput,
}

/// Why the host is being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    ItemActivated,
    ToggleAll,
    KeyDownEscape,
    OuterClick,
    Blur,
    ToggleButton,
    InputChange,
    ClearSelection,
    ClearInput,
    /// Direct call to [`crate::Combobox::toggle_item`].
    ItemToggled,
    /// Direct call to [`crate::Combobox::select_item`].
    ItemSelected,
}

impl ChangeReason {
    /// Reasons reported even when nothing observable changed.
    ///
    /// A toggle-button press always notifies, including when the focused
    /// query input keeps the menu open.
    pub fn is_forced(self) -> bool {
        matches!(self, ChangeReason::ToggleButton)
    }
}

/// Selection mutation requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Toggle (multi) or select (single) the item at this index in `items`.
    Activate(usize),
    ToggleAll,
    Clear,
}

/// Facts about the current render the machine needs to decide a transition.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    /// Visible sequence as indices into the item set.
    pub visible: &'a [usize],
    /// Row mapping; a leading synthetic row is the "select all" row.
    pub rows: RowMapping,
    /// Whether the combobox has a query input at all.
    pub has_input: bool,
    /// Whether the query input currently holds focus.
    pub input_focused: bool,
    pub disabled: bool,
}

impl TransitionContext<'_> {
    pub fn row_count(&self) -> usize {
        self.rows.row_count(self.visible.len())
    }
}

/// Result of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: ControlState,
    pub command: Option<SelectionCommand>,
    /// `Some` when the transition is reportable to the host.
    pub reason: Option<ChangeReason>,
}

impl Outcome {
    fn ignored(state: &ControlState) -> Self {
        Self {
            state: state.clone(),
            command: None,
            reason: None,
        }
    }

    fn silent(state: ControlState) -> Self {
        Self {
            state,
            command: None,
            reason: None,
        }
    }

    fn reported(state: ControlState, reason: ChangeReason) -> Self {
        Self {
            state,
            command: None,
            reason: Some(reason),
        }
    }
}

/// Compute the outcome of `event` in `state`.
pub fn transition(
    state: &ControlState,
    event: &ComboboxEvent,
    ctx: &TransitionContext<'_>,
) -> Outcome {
    if ctx.disabled {
        return Outcome::ignored(state);
    }

    match event {
        ComboboxEvent::ItemClick { row } => activate(state, *row, ctx),
        ComboboxEvent::Enter => match (state.is_open, state.highlighted_index) {
            (true, Some(row)) => activate(state, row, ctx),
            _ => Outcome::ignored(state),
        },
        ComboboxEvent::Escape if state.is_open => {
            Outcome::reported(state.closed(), ChangeReason::KeyDownEscape)
        }
        ComboboxEvent::OuterPointerUp if state.is_open => {
            Outcome::reported(state.closed(), ChangeReason::OuterClick)
        }
        ComboboxEvent::Blur if state.is_open => {
            Outcome::reported(state.closed(), ChangeReason::Blur)
        }
        ComboboxEvent::ArrowDown
        | ComboboxEvent::ArrowUp
        | ComboboxEvent::Home
        | ComboboxEvent::End
            if state.is_open =>
        {
            let next = move_highlight(state.highlighted_index, event, ctx.row_count());
            Outcome::silent(state.highlighted(next))
        }
        ComboboxEvent::ItemPointerEnter { row } if state.is_open && *row < ctx.row_count() => {
            Outcome::silent(state.highlighted(Some(*row)))
        }
        ComboboxEvent::ToggleButtonClick | ComboboxEvent::ToggleButtonSpace => {
            let mut next_is_open = !state.is_open;
            if !next_is_open && ctx.input_focused {
                // The toggle event bubbled up from the focused query input
                next_is_open = true;
            }
            let next = if next_is_open == state.is_open {
                state.clone()
            } else {
                ControlState {
                    is_open: next_is_open,
                    highlighted_index: None,
                    input_value: state.input_value.clone(),
                }
            };
            Outcome::reported(next, ChangeReason::ToggleButton)
        }
        ComboboxEvent::InputChange(value) if ctx.has_input && *value != state.input_value => {
            let next = ControlState {
                is_open: state.is_open,
                highlighted_index: None,
                input_value: value.clone(),
            };
            Outcome::reported(next, ChangeReason::InputChange)
        }
        ComboboxEvent::ClearInput if ctx.has_input && !state.input_value.is_empty() => {
            let next = ControlState {
                is_open: state.is_open,
                highlighted_index: None,
                input_value: String::new(),
            };
            Outcome::reported(next, ChangeReason::ClearInput)
        }
        ComboboxEvent::ClearSelection => Outcome {
            state: state.clone(),
            command: Some(SelectionCommand::Clear),
            reason: Some(ChangeReason::ClearSelection),
        },
        _ => Outcome::ignored(state),
    }
}

fn activate(state: &ControlState, row: usize, ctx: &TransitionContext<'_>) -> Outcome {
    let command = match ctx.rows.to_logical(row) {
        // The "select all" row is only rendered while the menu is open
        RowTarget::Synthetic(_) if state.is_open => {
            Some((SelectionCommand::ToggleAll, ChangeReason::ToggleAll))
        }
        RowTarget::Synthetic(_) => None,
        RowTarget::Item(logical) => ctx
            .visible
            .get(logical)
            .map(|&index| (SelectionCommand::Activate(index), ChangeReason::ItemActivated)),
    };

    match command {
        Some((command, reason)) => Outcome {
            state: state.closed(),
            command: Some(command),
            reason: Some(reason),
        },
        None => Outcome::ignored(state),
    }
}

/// Clamped highlight movement, no wraparound.
fn move_highlight(current: Option<usize>, event: &ComboboxEvent, row_count: usize) -> Option<usize> {
    if row_count == 0 {
        return None;
    }
    let last = row_count - 1;
    let current = current.map(|index| index.min(last));

    let next = match (event, current) {
        (ComboboxEvent::ArrowDown, None) => 0,
        (ComboboxEvent::ArrowDown, Some(index)) => (index + 1).min(last),
        (ComboboxEvent::ArrowUp, None) => last,
        (ComboboxEvent::ArrowUp, Some(index)) => index.saturating_sub(1),
        (ComboboxEvent::Home, _) => 0,
        (ComboboxEvent::End, _) => last,
        (_, current) => return current,
    };
    Some(next)
}
