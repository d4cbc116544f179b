//! The searchable select control.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use crate::listener::{ListenerGuard, PointerListeners};
use crate::option::{OptionValue, SelectOption};
use crate::state::SelectState;
use crate::value::{SelectMode, SelectValue};

/// Placeholder shown when nothing is selected and none was configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Change callback, fired once per effective selection or clear.
type ChangeFn = Box<dyn FnMut(&SelectValue)>;

/// Behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectFlags {
    /// Show a search box in the overlay.
    pub searchable: bool,
    /// Offer a clear action while something is selected.
    pub clearable: bool,
    /// Ignore all interaction.
    pub disabled: bool,
}

/// One row of the rendered option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleOption {
    /// Value committed when the option is chosen.
    pub value: OptionValue,
    /// Display text.
    pub label: String,
    /// Secondary text shown beside the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shown but not selectable.
    pub disabled: bool,
    /// Part of the current value.
    pub selected: bool,
}

/// Snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    /// Text shown in the closed control.
    pub label: String,
    /// `true` when `label` is the placeholder.
    pub is_placeholder: bool,
    /// Whether the option overlay is showing.
    pub is_open: bool,
    /// Text typed into the search box.
    pub search_term: String,
    /// Options after applying the search term. Empty while closed.
    pub options: Vec<VisibleOption>,
    /// Render the search box.
    pub show_search: bool,
    /// Render the clear action.
    pub show_clear: bool,
    /// The whole control ignores interaction.
    pub disabled: bool,
}

/// Single- or multi-select with optional in-place search and clear action.
///
/// The control is a synchronous state machine driven by discrete events:
/// [`activate`](Self::activate), [`select_option`](Self::select_option),
/// [`clear`](Self::clear), [`set_search_term`](Self::set_search_term) and
/// [`dismiss`](Self::dismiss). Nothing in it blocks or fails; values that are
/// not in the option list are displayed raw.
///
/// # Example
///
/// ```
/// use planboard_select::{SearchableSelect, SelectMode, SelectOption, SelectValue};
///
/// let mut select = SearchableSelect::new(
///     vec![
///         SelectOption::new("low", "Low"),
///         SelectOption::new("high", "High"),
///     ],
///     SelectMode::Single,
/// )
/// .placeholder("Priority");
///
/// assert_eq!(select.display_label(), "Priority");
///
/// select.activate();
/// select.select_option(&"high".into());
/// assert_eq!(select.value(), &SelectValue::single("high"));
/// assert_eq!(select.display_label(), "High");
/// assert!(!select.is_open());
/// ```
pub struct SearchableSelect {
    options: Vec<SelectOption>,
    value: SelectValue,
    mode: SelectMode,
    placeholder: String,
    flags: SelectFlags,
    state: SelectState,
    on_change: Option<ChangeFn>,
    listeners: Option<Rc<dyn PointerListeners>>,
    outside_click: Option<ListenerGuard>,
}

impl SearchableSelect {
    /// Creates a closed, empty control.
    pub fn new(options: Vec<SelectOption>, mode: SelectMode) -> Self {
        Self {
            options,
            value: SelectValue::empty(mode),
            mode,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            flags: SelectFlags::default(),
            state: SelectState::default(),
            on_change: None,
            listeners: None,
            outside_click: None,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Sets the initial value, converting it to the control's mode.
    pub fn value_of(mut self, value: SelectValue) -> Self {
        self.value = value.into_mode(self.mode);
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Enables the search box.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.flags.searchable = searchable;
        self
    }

    /// Enables the clear action.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.flags.clearable = clearable;
        self
    }

    /// Disables all interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets all flags at once.
    pub fn flags(mut self, flags: SelectFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, callback: impl FnMut(&SelectValue) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Connects the control to the host's outside-pointer event source.
    pub fn listeners(mut self, listeners: Rc<dyn PointerListeners>) -> Self {
        self.listeners = Some(listeners);
        self
    }

    // ========================================================================
    // Controlled updates (from the owning form; no change event)
    // ========================================================================

    /// Replaces the option list, e.g. once data has loaded.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    /// Replaces the value without firing the change callback.
    pub fn set_value(&mut self, value: SelectValue) {
        self.value = value.into_mode(self.mode);
    }

    /// Enables or disables the control. Disabling closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Toggles the overlay. Disabled controls ignore activation.
    pub fn activate(&mut self) {
        if self.flags.disabled {
            trace!("activate ignored: control disabled");
            return;
        }
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Picks an option by value.
    ///
    /// Single mode replaces the value and closes; multi mode toggles
    /// membership and stays open. Disabled options and disabled controls
    /// ignore the event. Values missing from the option list are accepted.
    pub fn select_option(&mut self, value: &OptionValue) {
        if self.flags.disabled {
            trace!("select ignored: control disabled");
            return;
        }
        if self.find_option(value).is_some_and(|option| option.disabled) {
            trace!(value = %value, "select ignored: option disabled");
            return;
        }

        match self.mode {
            SelectMode::Single => {
                self.value = SelectValue::Single(Some(value.clone()));
                self.close();
            }
            SelectMode::Multi => self.value.toggle(value.clone()),
        }
        trace!(value = %value, selected = self.value.len(), "option selected");
        self.emit_change();
    }

    /// Empties the value. Leaves the overlay as it is.
    pub fn clear(&mut self) {
        if self.flags.disabled {
            trace!("clear ignored: control disabled");
            return;
        }
        self.value = SelectValue::empty(self.mode);
        trace!("selection cleared");
        self.emit_change();
    }

    /// Updates the search term; the visible options follow it.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.state.search_term = text.into();
    }

    /// Closes the overlay after an outside pointer press.
    pub fn dismiss(&mut self) {
        if self.state.is_open {
            trace!("dismissed by outside click");
            self.close();
        }
    }

    /// Routes a pointer press; presses outside the control dismiss it.
    pub fn handle_pointer_down(&mut self, inside: bool) {
        if !inside {
            self.dismiss();
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The current value.
    pub fn value(&self) -> &SelectValue {
        &self.value
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// The full option list.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The interactive state.
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// The behaviour flags.
    pub fn current_flags(&self) -> SelectFlags {
        self.flags
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Text typed into the search box.
    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    /// Returns `true` while an outside-click listener is attached.
    pub fn is_listening(&self) -> bool {
        self.outside_click.is_some()
    }

    /// Options whose label or stringified value contains the search term,
    /// case-insensitively. An empty term shows everything.
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        let needle = self.state.search_term.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.matches_search(&needle))
            .collect()
    }

    /// Text shown in the closed control.
    ///
    /// Placeholder when empty; the option's label for one value (the raw
    /// value if no option carries it); `"N items selected"` for more.
    pub fn display_label(&self) -> String {
        let values = self.value.values();
        match values.as_slice() {
            [] => self.placeholder.clone(),
            [only] => self.label_for(only),
            many => format!("{} items selected", many.len()),
        }
    }

    /// Snapshot of the visual state.
    pub fn view(&self) -> SelectView {
        let options = if self.state.is_open {
            self.visible_options()
                .into_iter()
                .map(|option| VisibleOption {
                    value: option.value.clone(),
                    label: option.label.clone(),
                    description: option.description.clone(),
                    disabled: option.disabled,
                    selected: self.value.contains(&option.value),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            label: self.display_label(),
            is_placeholder: self.value.is_empty(),
            is_open: self.state.is_open,
            search_term: self.state.search_term.clone(),
            options,
            show_search: self.state.is_open && self.flags.searchable,
            show_clear: self.flags.clearable && !self.flags.disabled && !self.value.is_empty(),
            disabled: self.flags.disabled,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn find_option(&self, value: &OptionValue) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == *value)
    }

    fn label_for(&self, value: &OptionValue) -> String {
        match self.find_option(value) {
            Some(option) => option.label.clone(),
            None => value.to_string(),
        }
    }

    fn open(&mut self) {
        self.state.open();
        if self.outside_click.is_none() {
            self.outside_click = self.listeners.clone().map(ListenerGuard::attach);
        }
        trace!(listening = self.outside_click.is_some(), "opened");
    }

    fn close(&mut self) {
        let was_open = self.state.is_open;
        self.state.close();
        self.outside_click = None;
        if was_open {
            trace!("closed");
        }
    }

    fn emit_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
    }
}

impl fmt::Debug for SearchableSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableSelect")
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("mode", &self.mode)
            .field("flags", &self.flags)
            .field("state", &self.state)
            .field("listening", &self.outside_click.is_some())
            .finish()
    }
}
