//! Integration tests for the select control.
//!
//! These walk the control through the event sequences the dashboard forms
//! produce, using the in-memory listener registry in place of a real
//! pointer event source.

use std::cell::RefCell;
use std::rc::Rc;

use planboard_select::{
    ListenerRegistry, OptionValue, SearchableSelect, SelectMode, SelectOption, SelectValue,
};

fn abc() -> Vec<SelectOption> {
    vec![
        SelectOption::new("A", "Option A"),
        SelectOption::new("B", "Option B"),
        SelectOption::new("C", "Option C"),
    ]
}

// ============================================================================
// Multi-select toggling
// ============================================================================

#[test]
fn multi_select_toggles_membership_and_stays_open() {
    let mut select = SearchableSelect::new(abc(), SelectMode::Multi);
    select.activate();

    select.select_option(&OptionValue::from("B"));
    assert_eq!(select.value(), &SelectValue::multi(["B"]));
    assert!(select.is_open());

    select.select_option(&OptionValue::from("B"));
    assert_eq!(select.value(), &SelectValue::empty(SelectMode::Multi));
    assert!(select.is_open());
}

#[test]
fn multi_select_never_holds_duplicates() {
    let mut select = SearchableSelect::new(abc(), SelectMode::Multi)
        .value_of(SelectValue::Multi(vec!["A".into(), "A".into()]));
    assert_eq!(select.value().len(), 1);

    select.select_option(&"C".into());
    select.select_option(&"A".into());
    assert_eq!(select.value(), &SelectValue::multi(["C"]));
}

// ============================================================================
// Label fallback
// ============================================================================

#[test]
fn single_select_label_falls_back_to_raw_value() {
    let select = SearchableSelect::new(abc(), SelectMode::Single)
        .value_of(SelectValue::single("unknown-id"));
    assert_eq!(select.display_label(), "unknown-id");
    assert!(!select.view().is_placeholder);
}

#[test]
fn selecting_a_value_outside_the_list_is_accepted() {
    let mut select = SearchableSelect::new(abc(), SelectMode::Single);
    select.select_option(&OptionValue::Int(99));
    assert_eq!(select.display_label(), "99");
}

#[test]
fn empty_single_value_shows_placeholder() {
    let select = SearchableSelect::new(abc(), SelectMode::Single).placeholder("Choose");
    assert_eq!(select.display_label(), "Choose");
    assert!(select.view().is_placeholder);
}

// ============================================================================
// Dismissal
// ============================================================================

#[test]
fn outside_click_dismisses_and_resets_search() {
    let registry = ListenerRegistry::new();
    let mut select = SearchableSelect::new(abc(), SelectMode::Single)
        .searchable(true)
        .listeners(registry.clone());

    select.activate();
    select.set_search_term("xyz");
    assert!(select.visible_options().is_empty());

    select.handle_pointer_down(false);
    assert!(!select.is_open());
    assert_eq!(select.search_term(), "");

    select.activate();
    assert!(select.is_open());
    assert_eq!(select.search_term(), "");
    assert_eq!(select.visible_options().len(), 3);
}

#[test]
fn dismiss_while_closed_is_a_no_op() {
    let mut select = SearchableSelect::new(abc(), SelectMode::Single);
    select.set_search_term("kept");
    select.dismiss();
    assert_eq!(select.search_term(), "kept");
}

// ============================================================================
// Listener lifecycle
// ============================================================================

#[test]
fn listener_is_released_on_every_close_path() {
    let registry = ListenerRegistry::new();
    let mut select = SearchableSelect::new(abc(), SelectMode::Single).listeners(registry.clone());

    // Toggle closed.
    select.activate();
    assert_eq!(registry.live_count(), 1);
    select.activate();
    assert_eq!(registry.live_count(), 0);

    // Single selection closes.
    select.activate();
    select.select_option(&"A".into());
    assert_eq!(registry.live_count(), 0);

    // Outside click.
    select.activate();
    select.dismiss();
    assert_eq!(registry.live_count(), 0);

    // Unmount while open.
    select.activate();
    assert_eq!(registry.live_count(), 1);
    drop(select);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn reopening_reuses_a_single_listener() {
    let registry = ListenerRegistry::new();
    let mut select = SearchableSelect::new(abc(), SelectMode::Multi).listeners(registry.clone());
    select.activate();
    select.select_option(&"A".into());
    select.select_option(&"B".into());
    assert_eq!(registry.live_count(), 1);
}

// ============================================================================
// Change notifications
// ============================================================================

#[test]
fn search_and_activation_never_emit_change() {
    let count = Rc::new(RefCell::new(0usize));
    let sink = count.clone();
    let mut select = SearchableSelect::new(abc(), SelectMode::Single)
        .searchable(true)
        .on_change(move |_| *sink.borrow_mut() += 1);

    select.activate();
    select.set_search_term("opt");
    select.activate();
    select.dismiss();
    assert_eq!(*count.borrow(), 0);

    select.select_option(&"C".into());
    select.clear();
    assert_eq!(*count.borrow(), 2);
}
