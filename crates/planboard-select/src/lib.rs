//! Headless searchable select control.
//!
//! `planboard-select` holds the state machine behind the dashboard's
//! dropdowns: single- or multi-select from an option list, optional in-place
//! search, optional clear action, and dismissal by clicking outside. It
//! renders nothing itself; hosts read a [`SelectView`] and feed events back.
//!
//! # Quick Start
//!
//! ```
//! use planboard_select::{SearchableSelect, SelectMode, SelectOption, SelectValue};
//!
//! let mut members = SearchableSelect::new(
//!     vec![
//!         SelectOption::new(1i64, "Sarah Johnson"),
//!         SelectOption::new(2i64, "Mike Chen"),
//!         SelectOption::new(3i64, "Emily Davis"),
//!     ],
//!     SelectMode::Multi,
//! )
//! .searchable(true)
//! .placeholder("Add team members");
//!
//! members.activate();
//! members.set_search_term("chen");
//! assert_eq!(members.visible_options().len(), 1);
//!
//! members.select_option(&2i64.into());
//! members.select_option(&3i64.into());
//! assert!(members.is_open());
//! assert_eq!(members.display_label(), "2 items selected");
//! ```
//!
//! # Architecture
//!
//! ```text
//! SearchableSelect
//! ├── options        Vec<SelectOption>
//! ├── value          SelectValue (Single | Multi)
//! ├── state          SelectState { is_open, search_term }
//! └── outside_click  ListenerGuard, held only while open
//! ```
//!
//! # Testing
//!
//! Outside-click plumbing goes through the [`PointerListeners`] trait, and
//! [`ListenerRegistry`] counts live listeners so tests can assert that
//! nothing leaks:
//!
//! ```
//! use planboard_select::{ListenerRegistry, SearchableSelect, SelectMode};
//!
//! let registry = ListenerRegistry::new();
//! let mut select = SearchableSelect::new(Vec::new(), SelectMode::Single)
//!     .listeners(registry.clone());
//!
//! select.activate();
//! assert_eq!(registry.live_count(), 1);
//! drop(select);
//! assert_eq!(registry.live_count(), 0);
//! ```

mod listener;
mod option;
mod select;
mod state;
mod value;

pub use listener::{ListenerGuard, ListenerId, ListenerRegistry, PointerListeners};
pub use option::{OptionValue, SelectOption};
pub use select::{SearchableSelect, SelectFlags, SelectView, VisibleOption, DEFAULT_PLACEHOLDER};
pub use state::SelectState;
pub use value::{SelectMode, SelectValue};
