//! Planboard - project and team lists for the dashboard.
//!
//! This crate is the page layer over [`planboard_query`] and
//! [`planboard_select`]: the dashboard's records and fixtures, a controller
//! that keeps each list's query consistent, the form selects, and the
//! views and renderers the `planboard` binary prints.
//!
//! ```
//! use planboard::commands::{list, ListRequest};
//! use planboard::config::PlanboardConfig;
//! use planboard::fixtures;
//!
//! let config = PlanboardConfig::default();
//! let request = ListRequest {
//!     search: Some("mobile".into()),
//!     ..Default::default()
//! };
//! let view = list(fixtures::projects(), config.projects_descriptor()?, &request)?;
//! assert_eq!(view.total_count, Some(1));
//! assert_eq!(view.items[0].name, "Mobile App Development");
//! # Ok::<(), planboard::PlanboardError>(())
//! ```

pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod model;
pub mod render;
pub mod views;

pub use error::{PlanboardError, Result};
