//! Planboard query - search, filter, sort and paginate record collections.
//!
//! This crate is the list pipeline behind the dashboard's project and team
//! tables. It is stateless: callers own their records and a
//! [`QueryDescriptor`], and call [`query`] whenever either changes.
//!
//! - Free-text search over a record type's declared search fields
//!   (case-insensitive substring)
//! - Exact-match field filters with `"all"` and `"unassigned"` sentinels
//! - Stable single-field sort whose comparison follows the field's
//!   declared [`FieldKind`]
//! - 1-based pagination with total counts
//!
//! # Quick Start
//!
//! ```rust
//! use planboard_query::{query, FieldKind, Number, QueryDescriptor, Record, SortSpec, Value};
//!
//! struct Project {
//!     name: String,
//!     status: String,
//!     progress: u8,
//! }
//!
//! impl Record for Project {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "status" => Value::String(&self.status),
//!             "progress" => Value::Number(Number::from(self.progress)),
//!             _ => Value::None,
//!         }
//!     }
//!
//!     fn search_fields() -> &'static [&'static str] {
//!         &["name"]
//!     }
//!
//!     fn field_kind(field: &str) -> Option<FieldKind> {
//!         match field {
//!             "name" | "status" => Some(FieldKind::Text),
//!             "progress" => Some(FieldKind::Number),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let projects = vec![
//!     Project { name: "Website Redesign".into(), status: "in-progress".into(), progress: 75 },
//!     Project { name: "Data Analytics Dashboard".into(), status: "completed".into(), progress: 100 },
//!     Project { name: "Security Audit".into(), status: "completed".into(), progress: 100 },
//! ];
//!
//! let descriptor = QueryDescriptor::new()
//!     .with_filter("status", "completed")
//!     .with_sort(SortSpec::desc("name"));
//!
//! let result = query(&projects, &descriptor);
//! assert_eq!(result.total_matched, 2);
//! assert_eq!(result.items[0].name, "Security Audit");
//! ```
//!
//! # Failure Semantics
//!
//! The pipeline never fails. Unknown filter fields match nothing, unknown
//! sort fields leave input order alone, and a page past the end comes back
//! empty. Keeping the page in range is the caller's job: check
//! [`QueryResult::is_out_of_range`] and move to [`QueryResult::clamped_page`].

mod descriptor;
mod error;
mod filter;
mod ordering;
mod page;
mod query;
mod record;
mod value;

pub use descriptor::{QueryDescriptor, DEFAULT_PAGE_SIZE};
pub use error::{QueryError, Result};
pub use filter::{filter, matches, FieldFilters, FilterValue, Scalar, ALL, UNASSIGNED};
pub use ordering::{compare_as, sort, Dir, SortSpec};
pub use page::{clamp_page, paginate, total_pages, Page};
pub use query::{query, QueryResult};
pub use record::{FieldKind, Record};
pub use value::{Number, Timestamp, Value};
