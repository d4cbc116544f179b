//! View types handed to the renderer.
//!
//! ```rust
//! use planboard::views::{list_view, Message, MessageLevel};
//!
//! let result = list_view(vec!["Website Redesign"])
//!     .intro("Your projects:")
//!     .message(MessageLevel::Warning, "2 projects are overdue")
//!     .build();
//! assert_eq!(result.messages[0], Message::warning("2 projects are overdue"));
//! ```

mod list_view;
mod message;

pub use list_view::{list_view, ListViewBuilder, ListViewResult, Pagination};
pub use message::{Message, MessageLevel};
