//! ListView result type and builder.
//!
//! A list view is what a dashboard list hands to the renderer:
//! - Introduction text ("Showing 1-8 of 8 projects")
//! - The page of items
//! - Ending text (page position)
//! - Status messages (empty results, degraded input, clamped pages)
//!
//! [`ListViewResult::from_query`] builds one from a query result, turning
//! the pipeline's silent degradations into visible warnings.

use planboard_query::{QueryDescriptor, QueryResult};
use serde::Serialize;

use super::{Message, MessageLevel};
use crate::controller::PageClamp;
use crate::model::ListItem;

/// Page position of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Result type for list views.
#[derive(Debug, Clone, Serialize)]
pub struct ListViewResult<T> {
    /// Items on the current page, in display order.
    pub items: Vec<T>,

    /// Text shown before the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    /// Text shown after the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending: Option<String>,

    /// Status messages (info, warning, error).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    /// Number of records matching search and filters, across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,

    /// Applied search, filters and sort (for "filtered by: ...").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ListViewResult<T> {
    /// Create a new list view result with just items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            intro: None,
            ending: None,
            messages: Vec::new(),
            total_count: None,
            filter_summary: None,
            pagination: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if any message is at `level`.
    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

impl<T> Default for ListViewResult<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: ListItem> ListViewResult<R> {
    /// Builds the view for one page of a query.
    ///
    /// Filter and sort fields the record type does not have are reported as
    /// warnings; the pipeline already treated them as "no match" and
    /// "unsorted". `clamp` is the controller's report of a page that had to
    /// be pulled back into range.
    pub fn from_query(
        result: &QueryResult<'_, R>,
        descriptor: &QueryDescriptor,
        clamp: Option<PageClamp>,
    ) -> Self {
        let mut builder = list_view(result.cloned_items()).total_count(result.total_matched);

        if let Some(summary) = describe(descriptor) {
            builder = builder.filter_summary(summary);
        }

        match result.showing() {
            Some((first, last)) => {
                builder = builder.intro(format!(
                    "Showing {first}-{last} of {} {}",
                    result.total_matched,
                    R::NOUN
                ));
            }
            None => {
                builder = builder.info(format!("No {} match the current search and filters.", R::NOUN));
            }
        }

        if result.total_pages > 1 {
            builder = builder.ending(format!("Page {} of {}", result.page, result.total_pages));
        }
        builder = builder.pagination(Pagination {
            page: result.page,
            page_size: result.page_size,
            total_pages: result.total_pages,
        });

        for (field, _) in descriptor.field_filters().active() {
            if !R::has_field(field) {
                builder = builder.warning(format!(
                    "Unknown filter field '{field}'; no {} can match it.",
                    R::NOUN
                ));
            }
        }
        if let Some(sort) = descriptor.sort() {
            if R::field_kind(&sort.field).is_none() {
                builder = builder.warning(format!(
                    "Cannot sort by '{}'; showing {} unsorted.",
                    sort.field,
                    R::NOUN
                ));
            }
        }
        if let Some(clamp) = clamp {
            builder = builder.warning(format!(
                "Page {} is past the end; showing page {}.",
                clamp.requested, clamp.clamped
            ));
        }

        builder.build()
    }
}

/// One-line description of what narrows or orders the list.
fn describe(descriptor: &QueryDescriptor) -> Option<String> {
    let mut parts = Vec::new();
    if !descriptor.search_text().is_empty() {
        parts.push(format!("search \"{}\"", descriptor.search_text()));
    }
    if let Some(filters) = descriptor.field_filters().summary() {
        parts.push(filters);
    }
    if let Some(sort) = descriptor.sort() {
        parts.push(format!("sorted by {sort}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Builder for constructing `ListViewResult` instances.
#[derive(Debug)]
pub struct ListViewBuilder<T> {
    items: Vec<T>,
    intro: Option<String>,
    ending: Option<String>,
    messages: Vec<Message>,
    total_count: Option<usize>,
    filter_summary: Option<String>,
    pagination: Option<Pagination>,
}

impl<T> ListViewBuilder<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            intro: None,
            ending: None,
            messages: Vec::new(),
            total_count: None,
            filter_summary: None,
            pagination: None,
        }
    }

    pub fn intro(mut self, text: impl Into<String>) -> Self {
        self.intro = Some(text.into());
        self
    }

    pub fn ending(mut self, text: impl Into<String>) -> Self {
        self.ending = Some(text.into());
        self
    }

    pub fn message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.messages.push(Message::new(level, text));
        self
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Info, text)
    }

    pub fn warning(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Warning, text)
    }

    pub fn total_count(mut self, count: usize) -> Self {
        self.total_count = Some(count);
        self
    }

    pub fn filter_summary(mut self, summary: impl Into<String>) -> Self {
        self.filter_summary = Some(summary.into());
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn build(self) -> ListViewResult<T> {
        ListViewResult {
            items: self.items,
            intro: self.intro,
            ending: self.ending,
            messages: self.messages,
            total_count: self.total_count,
            filter_summary: self.filter_summary,
            pagination: self.pagination,
        }
    }
}

/// Create a new list view builder with the given items.
///
/// ```rust
/// use planboard::views::{list_view, MessageLevel};
///
/// let result = list_view(vec!["a", "b"])
///     .intro("Items:")
///     .total_count(10)
///     .warning("Some items hidden")
///     .build();
///
/// assert_eq!(result.len(), 2);
/// assert!(result.has_level(MessageLevel::Warning));
/// ```
pub fn list_view<T>(items: impl IntoIterator<Item = T>) -> ListViewBuilder<T> {
    ListViewBuilder::new(items)
}
