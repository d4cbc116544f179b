//! The query descriptor: search, filters, sort and paging in one value.
//!
//! Descriptors are immutable. Every `with_*` method returns a new descriptor,
//! and any change to search text, filters, sort or page size sends the
//! descriptor back to page 1, so a page index computed against an old
//! result set is never reused against a new one.

use serde::Serialize;

use crate::error::{QueryError, Result};
use crate::filter::{FieldFilters, FilterValue};
use crate::ordering::{Dir, SortSpec};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Combined search/filter/sort/paging request against a record collection.
///
/// # Example
///
/// ```
/// use planboard_query::{QueryDescriptor, SortSpec};
///
/// let descriptor = QueryDescriptor::new()
///     .with_page(3)
///     .with_filter("status", "completed");
///
/// // Changing filters resets paging.
/// assert_eq!(descriptor.page(), 1);
///
/// let descriptor = descriptor.with_sort(SortSpec::desc("progress")).with_page(2);
/// assert_eq!(descriptor.page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDescriptor {
    search_text: String,
    field_filters: FieldFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        QueryDescriptor {
            search_text: String::new(),
            field_filters: FieldFilters::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryDescriptor {
    /// Creates a descriptor that matches everything, unsorted, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the free-text search.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.page = 1;
        }
        self
    }

    /// Sets (or replaces) the filter for one field.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let field = field.into();
        let value = value.into();
        if self.field_filters.get(&field) != Some(&value) {
            self.field_filters.set(field, value);
            self.page = 1;
        }
        self
    }

    /// Drops the filter for one field.
    pub fn without_filter(mut self, field: &str) -> Self {
        if self.field_filters.remove(field).is_some() {
            self.page = 1;
        }
        self
    }

    /// Replaces the whole filter set.
    pub fn with_filters(mut self, filters: FieldFilters) -> Self {
        if filters != self.field_filters {
            self.field_filters = filters;
            self.page = 1;
        }
        self
    }

    /// Sets the sort.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        if self.sort.as_ref() != Some(&sort) {
            self.sort = Some(sort);
            self.page = 1;
        }
        self
    }

    /// Sorts by `field`; if already sorted by it, flips the direction.
    ///
    /// This is the column-header click behaviour of the list views.
    pub fn toggle_sort(self, field: &str) -> Self {
        let dir = match &self.sort {
            Some(current) if current.field == field => current.dir.toggled(),
            _ => Dir::Asc,
        };
        self.with_sort(SortSpec::new(field, dir))
    }

    /// Removes the sort, restoring input order.
    pub fn without_sort(mut self) -> Self {
        if self.sort.take().is_some() {
            self.page = 1;
        }
        self
    }

    /// Moves to a 1-based page. Values below 1 become 1.
    ///
    /// No upper bound is applied here; see [`clamp_page`](crate::clamp_page).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the page size. Zero is rejected.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize(page_size));
        }
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The free-text search.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The field filters.
    pub fn field_filters(&self) -> &FieldFilters {
        &self.field_filters
    }

    /// The sort, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// The 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page, always at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` if search or any filter narrows the collection.
    pub fn is_narrowing(&self) -> bool {
        !self.search_text.is_empty() || !self.field_filters.is_unconstrained()
    }
}
