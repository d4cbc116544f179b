//! The full pipeline: filter, then sort, then paginate.

use serde::Serialize;
use tracing::debug;

use crate::descriptor::QueryDescriptor;
use crate::filter::filter;
use crate::ordering::sort;
use crate::page::{clamp_page, paginate};
use crate::record::Record;

/// The visible page plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a, R> {
    /// Records on the requested page, in sorted order.
    pub items: Vec<&'a R>,
    /// Number of records matching search and filters.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`, 0 when nothing matched.
    pub total_pages: usize,
    /// The page that was requested.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl<'a, R> QueryResult<'a, R> {
    /// Returns `true` if the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on the page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the requested page lies past the last page.
    ///
    /// With no matches only page 1 counts as in range.
    pub fn is_out_of_range(&self) -> bool {
        self.page != clamp_page(self.page, self.total_pages)
    }

    /// The page the caller should move to before the next render.
    pub fn clamped_page(&self) -> usize {
        clamp_page(self.page, self.total_pages)
    }

    /// 1-based positions of the first and last record shown, for
    /// "showing 13–24 of 30" style summaries. `None` for an empty page.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    /// Clones the page's records out of the source collection.
    pub fn cloned_items(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Runs search, filters, sort and pagination over `records`.
///
/// Pure and deterministic: identical inputs give identical results, so
/// callers may memoize on `(records, descriptor)`. Never fails; unknown
/// fields degrade to no match (filters) or input order (sort). The requested
/// page is not clamped; check [`QueryResult::is_out_of_range`].
///
/// # Example
///
/// ```
/// use planboard_query::{query, QueryDescriptor, Record, Value};
///
/// struct Member {
///     name: String,
/// }
///
/// impl Record for Member {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             _ => Value::None,
///         }
///     }
///
///     fn search_fields() -> &'static [&'static str] {
///         &["name"]
///     }
/// }
///
/// let team = vec![
///     Member { name: "Sarah Johnson".into() },
///     Member { name: "Mike Chen".into() },
/// ];
///
/// let result = query(&team, &QueryDescriptor::new().with_search("sarah"));
/// assert_eq!(result.total_matched, 1);
/// assert_eq!(result.items[0].name, "Sarah Johnson");
/// ```
pub fn query<'a, R: Record>(records: &'a [R], descriptor: &QueryDescriptor) -> QueryResult<'a, R> {
    let matched = filter(
        records,
        descriptor.search_text(),
        R::search_fields(),
        descriptor.field_filters(),
    );

    let ordered = match descriptor.sort() {
        Some(spec) => sort(matched, spec),
        None => matched,
    };

    let page = paginate(ordered, descriptor.page(), descriptor.page_size());

    debug!(
        records = records.len(),
        matched = page.total_matched,
        page = descriptor.page(),
        total_pages = page.total_pages,
        "query executed"
    );

    QueryResult {
        items: page.items,
        total_matched: page.total_matched,
        total_pages: page.total_pages,
        page: descriptor.page(),
        page_size: descriptor.page_size(),
    }
}
