//! Stateful owner of one dashboard list.
//!
//! The query pipeline is stateless and never clamps the requested page.
//! [`ListController`] is the caller that keeps a list consistent: it owns
//! the records and the current [`QueryDescriptor`], routes every change
//! through the descriptor's page-resetting builders, pulls the page back
//! into range after each run, and skips recomputation when neither the
//! records nor the descriptor changed.
//!
//! ```
//! use planboard::controller::ListController;
//! use planboard::fixtures;
//!
//! let mut list = ListController::new(fixtures::projects());
//! list.set_page(4);
//! let result = list.run();
//! assert_eq!(result.page, 1);
//! assert_eq!(list.descriptor().page(), 1);
//! ```

use std::mem;

use planboard_query::{
    clamp_page, query, FieldKind, FilterValue, QueryDescriptor, QueryResult, Record, SortSpec,
    Value,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;

/// A page that was pulled back into range after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageClamp {
    /// The page the descriptor asked for.
    pub requested: usize,
    /// The page actually shown.
    pub clamped: usize,
}

/// Record wrapper that remembers its position in the owning collection.
struct Indexed<'r, R> {
    index: usize,
    record: &'r R,
}

impl<R: Record> Record for Indexed<'_, R> {
    fn field_value(&self, field: &str) -> Value<'_> {
        self.record.field_value(field)
    }

    fn search_fields() -> &'static [&'static str] {
        R::search_fields()
    }

    fn field_kind(field: &str) -> Option<FieldKind> {
        R::field_kind(field)
    }
}

/// Memoized outcome of one run, keyed on `(revision, descriptor)`.
#[derive(Debug)]
struct Snapshot {
    revision: u64,
    descriptor: QueryDescriptor,
    indices: Vec<usize>,
    total_matched: usize,
    total_pages: usize,
}

/// Owns a record collection and the query currently applied to it.
#[derive(Debug)]
pub struct ListController<R> {
    records: Vec<R>,
    descriptor: QueryDescriptor,
    revision: u64,
    cache: Option<Snapshot>,
    last_clamp: Option<PageClamp>,
    evaluations: u64,
}

impl<R: Record> ListController<R> {
    /// Creates a controller showing everything, unsorted, page 1.
    pub fn new(records: Vec<R>) -> Self {
        Self::with_descriptor(records, QueryDescriptor::new())
    }

    /// Creates a controller with an initial query.
    pub fn with_descriptor(records: Vec<R>, descriptor: QueryDescriptor) -> Self {
        Self {
            records,
            descriptor,
            revision: 0,
            cache: None,
            last_clamp: None,
            evaluations: 0,
        }
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// The full, unfiltered collection.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Replaces the collection. Invalidates the memoized result.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.revision += 1;
    }

    /// Appends a record. Invalidates the memoized result.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
        self.revision += 1;
    }

    /// Bumped on every change to the collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Query changes
    // ========================================================================

    /// The query as it stands, including any clamp applied by the last run.
    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    fn update(&mut self, change: impl FnOnce(QueryDescriptor) -> QueryDescriptor) {
        self.descriptor = change(mem::take(&mut self.descriptor));
    }

    /// Sets the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.update(|d| d.with_search(text));
    }

    /// Sets one field filter; `all` leaves the field unconstrained.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.update(|d| d.with_filter(field, value));
    }

    /// Drops the filter on `field`.
    pub fn clear_filter(&mut self, field: &str) {
        self.update(|d| d.without_filter(field));
    }

    /// Replaces the sort.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.update(|d| d.with_sort(sort));
    }

    /// Column-header click: flips direction on the same field, otherwise
    /// sorts ascending by `field`.
    pub fn toggle_sort(&mut self, field: &str) {
        self.update(|d| d.toggle_sort(field));
    }

    /// Back to input order.
    pub fn clear_sort(&mut self) {
        self.update(QueryDescriptor::without_sort);
    }

    /// Requests a page. Out-of-range pages are clamped on the next run.
    pub fn set_page(&mut self, page: usize) {
        self.update(|d| d.with_page(page));
    }

    /// Changes the page size. Zero is rejected and leaves the query as is.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.descriptor = self.descriptor.clone().with_page_size(page_size)?;
        Ok(())
    }

    // ========================================================================
    // Running
    // ========================================================================

    /// Runs the query, clamping the page into `[1, total_pages]`.
    ///
    /// When the requested page was out of range the descriptor is updated
    /// to the clamped page and [`last_clamp`](Self::last_clamp) reports the
    /// move. Repeated runs with unchanged records and descriptor reuse the
    /// previous result.
    pub fn run(&mut self) -> QueryResult<'_, R> {
        let snapshot = match self.cache.take() {
            Some(cached)
                if cached.revision == self.revision && cached.descriptor == self.descriptor =>
            {
                trace!(revision = self.revision, "list result reused");
                cached
            }
            _ => self.evaluate_clamped(),
        };
        let snapshot = self.cache.insert(snapshot);

        QueryResult {
            items: snapshot.indices.iter().map(|&i| &self.records[i]).collect(),
            total_matched: snapshot.total_matched,
            total_pages: snapshot.total_pages,
            page: snapshot.descriptor.page(),
            page_size: snapshot.descriptor.page_size(),
        }
    }

    /// The clamp applied by the most recent evaluation, if any.
    pub fn last_clamp(&self) -> Option<PageClamp> {
        self.last_clamp
    }

    /// Number of times the pipeline actually ran.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn evaluate_clamped(&mut self) -> Snapshot {
        self.last_clamp = None;
        let first = self.evaluate();
        let clamped = clamp_page(first.descriptor.page(), first.total_pages);
        if clamped == first.descriptor.page() {
            return first;
        }

        let requested = first.descriptor.page();
        debug!(requested, clamped, total_pages = first.total_pages, "page clamped into range");
        self.update(|d| d.with_page(clamped));
        self.last_clamp = Some(PageClamp { requested, clamped });
        self.evaluate()
    }

    fn evaluate(&mut self) -> Snapshot {
        self.evaluations += 1;
        let indexed: Vec<Indexed<'_, R>> = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect();
        let result = query(&indexed, &self.descriptor);
        Snapshot {
            revision: self.revision,
            descriptor: self.descriptor.clone(),
            indices: result.items.iter().map(|item| item.index).collect(),
            total_matched: result.total_matched,
            total_pages: result.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::Project;

    fn names(result: &QueryResult<'_, Project>) -> Vec<String> {
        result.items.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn runs_the_full_pipeline() {
        let mut list = ListController::new(fixtures::projects());
        list.set_filter("status", "in-progress");
        list.set_sort(SortSpec::desc("progress"));
        let result = list.run();
        assert_eq!(
            names(&result),
            ["Website Redesign", "API Gateway Migration", "Mobile App Development"]
        );
    }

    #[test]
    fn narrowing_filter_resets_page() {
        let mut list = ListController::new(fixtures::projects());
        list.set_page_size(3).unwrap();
        list.set_page(3);
        assert_eq!(list.run().len(), 2);

        list.set_filter("status", "completed");
        assert_eq!(list.descriptor().page(), 1);
        assert_eq!(list.run().len(), 2);
    }

    #[test]
    fn out_of_range_page_is_clamped_after_run() {
        let mut list = ListController::new(fixtures::projects());
        list.set_page_size(3).unwrap();
        list.set_page(9);

        let (page, total_pages, len) = {
            let result = list.run();
            (result.page, result.total_pages, result.len())
        };
        assert_eq!((page, total_pages, len), (3, 3, 2));
        assert_eq!(list.descriptor().page(), 3);
        assert_eq!(
            list.last_clamp(),
            Some(PageClamp {
                requested: 9,
                clamped: 3
            })
        );
    }

    #[test]
    fn empty_result_clamps_to_page_one() {
        let mut list = ListController::new(fixtures::projects());
        list.set_search("no such project");
        list.set_page(2);
        let result = list.run();
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page, 1);
        assert!(result.is_empty());
    }

    #[test]
    fn unchanged_query_is_memoized() {
        let mut list = ListController::new(fixtures::projects());
        list.run();
        list.run();
        assert_eq!(list.evaluations(), 1);

        // Re-applying the same search is not a change.
        list.set_search("");
        list.run();
        assert_eq!(list.evaluations(), 1);

        list.set_search("api");
        list.run();
        assert_eq!(list.evaluations(), 2);
    }

    #[test]
    fn replacing_records_invalidates_memo() {
        let mut list = ListController::new(fixtures::projects());
        assert_eq!(list.run().total_matched, 8);

        let mut fewer = fixtures::projects();
        fewer.truncate(3);
        list.replace_records(fewer);
        assert_eq!(list.run().total_matched, 3);
        assert_eq!(list.evaluations(), 2);
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn clamped_run_is_memoized_under_the_clamped_descriptor() {
        let mut list = ListController::new(fixtures::projects());
        list.set_page(5);
        list.run();
        let after_clamp = list.evaluations();
        list.run();
        assert_eq!(list.evaluations(), after_clamp);
        assert_eq!(list.last_clamp().map(|c| c.clamped), Some(1));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut list = ListController::new(fixtures::projects());
        assert!(list.set_page_size(0).is_err());
        assert_eq!(list.descriptor().page_size(), 12);
    }

    #[test]
    fn toggle_sort_flips_direction() {
        let mut list = ListController::new(fixtures::projects());
        list.toggle_sort("name");
        assert_eq!(list.run().items[0].name, "API Gateway Migration");
        list.toggle_sort("name");
        assert_eq!(list.run().items[0].name, "Website Redesign");
        list.clear_sort();
        assert_eq!(list.run().items[0].name, "Website Redesign");
    }
}
