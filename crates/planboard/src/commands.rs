//! Command handlers behind the `planboard` binary.
//!
//! Handlers take parsed arguments and return views; printing is left to
//! the caller so the same paths are exercised by tests.

use clap::Args;
use planboard_query::{Dir, FieldFilters, QueryDescriptor, SortSpec};
use planboard_select::SelectView;
use tracing::{debug, info, warn};

use crate::controller::ListController;
use crate::error::Result;
use crate::fixtures;
use crate::forms::FormSelect;
use crate::model::ListItem;
use crate::views::{ListViewResult, Message};

/// Query options shared by the list commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ListRequest {
    /// Case-insensitive text search over the list's search fields
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact-match filter, `field=value`; `all` clears, `unassigned` matches empty (repeatable)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Field to sort by
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// 1-based page number
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListRequest {
    /// Parses the `--filter` expressions.
    pub fn field_filters(&self) -> Result<FieldFilters> {
        let mut filters = FieldFilters::new();
        for expr in &self.filters {
            filters.set_assignment(expr)?;
        }
        Ok(filters)
    }

    /// The sort to apply on top of `current`, if the request changes it.
    fn sort_over(&self, current: Option<&SortSpec>) -> Option<SortSpec> {
        let dir = if self.desc { Dir::Desc } else { Dir::Asc };
        match (&self.sort, current) {
            (Some(field), _) => Some(SortSpec::new(field.as_str(), dir)),
            (None, Some(current)) if self.desc => Some(SortSpec::new(current.field.as_str(), dir)),
            _ => None,
        }
    }
}

/// Runs a list request over `records`, starting from `start`.
///
/// The page is applied last so the earlier, page-resetting changes do not
/// discard it; a page past the end is clamped and reported on the view.
pub fn list<R: ListItem>(
    records: Vec<R>,
    start: QueryDescriptor,
    request: &ListRequest,
) -> Result<ListViewResult<R>> {
    let filters = request.field_filters()?;
    let mut list = ListController::with_descriptor(records, start);

    if let Some(page_size) = request.page_size {
        list.set_page_size(page_size)?;
    }
    if let Some(search) = &request.search {
        list.set_search(search.as_str());
    }
    for (field, value) in filters.iter() {
        list.set_filter(field, value.clone());
    }
    let desc_ignored = request.desc && request.sort.is_none() && list.descriptor().sort().is_none();
    if let Some(sort) = request.sort_over(list.descriptor().sort()) {
        list.set_sort(sort);
    }
    if let Some(page) = request.page {
        list.set_page(page);
    }

    debug!(descriptor = ?list.descriptor(), noun = R::NOUN, "running list query");

    // The first run settles the clamp; the second is served from the memo.
    list.run();
    let clamp = list.last_clamp();
    let descriptor = list.descriptor().clone();
    let result = list.run();
    info!(
        matched = result.total_matched,
        page = result.page,
        total_pages = result.total_pages,
        "{} listed",
        R::NOUN
    );
    let mut view = ListViewResult::from_query(&result, &descriptor, clamp);
    if desc_ignored {
        warn!("--desc given without a sort field");
        view.messages.push(Message::warning(format!(
            "--desc has no effect without --sort; {} are in input order.",
            R::NOUN
        )));
    }
    Ok(view)
}

/// Opens the form select `kind`, types `search` into it, and returns what
/// the overlay shows.
pub fn options(kind: FormSelect, search: Option<&str>) -> SelectView {
    let projects = fixtures::projects();
    let team = fixtures::team();
    let mut select = kind.build(&projects, &team);
    select.activate();
    if let Some(search) = search {
        select.set_search_term(search);
    }
    select.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Project, TeamMember};
    use crate::views::MessageLevel;

    fn projects(request: &ListRequest) -> ListViewResult<Project> {
        list(fixtures::projects(), QueryDescriptor::new(), request).unwrap()
    }

    fn names<R: ListItem>(view: &ListViewResult<R>) -> Vec<String> {
        view.items.iter().map(|item| item.cells()[1].clone()).collect()
    }

    #[test]
    fn filters_are_parsed_and_applied() {
        let request = ListRequest {
            filters: vec!["status=completed".into(), "priority=critical".into()],
            ..Default::default()
        };
        let view = projects(&request);
        assert_eq!(names(&view), ["Security Audit & Compliance"]);
    }

    #[test]
    fn malformed_filter_is_an_error() {
        let request = ListRequest {
            filters: vec!["status".into()],
            ..Default::default()
        };
        assert!(list(fixtures::projects(), QueryDescriptor::new(), &request).is_err());
    }

    #[test]
    fn desc_alone_flips_the_configured_sort() {
        let start = QueryDescriptor::new().with_sort(SortSpec::asc("name"));
        let request = ListRequest {
            desc: true,
            ..Default::default()
        };
        let view = list(fixtures::projects(), start, &request).unwrap();
        assert_eq!(names(&view)[0], "Website Redesign");
    }

    #[test]
    fn desc_without_any_sort_is_reported() {
        let request = ListRequest {
            desc: true,
            ..Default::default()
        };
        let view = projects(&request);
        assert_eq!(names(&view)[0], "Website Redesign");
        assert_eq!(view.len(), 8);
        assert!(view.has_level(MessageLevel::Warning));
        assert!(view.messages.iter().any(|m| m.text.contains("--desc")));

        let sorted = ListRequest {
            desc: true,
            sort: Some("name".into()),
            ..Default::default()
        };
        assert!(!projects(&sorted).has_level(MessageLevel::Warning));
    }

    #[test]
    fn page_survives_other_changes() {
        let request = ListRequest {
            search: Some("a".into()),
            sort: Some("id".into()),
            page: Some(2),
            page_size: Some(2),
            ..Default::default()
        };
        let view = projects(&request);
        assert_eq!(view.pagination.map(|p| p.page), Some(2));
        assert!(!view.has_level(MessageLevel::Warning));
    }

    #[test]
    fn page_past_end_is_clamped_with_warning() {
        let request = ListRequest {
            page: Some(7),
            page_size: Some(5),
            ..Default::default()
        };
        let view = projects(&request);
        assert_eq!(view.pagination.map(|p| p.page), Some(2));
        assert_eq!(view.len(), 3);
        assert!(view.has_level(MessageLevel::Warning));
    }

    #[test]
    fn unassigned_team_members() {
        let request = ListRequest {
            filters: vec!["project=unassigned".into()],
            sort: Some("name".into()),
            ..Default::default()
        };
        let view: ListViewResult<TeamMember> =
            list(fixtures::team(), QueryDescriptor::new(), &request).unwrap();
        assert_eq!(names(&view), ["Jennifer Lee", "Kevin Harris", "Thomas Martin"]);
    }

    #[test]
    fn options_applies_search() {
        let view = options(FormSelect::Members, Some("son"));
        let labels: Vec<&str> = view.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Sarah Johnson", "David Wilson", "Lisa Anderson"]);
        assert!(view.is_open);
        assert!(view.show_search);
    }
}
