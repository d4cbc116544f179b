//! End-to-end tests over the dashboard fixtures.

use std::io::Write;

use planboard::commands::{list, ListRequest};
use planboard::config::PlanboardConfig;
use planboard::controller::ListController;
use planboard::fixtures;
use planboard::model::{Project, TeamMember};
use planboard::render::{render_list, OutputFormat};
use planboard_query::{query, QueryDescriptor};
use proptest::prelude::*;

fn names(items: &[&Project]) -> Vec<String> {
    items.iter().map(|p| p.name.clone()).collect()
}

// ============================================================================
// Project list scenarios
// ============================================================================

#[test]
fn searching_mobile_finds_one_project() {
    let projects = fixtures::projects();
    let descriptor = QueryDescriptor::new()
        .with_page_size(12)
        .unwrap()
        .with_search("mobile");

    let result = query(&projects, &descriptor);
    assert_eq!(result.total_matched, 1);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "Mobile App Development");
}

#[test]
fn search_is_case_insensitive() {
    let projects = fixtures::projects();
    let result = query(&projects, &QueryDescriptor::new().with_search("MoBiLe"));
    assert_eq!(names(&result.items), ["Mobile App Development"]);
}

#[test]
fn completed_filter_finds_two_projects() {
    let projects = fixtures::projects();
    let descriptor = QueryDescriptor::new()
        .with_page_size(12)
        .unwrap()
        .with_filter("status", "completed");

    let result = query(&projects, &descriptor);
    assert_eq!(result.total_matched, 2);
    assert_eq!(
        names(&result.items),
        ["Data Analytics Dashboard", "Security Audit & Compliance"]
    );
}

#[test]
fn all_sentinel_is_no_filter() {
    let projects = fixtures::projects();
    let result = query(&projects, &QueryDescriptor::new().with_filter("status", "all"));
    assert_eq!(result.total_matched, 8);
}

#[test]
fn unassigned_manager_filter() {
    let projects = fixtures::projects();
    let result = query(
        &projects,
        &QueryDescriptor::new().with_filter("manager", "unassigned"),
    );
    assert_eq!(names(&result.items), ["Customer Portal Integration"]);
}

#[test]
fn tags_are_searched() {
    let projects = fixtures::projects();
    let result = query(&projects, &QueryDescriptor::new().with_search("devops"));
    assert_eq!(names(&result.items), ["API Gateway Migration"]);
}

#[test]
fn due_date_sort_is_chronological() {
    let request = ListRequest {
        sort: Some("due_date".into()),
        ..Default::default()
    };
    let view = list(fixtures::projects(), QueryDescriptor::new(), &request).unwrap();
    let dates: Vec<_> = view.items.iter().map(|p| p.due_date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(view.items[0].name, "Data Analytics Dashboard");
}

// ============================================================================
// Config-driven runs
// ============================================================================

#[test]
fn config_file_sets_team_paging() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "team:\n  page_size: 5\n  sort: {{ field: tasks_completed, dir: desc }}").unwrap();

    let config = PlanboardConfig::load(Some(file.path())).unwrap();
    let view = list(
        fixtures::team(),
        config.team_descriptor().unwrap(),
        &ListRequest::default(),
    )
    .unwrap();

    assert_eq!(view.len(), 5);
    assert_eq!(view.pagination.map(|p| p.total_pages), Some(3));
    assert_eq!(view.items[0].name, "James Taylor");
}

#[test]
fn json_output_matches_view() {
    let config = PlanboardConfig::default();
    let request = ListRequest {
        filters: vec!["role=developer".into()],
        ..Default::default()
    };
    let view = list(fixtures::team(), config.team_descriptor().unwrap(), &request).unwrap();
    let json = render_list(&view, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let items = parsed["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|m| m["role"] == "developer"));
    assert_eq!(parsed["filter_summary"], "role=developer, sorted by name asc");
}

// ============================================================================
// Controller properties
// ============================================================================

fn team_with(count: usize) -> Vec<TeamMember> {
    fixtures::team().into_iter().cycle().take(count).collect()
}

proptest! {
    #[test]
    fn controller_page_always_in_range(
        count in 0usize..40,
        page in 1usize..20,
        page_size in 1usize..15,
        search in prop::sample::select(vec!["", "a", "engineering", "zzz"]),
    ) {
        let mut list = ListController::new(team_with(count));
        list.set_page_size(page_size).unwrap();
        list.set_search(search);
        list.set_page(page);

        let result = list.run();
        let total_pages = result.total_pages;
        let shown = result.page;
        let len = result.len();

        prop_assert!(shown >= 1);
        prop_assert!(shown <= total_pages.max(1));
        prop_assert!(len <= page_size);
        if total_pages > 0 {
            prop_assert!(len > 0);
        }
        prop_assert_eq!(list.descriptor().page(), shown);
    }

    #[test]
    fn controller_agrees_with_stateless_query(
        page in 1usize..4,
        page_size in 1usize..6,
    ) {
        let team = fixtures::team();
        let descriptor = QueryDescriptor::new()
            .with_page_size(page_size)
            .unwrap()
            .with_page(page);
        let stateless = query(&team, &descriptor);
        let expected: Vec<u32> = stateless.items.iter().map(|m| m.id).collect();

        let mut list = ListController::with_descriptor(team.clone(), descriptor);
        let got: Vec<u32> = list.run().items.iter().map(|m| m.id).collect();
        if stateless.is_out_of_range() {
            prop_assert!(list.last_clamp().is_some());
        } else {
            prop_assert_eq!(got, expected);
            prop_assert!(list.last_clamp().is_none());
        }
    }
}
