//! Select controls used by the dashboard's forms.
//!
//! Each builder returns a [`SearchableSelect`] configured the way the
//! corresponding form field needs it. Options for people and projects come
//! from the caller's records; status and priority options are fixed.

use planboard_query::UNASSIGNED;
use planboard_select::{OptionValue, SearchableSelect, SelectMode, SelectOption, SelectValue};

use crate::model::{Priority, Project, ProjectStatus, Role, TeamMember};

/// Label of the manager option that clears the assignment.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// The form selects the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormSelect {
    /// Project status (single)
    Status,
    /// Project priority (single)
    Priority,
    /// Project manager, with an "Unassigned" choice (single, searchable)
    Manager,
    /// Team members on a project (multi, searchable)
    Members,
    /// Project a team member works on (single, searchable)
    Project,
}

impl FormSelect {
    /// Builds the select with nothing chosen.
    pub fn build(self, projects: &[Project], team: &[TeamMember]) -> SearchableSelect {
        match self {
            FormSelect::Status => status_select(None),
            FormSelect::Priority => priority_select(None),
            FormSelect::Manager => manager_select(team, None),
            FormSelect::Members => member_select(team, &[]),
            FormSelect::Project => project_select(projects, None),
        }
    }
}

/// Project status picker.
pub fn status_select(current: Option<ProjectStatus>) -> SearchableSelect {
    let options = ProjectStatus::ALL
        .iter()
        .map(|status| SelectOption::new(status.as_str(), status.label()))
        .collect();
    let value = match current {
        Some(status) => SelectValue::single(status.as_str()),
        None => SelectValue::empty(SelectMode::Single),
    };
    SearchableSelect::new(options, SelectMode::Single)
        .value_of(value)
        .placeholder("Select status")
}

/// Priority picker.
pub fn priority_select(current: Option<Priority>) -> SearchableSelect {
    let options = Priority::ALL
        .iter()
        .map(|priority| SelectOption::new(priority.as_str(), priority.label()))
        .collect();
    let value = match current {
        Some(priority) => SelectValue::single(priority.as_str()),
        None => SelectValue::empty(SelectMode::Single),
    };
    SearchableSelect::new(options, SelectMode::Single)
        .value_of(value)
        .placeholder("Select priority")
}

/// Project manager picker.
///
/// Lists project managers from `team`, after an explicit "Unassigned"
/// choice. Managers who are not active are shown but cannot be picked.
/// `current` of `None` selects "Unassigned".
pub fn manager_select(team: &[TeamMember], current: Option<&str>) -> SearchableSelect {
    let mut options = vec![SelectOption::new(UNASSIGNED, UNASSIGNED_LABEL)];
    options.extend(
        team.iter()
            .filter(|member| member.role == Role::ProjectManager)
            .map(|member| {
                SelectOption::new(member.name.as_str(), member.name.as_str())
                    .description(member.department.as_str())
                    .disabled(!member.status.is_assignable())
            }),
    );
    SearchableSelect::new(options, SelectMode::Single)
        .value_of(SelectValue::single(current.unwrap_or(UNASSIGNED)))
        .placeholder("Select manager")
        .searchable(true)
}

/// Reads a manager picker's value back into a project's `manager` field.
pub fn manager_from(value: &SelectValue) -> Option<String> {
    match value.values().first() {
        Some(OptionValue::Text(name)) if name != UNASSIGNED && !name.is_empty() => {
            Some(name.clone())
        }
        _ => None,
    }
}

/// Team member multi-picker, keyed by member id.
pub fn member_select(team: &[TeamMember], selected: &[u32]) -> SearchableSelect {
    let options = team
        .iter()
        .map(|member| {
            SelectOption::new(member.id, member.name.as_str())
                .description(member.role.label())
                .disabled(!member.status.is_assignable())
        })
        .collect();
    SearchableSelect::new(options, SelectMode::Multi)
        .value_of(SelectValue::multi(selected.iter().copied()))
        .placeholder("Add team members")
        .searchable(true)
        .clearable(true)
}

/// Reads a member picker's value back into member ids.
pub fn member_ids(value: &SelectValue) -> Vec<u32> {
    value
        .values()
        .into_iter()
        .filter_map(|v| match v {
            OptionValue::Int(id) => u32::try_from(*id).ok(),
            _ => None,
        })
        .collect()
}

/// Project assignment picker for a team member. Completed projects cannot
/// take new members.
pub fn project_select(projects: &[Project], current: Option<&str>) -> SearchableSelect {
    let options = projects
        .iter()
        .map(|project| {
            SelectOption::new(project.name.as_str(), project.name.as_str())
                .description(project.status.label())
                .disabled(project.status == ProjectStatus::Completed)
        })
        .collect();
    let value = match current {
        Some(name) => SelectValue::single(name),
        None => SelectValue::empty(SelectMode::Single),
    };
    SearchableSelect::new(options, SelectMode::Single)
        .value_of(value)
        .placeholder("Assign to project")
        .searchable(true)
        .clearable(true)
}
