//! Dashboard records: projects and team members.
//!
//! Both types implement [`Record`] so the query pipeline can search, filter
//! and sort them, and [`ListItem`] so views and renderers know how to name
//! and tabulate them.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use planboard_query::{FieldKind, Number, Record, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// A record type shown as a dashboard list.
pub trait ListItem: Record + Clone + Serialize {
    /// Plural noun used in summaries ("projects").
    const NOUN: &'static str;

    /// Every field name [`Record::field_value`] answers for.
    fn fields() -> &'static [&'static str];

    /// Column headers for tabular output.
    fn columns() -> &'static [&'static str];

    /// Cell text for each column, in [`columns`](ListItem::columns) order.
    fn cells(&self) -> Vec<String>;

    /// Returns `true` if `field` is one of [`fields`](ListItem::fields).
    fn has_field(field: &str) -> bool {
        Self::fields().contains(&field)
    }
}

fn date_value(date: NaiveDate) -> Value<'static> {
    let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    Value::Date(Timestamp::from_millis(millis))
}

fn optional_text(text: &Option<String>) -> Value<'_> {
    match text {
        Some(text) => Value::String(text.as_str()),
        None => Value::None,
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    /// Wire name, as used in filters.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Sort rank, lowest first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Critical => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job role of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ProjectManager,
    Developer,
    Designer,
    QaEngineer,
    DevopsEngineer,
    DataAnalyst,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::ProjectManager => "project-manager",
            Role::Developer => "developer",
            Role::Designer => "designer",
            Role::QaEngineer => "qa-engineer",
            Role::DevopsEngineer => "devops-engineer",
            Role::DataAnalyst => "data-analyst",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::ProjectManager => "Project Manager",
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::QaEngineer => "QA Engineer",
            Role::DevopsEngineer => "DevOps Engineer",
            Role::DataAnalyst => "Data Analyst",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberStatus {
    Active,
    OnLeave,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::OnLeave => "on-leave",
            MemberStatus::Inactive => "inactive",
        }
    }

    /// Members who are not active cannot take new assignments.
    pub fn is_assignable(self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Project
// ============================================================================

/// A project on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Percent complete, 0 to 100.
    pub progress: u8,
    pub due_date: NaiveDate,
    /// Name of the managing team member, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    pub team_size: u32,
    /// Budget in whole currency units.
    pub budget: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Project {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "description" => Value::String(&self.description),
            "status" => Value::String(self.status.as_str()),
            "priority" => Value::String(self.priority.as_str()),
            "priority_rank" => Value::Number(Number::from(self.priority.rank())),
            "progress" => Value::Number(Number::from(self.progress)),
            "due_date" => date_value(self.due_date),
            "manager" => optional_text(&self.manager),
            "team_size" => Value::Number(Number::from(self.team_size)),
            "budget" => Value::Number(Number::from(self.budget)),
            "tags" => Value::List(self.tags.iter().map(|t| Value::String(t.as_str())).collect()),
            _ => Value::None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "description", "tags"]
    }

    fn field_kind(field: &str) -> Option<FieldKind> {
        match field {
            "name" | "description" | "status" | "priority" | "manager" => Some(FieldKind::Text),
            "id" | "priority_rank" | "progress" | "team_size" | "budget" => Some(FieldKind::Number),
            "due_date" => Some(FieldKind::Date),
            _ => None,
        }
    }
}

impl ListItem for Project {
    const NOUN: &'static str = "projects";

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "description",
            "status",
            "priority",
            "priority_rank",
            "progress",
            "due_date",
            "manager",
            "team_size",
            "budget",
            "tags",
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Status", "Priority", "Progress", "Due", "Manager"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            format!("{}%", self.progress),
            self.due_date.format("%Y-%m-%d").to_string(),
            self.manager.clone().unwrap_or_else(|| "Unassigned".to_string()),
        ]
    }
}

// ============================================================================
// TeamMember
// ============================================================================

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: MemberStatus,
    /// Name of the project this member is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub tasks_completed: u32,
    pub join_date: NaiveDate,
}

impl Record for TeamMember {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "email" => Value::String(&self.email),
            "role" => Value::String(self.role.as_str()),
            "department" => Value::String(&self.department),
            "status" => Value::String(self.status.as_str()),
            "project" => optional_text(&self.project),
            "tasks_completed" => Value::Number(Number::from(self.tasks_completed)),
            "join_date" => date_value(self.join_date),
            _ => Value::None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "email", "department"]
    }

    fn field_kind(field: &str) -> Option<FieldKind> {
        match field {
            "name" | "email" | "role" | "department" | "status" | "project" => {
                Some(FieldKind::Text)
            }
            "id" | "tasks_completed" => Some(FieldKind::Number),
            "join_date" => Some(FieldKind::Date),
            _ => None,
        }
    }
}

impl ListItem for TeamMember {
    const NOUN: &'static str = "team members";

    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "email",
            "role",
            "department",
            "status",
            "project",
            "tasks_completed",
            "join_date",
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Role", "Department", "Status", "Project", "Tasks"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.role.label().to_string(),
            self.department.clone(),
            self.status.as_str().to_string(),
            self.project.clone().unwrap_or_else(|| "-".to_string()),
            self.tasks_completed.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: 1,
            name: "Website Redesign".into(),
            description: "Refresh the marketing site".into(),
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            progress: 75,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            manager: None,
            team_size: 5,
            budget: 50_000,
            tags: vec!["Design".into(), "Frontend".into()],
        }
    }

    #[test]
    fn enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Role::QaEngineer).unwrap(), "\"qa-engineer\"");
        for status in ProjectStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn project_field_values() {
        let project = sample_project();
        assert_eq!(project.field_value("status").as_str(), Some("in-progress"));
        assert!(project.field_value("manager").is_none());
        assert!(project.field_value("bogus").is_none());
        assert!(project.field_value("tags").contains_text("frontend"));
    }

    #[test]
    fn due_date_is_midnight_utc() {
        let project = sample_project();
        let date = project.field_value("due_date").as_date().unwrap();
        assert_eq!(date.as_millis() % 86_400_000, 0);
    }

    #[test]
    fn every_kind_is_a_known_field() {
        for field in Project::fields() {
            assert!(Project::has_field(field));
        }
        for field in ["name", "progress", "due_date"] {
            assert!(Project::field_kind(field).is_some());
        }
        assert!(!TeamMember::has_field("budget"));
    }

    #[test]
    fn cells_match_columns() {
        let project = sample_project();
        assert_eq!(project.cells().len(), Project::columns().len());
        assert_eq!(project.cells()[6], "Unassigned");
    }
}
