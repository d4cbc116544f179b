//! Mock dashboard data.
//!
//! There is no backend; the lists are served from these in-memory records.

use chrono::NaiveDate;

use crate::model::{MemberStatus, Priority, Project, ProjectStatus, Role, TeamMember};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    name: &str,
    description: &str,
    status: ProjectStatus,
    priority: Priority,
    progress: u8,
    due_date: NaiveDate,
    manager: Option<&str>,
    team_size: u32,
    budget: u64,
    tag_list: &[&str],
) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: description.to_string(),
        status,
        priority,
        progress,
        due_date,
        manager: manager.map(str::to_string),
        team_size,
        budget,
        tags: tags(tag_list),
    }
}

/// The eight dashboard projects.
pub fn projects() -> Vec<Project> {
    use Priority::*;
    use ProjectStatus::*;

    vec![
        project(
            1,
            "Website Redesign",
            "Complete overhaul of the company website with a refreshed look and faster pages",
            InProgress,
            High,
            75,
            date(2024, 3, 15),
            Some("Sarah Johnson"),
            5,
            50_000,
            &["Design", "Frontend", "UX"],
        ),
        project(
            2,
            "Mobile App Development",
            "Native iOS and Android app for customer engagement",
            InProgress,
            Critical,
            45,
            date(2024, 6, 30),
            Some("Mike Chen"),
            8,
            120_000,
            &["iOS", "Android", "React Native"],
        ),
        project(
            3,
            "Data Analytics Dashboard",
            "Internal reporting dashboard for business intelligence",
            Completed,
            Medium,
            100,
            date(2024, 1, 31),
            Some("Emily Davis"),
            4,
            35_000,
            &["Analytics", "Reporting", "BI"],
        ),
        project(
            4,
            "Marketing Campaign Q2",
            "Multi-channel campaign for the spring product launch",
            Planning,
            Medium,
            10,
            date(2024, 5, 15),
            Some("Sarah Johnson"),
            6,
            75_000,
            &["Marketing", "Campaign", "Social"],
        ),
        project(
            5,
            "Security Audit & Compliance",
            "Annual security review and SOC 2 compliance certification",
            Completed,
            Critical,
            100,
            date(2024, 2, 28),
            Some("David Wilson"),
            3,
            40_000,
            &["Security", "Compliance", "Audit"],
        ),
        project(
            6,
            "Customer Portal Integration",
            "Connect the self-service portal to billing and support systems",
            OnHold,
            High,
            30,
            date(2024, 8, 1),
            None,
            5,
            65_000,
            &["Integration", "Backend", "API"],
        ),
        project(
            7,
            "API Gateway Migration",
            "Move service routing to the new gateway with rate limiting",
            InProgress,
            High,
            60,
            date(2024, 4, 30),
            Some("Mike Chen"),
            4,
            45_000,
            &["Infrastructure", "API", "DevOps"],
        ),
        project(
            8,
            "Employee Training Platform",
            "Learning management system for onboarding and certifications",
            Planning,
            Low,
            5,
            date(2024, 9, 30),
            Some("Emily Davis"),
            3,
            30_000,
            &["HR", "Learning", "Platform"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u32,
    name: &str,
    role: Role,
    department: &str,
    status: MemberStatus,
    project: Option<&str>,
    tasks_completed: u32,
    join_date: NaiveDate,
) -> TeamMember {
    let email = format!("{}@planboard.dev", name.to_lowercase().replace(' ', "."));
    TeamMember {
        id,
        name: name.to_string(),
        email,
        role,
        department: department.to_string(),
        status,
        project: project.map(str::to_string),
        tasks_completed,
        join_date,
    }
}

/// The team roster. Some members have no project assignment.
pub fn team() -> Vec<TeamMember> {
    use MemberStatus::*;
    use Role::*;

    vec![
        member(1, "Sarah Johnson", ProjectManager, "Product", Active, Some("Website Redesign"), 48, date(2021, 3, 15)),
        member(2, "Mike Chen", ProjectManager, "Engineering", Active, Some("Mobile App Development"), 52, date(2020, 7, 1)),
        member(3, "Emily Davis", ProjectManager, "Analytics", Active, Some("Data Analytics Dashboard"), 39, date(2022, 1, 10)),
        member(4, "David Wilson", QaEngineer, "Security", Active, Some("Security Audit & Compliance"), 27, date(2019, 11, 4)),
        member(5, "Lisa Anderson", Designer, "Design", Active, Some("Website Redesign"), 33, date(2022, 5, 23)),
        member(6, "James Taylor", Developer, "Engineering", Active, Some("Mobile App Development"), 61, date(2021, 9, 13)),
        member(7, "Maria Garcia", Developer, "Engineering", OnLeave, Some("API Gateway Migration"), 44, date(2020, 2, 17)),
        member(8, "Robert Brown", DevopsEngineer, "Operations", Active, Some("API Gateway Migration"), 29, date(2023, 4, 3)),
        member(9, "Jennifer Lee", DataAnalyst, "Analytics", Active, None, 18, date(2023, 8, 21)),
        member(10, "Thomas Martin", Developer, "Engineering", Inactive, None, 12, date(2022, 10, 30)),
        member(11, "Amanda White", Designer, "Marketing", Active, Some("Marketing Campaign Q2"), 22, date(2023, 1, 9)),
        member(12, "Kevin Harris", QaEngineer, "Engineering", Active, None, 15, date(2024, 2, 5)),
    ]
}
