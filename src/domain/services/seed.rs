//! Demo content shown on a fresh board.

use chrono::NaiveDate;

use crate::domain::models::card::start_of_day;
use crate::domain::models::{Assignee, Card, ColumnId, Priority};

/// People that cards can be assigned to.
pub fn team() -> Vec<Assignee> {
    vec![
        Assignee::new("1", "Alice Johnson"),
        Assignee::new("2", "Bob Smith"),
        Assignee::new("3", "Carol Davis"),
        Assignee::new("4", "David Wilson"),
    ]
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

struct SeedCard {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    column_id: ColumnId,
    priority: Priority,
    due_date: Option<&'static str>,
    assignee_id: &'static str,
    labels: &'static [&'static str],
    created_at: &'static str,
    background_color: &'static str,
}

const SEED: [SeedCard; 5] = [
    SeedCard {
        id: "1",
        title: "Design new landing page",
        description: "Create wireframes and mockups for the new landing page design",
        column_id: ColumnId::Todo,
        priority: Priority::High,
        due_date: Some("2024-01-15"),
        assignee_id: "1",
        labels: &["Design", "Frontend"],
        created_at: "2024-01-10",
        background_color: "#dbeafe",
    },
    SeedCard {
        id: "2",
        title: "Set up CI/CD pipeline",
        description: "Configure automated testing and deployment",
        column_id: ColumnId::Todo,
        priority: Priority::Medium,
        due_date: Some("2024-01-20"),
        assignee_id: "2",
        labels: &["DevOps", "Backend"],
        created_at: "2024-01-11",
        background_color: "#dcfce7",
    },
    SeedCard {
        id: "3",
        title: "Implement user authentication",
        description: "Add login, signup, and password reset functionality",
        column_id: ColumnId::InProgress,
        priority: Priority::High,
        due_date: Some("2024-01-18"),
        assignee_id: "3",
        labels: &["Backend", "Security"],
        created_at: "2024-01-09",
        background_color: "#fef3c7",
    },
    SeedCard {
        id: "4",
        title: "Update documentation",
        description: "Review and update API documentation",
        column_id: ColumnId::Review,
        priority: Priority::Low,
        due_date: None,
        assignee_id: "4",
        labels: &["Documentation"],
        created_at: "2024-01-08",
        background_color: "#e9d5ff",
    },
    SeedCard {
        id: "5",
        title: "Database schema design",
        description: "Design and implement the initial database schema",
        column_id: ColumnId::Done,
        priority: Priority::High,
        due_date: None,
        assignee_id: "2",
        labels: &["Database", "Backend"],
        created_at: "2024-01-05",
        background_color: "#374151",
    },
];

pub fn demo_cards() -> Vec<Card> {
    let team = team();
    SEED.iter()
        .map(|seed| Card {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            column_id: seed.column_id,
            priority: seed.priority,
            due_date: seed.due_date.map(date),
            assignee: team.iter().find(|a| a.id == seed.assignee_id).cloned(),
            labels: seed.labels.iter().map(|l| l.to_string()).collect(),
            created_at: start_of_day(date(seed.created_at)),
            background_color: Some(seed.background_color.to_string()),
        })
        .collect()
}
