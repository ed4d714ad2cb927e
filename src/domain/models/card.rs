use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use super::column::ColumnId;
use crate::domain::color::{contrast_color, DEFAULT_CARD_COLOR};
use crate::domain::error::BoardError;

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Class of the small dot next to the priority name.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            Priority::Low => "bg-green-500",
            Priority::Medium => "bg-yellow-500",
            Priority::High => "bg-red-500",
        }
    }

    /// Order used by the form select and the filter dropdown.
    pub fn all() -> [Priority; 3] {
        [Priority::High, Priority::Medium, Priority::Low]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(BoardError::UnknownPriority(other.to_string())),
        }
    }
}

/// Priority dropdown value; `All` disables priority filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(priority) => priority.as_str(),
        }
    }

    /// Anything that isn't a known priority resets the filter.
    pub fn parse(value: &str) -> Self {
        value
            .parse::<Priority>()
            .map(PriorityFilter::Only)
            .unwrap_or(PriorityFilter::All)
    }

    pub fn accepts(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Assignee {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: "/placeholder.svg?height=32&width=32".to_string(),
        }
    }

    /// Avatar fallback, e.g. "Alice Johnson" -> "AJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub column_id: ColumnId,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<Assignee>,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub background_color: Option<String>,
}

impl Card {
    pub fn from_draft(id: String, column_id: ColumnId, draft: CardDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            column_id,
            priority: draft.priority,
            due_date: draft.due_date,
            assignee: draft.assignee,
            labels: draft.labels,
            created_at,
            background_color: Some(
                draft
                    .background_color
                    .unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string()),
            ),
        }
    }

    /// Overwrite the user-editable fields. Identity, column and timestamp stay.
    pub fn apply(&mut self, draft: CardDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority;
        self.due_date = draft.due_date;
        self.assignee = draft.assignee;
        self.labels = draft.labels;
        self.background_color = draft.background_color;
    }

    pub fn background(&self) -> &str {
        self.background_color.as_deref().unwrap_or(DEFAULT_CARD_COLOR)
    }

    pub fn text_color(&self) -> &'static str {
        contrast_color(self.background())
    }

    /// A due date counts from midnight UTC, so a card due today is already overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .map(|due| start_of_day(due) < now)
            .unwrap_or(false)
    }

    pub fn due_date_label(&self) -> Option<String> {
        self.due_date.map(|due| due.format("%-m/%-d/%Y").to_string())
    }

    pub fn matches_text(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.description.to_lowercase().contains(needle_lowercase)
    }
}

/// Validated form output used both to create and to edit a card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<Assignee>,
    pub labels: Vec<String>,
    pub background_color: Option<String>,
}

impl CardDraft {
    #[cfg(test)]
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
