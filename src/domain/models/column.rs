use std::fmt;
use std::str::FromStr;

use super::card::Card;
use crate::domain::error::BoardError;

/// The four fixed stages of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Todo,
    InProgress,
    Review,
    Done,
}

impl ColumnId {
    /// Identifier used in the DOM (`data-column-id`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "in-progress",
            ColumnId::Review => "review",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Review => "Review",
            ColumnId::Done => "Done",
        }
    }

    /// Header background class.
    pub fn color(&self) -> &'static str {
        match self {
            ColumnId::Todo => "bg-slate-100",
            ColumnId::InProgress => "bg-blue-100",
            ColumnId::Review => "bg-yellow-100",
            ColumnId::Done => "bg-green-100",
        }
    }

    pub fn all() -> [ColumnId; 4] {
        [
            ColumnId::Todo,
            ColumnId::InProgress,
            ColumnId::Review,
            ColumnId::Done,
        ]
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            color: id.color().to_string(),
            cards: Vec::new(),
        }
    }
}
