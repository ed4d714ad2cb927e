//! Raw field state behind the add and edit card dialogs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use chrono::NaiveDate;

use crate::domain::color::{normalize_hex_color, DEFAULT_CARD_COLOR};
use crate::domain::error::{BoardError, BoardResult};
use crate::domain::models::{Assignee, Card, CardDraft, Priority};

#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` as produced by `<input type="date">`; empty means no due date.
    pub due_date: String,
    /// Comma separated.
    pub labels: String,
    pub background_color: String,
    /// Empty means unassigned.
    pub assignee_id: String,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::blank(DEFAULT_CARD_COLOR)
    }
}

impl CardForm {
    pub fn blank(background_color: &str) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: String::new(),
            labels: String::new(),
            background_color: background_color.to_string(),
            assignee_id: String::new(),
        }
    }

    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            priority: card.priority,
            due_date: card
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            labels: card.labels.join(", "),
            background_color: card.background().to_string(),
            assignee_id: card
                .assignee
                .as_ref()
                .map(|a| a.id.clone())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self, roster: &[Assignee]) -> BoardResult<CardDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| BoardError::InvalidDueDate(raw.to_string()))?,
            ),
        };

        let background_color = normalize_hex_color(&self.background_color)
            .ok_or_else(|| BoardError::InvalidColor(self.background_color.clone()))?;

        let assignee = match self.assignee_id.as_str() {
            "" => None,
            id => Some(
                roster
                    .iter()
                    .find(|a| a.id == id)
                    .cloned()
                    .ok_or_else(|| BoardError::UnknownAssignee(id.to_string()))?,
            ),
        };

        Ok(CardDraft {
            title: title.to_string(),
            description: self.description.clone(),
            priority: self.priority,
            due_date,
            assignee,
            labels: parse_labels(&self.labels),
            background_color: Some(background_color),
        })
    }
}

/// Split on commas, trim, drop blanks and repeats while keeping first-seen order.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in raw.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        if !labels.iter().any(|existing| existing == label) {
            labels.push(label.to_string());
        }
    }
    labels
}
