use crate::domain::models::{Card, PriorityFilter};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Search box and priority dropdown state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFilter {
    search: String,
    pub priority: PriorityFilter,
}

impl CardFilter {
    pub fn new(search: &str, priority: PriorityFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            priority,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        card.matches_text(&self.search) && self.priority.accepts(card.priority)
    }
}
