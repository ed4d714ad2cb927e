//! In-memory board: the four columns and every card mutation.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use chrono::{DateTime, Utc};
use super::filter::CardFilter;
use super::seed::demo_cards;
use crate::domain::error::{BoardError, BoardResult};
use crate::domain::models::{Card, CardDraft, Column, ColumnId};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::all().into_iter().map(Column::new).collect(),
        }
    }

    /// The board a freshly signed-in user lands on.
    pub fn seeded() -> Self {
        Self::from_cards(demo_cards())
    }

    /// Build a board from cards, placing each one in the column it names.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut board = Self::empty();
        for card in cards {
            board.column_mut(card.column_id).cards.push(card);
        }
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        // Columns are built from ColumnId::all(), so every id is present.
        &self.columns[Self::column_index(id)]
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[Self::column_index(id)]
    }

    fn column_index(id: ColumnId) -> usize {
        ColumnId::all()
            .iter()
            .position(|candidate| *candidate == id)
            .unwrap_or_default()
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == card_id)
    }

    fn locate(&self, card_id: &str) -> BoardResult<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column
                    .cards
                    .iter()
                    .position(|card| card.id == card_id)
                    .map(|card_index| (column_index, card_index))
            })
            .ok_or_else(|| BoardError::CardNotFound(card_id.to_string()))
    }

    /// Ids derive from the creation instant in milliseconds, bumped until unique.
    fn next_card_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.find_card(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Append a new card to the end of `column_id` and return its id.
    pub fn add_card(&mut self, column_id: ColumnId, draft: CardDraft, now: DateTime<Utc>) -> BoardResult<String> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let id = self.next_card_id(now);
        let card = Card::from_draft(id.clone(), column_id, draft, now);
        self.column_mut(column_id).cards.push(card);
        Ok(id)
    }

    pub fn update_card(&mut self, card_id: &str, draft: CardDraft) -> BoardResult<()> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let (column_index, card_index) = self.locate(card_id)?;
        self.columns[column_index].cards[card_index].apply(draft);
        Ok(())
    }

    pub fn delete_card(&mut self, card_id: &str) -> BoardResult<Card> {
        let (column_index, card_index) = self.locate(card_id)?;
        Ok(self.columns[column_index].cards.remove(card_index))
    }

    /// Move a card to the end of `target`. Returns whether anything changed;
    /// dropping a card on its own column is a no-op.
    pub fn move_card(&mut self, card_id: &str, target: ColumnId) -> BoardResult<bool> {
        let (column_index, card_index) = self.locate(card_id)?;
        if self.columns[column_index].id == target {
            return Ok(false);
        }
        let mut card = self.columns[column_index].cards.remove(card_index);
        card.column_id = target;
        self.column_mut(target).cards.push(card);
        Ok(true)
    }

    /// Copy of the columns holding only the cards that pass `filter`.
    pub fn filtered(&self, filter: &CardFilter) -> Vec<Column> {
        self.columns
            .iter()
            .map(|column| Column {
                cards: column
                    .cards
                    .iter()
                    .filter(|card| filter.matches(card))
                    .cloned()
                    .collect(),
                id: column.id,
                title: column.title.clone(),
                color: column.color.clone(),
            })
            .collect()
    }
}
