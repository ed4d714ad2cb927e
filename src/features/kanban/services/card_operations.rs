use chrono::Utc;
use leptos::prelude::*;

use crate::domain::models::{CardDraft, ColumnId};
use crate::domain::services::Board;
use crate::domain::BoardResult;

#[cfg(test)]
#[path = "card_operations_test.rs"]
mod card_operations_test;

// Run a board mutation through the signal, logging rejected operations.
fn mutate<T>(
    board_signal: RwSignal<Board>,
    action: &str,
    op: impl FnOnce(&mut Board) -> BoardResult<T>,
) -> Option<T> {
    match board_signal.try_update(op) {
        Some(Ok(value)) => Some(value),
        Some(Err(e)) => {
            log::warn!("{} rejected: {}", action, e);
            None
        }
        None => {
            log::error!("{} skipped: board signal is disposed", action);
            None
        }
    }
}

// Create a card at the bottom of a column
pub fn create_card(
    column_id: ColumnId,
    draft: CardDraft,
    board_signal: RwSignal<Board>,
) -> Option<String> {
    let card_id = mutate(board_signal, "create card", |board| {
        board.add_card(column_id, draft, Utc::now())
    })?;
    log::info!("Created card {} in {}", card_id, column_id);
    Some(card_id)
}

// Replace the editable fields of a card
pub fn update_card(card_id: String, draft: CardDraft, board_signal: RwSignal<Board>) -> bool {
    let updated = mutate(board_signal, "update card", |board| board.update_card(&card_id, draft)).is_some();
    if updated {
        log::info!("Updated card {}", card_id);
    }
    updated
}

// Delete a card
pub fn delete_card(card_id: String, board_signal: RwSignal<Board>) {
    if let Some(card) = mutate(board_signal, "delete card", |board| board.delete_card(&card_id)) {
        log::info!("Deleted card {} ({})", card.id, card.title);
    }
}

// Move a card to another column after a drop
pub fn move_card(card_id: String, target: ColumnId, board_signal: RwSignal<Board>) {
    match mutate(board_signal, "move card", |board| board.move_card(&card_id, target)) {
        Some(true) => log::info!("Moved card {} to {}", card_id, target),
        Some(false) => log::debug!("Card {} dropped on its own column", card_id),
        None => {}
    }
}
