use leptos::prelude::*;

use crate::domain::models::{CardDraft, ColumnId};
use crate::domain::services::Board;
use crate::domain::BoardConfig;
use crate::features::kanban::services::{create_card, delete_card, move_card, update_card};

#[cfg(test)]
#[path = "use_board_test.rs"]
mod use_board_test;

pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub create_card: Callback<(ColumnId, CardDraft), bool>,
    pub update_card: Callback<(String, CardDraft), bool>,
    pub delete_card: Callback<String>,
    pub move_card: Callback<(String, ColumnId)>,
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    // Nothing is persisted: every mount starts from the demo data (or empty).
    let board = RwSignal::new(if config.seed_demo_data {
        Board::seeded()
    } else {
        Board::empty()
    });
    log::debug!("Board mounted with {} cards", board.with_untracked(Board::card_count));

    let create = Callback::new(move |(column_id, draft): (ColumnId, CardDraft)| {
        create_card(column_id, draft, board).is_some()
    });

    let update = Callback::new(move |(card_id, draft): (String, CardDraft)| {
        update_card(card_id, draft, board)
    });

    let delete = Callback::new(move |card_id: String| {
        delete_card(card_id, board);
    });

    let relocate = Callback::new(move |(card_id, target): (String, ColumnId)| {
        move_card(card_id, target, board);
    });

    BoardHook {
        board: board.read_only(),
        create_card: create,
        update_card: update,
        delete_card: delete,
        move_card: relocate,
    }
}
