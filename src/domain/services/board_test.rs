use super::*;
use chrono::TimeZone;

use crate::domain::models::{Priority, PriorityFilter};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn titles(board: &Board, column: ColumnId) -> Vec<&str> {
    board
        .column(column)
        .cards
        .iter()
        .map(|card| card.title.as_str())
        .collect()
}

#[test]
fn columns_are_fixed_and_ordered() {
    let board = Board::empty();
    let ids: Vec<ColumnId> = board.columns().iter().map(|c| c.id).collect();
    assert_eq!(ids, ColumnId::all().to_vec());
    assert_eq!(board.column(ColumnId::InProgress).title, "In Progress");
    assert_eq!(board.card_count(), 0);
}

#[test]
fn seeded_board_places_demo_cards() {
    let board = Board::seeded();
    assert_eq!(board.card_count(), 5);
    assert_eq!(
        titles(&board, ColumnId::Todo),
        vec!["Design new landing page", "Set up CI/CD pipeline"]
    );
    assert_eq!(titles(&board, ColumnId::InProgress), vec!["Implement user authentication"]);
    assert_eq!(titles(&board, ColumnId::Review), vec!["Update documentation"]);
    assert_eq!(titles(&board, ColumnId::Done), vec!["Database schema design"]);

    let landing = board.find_card("1").unwrap();
    assert_eq!(landing.due_date, chrono::NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(landing.assignee.as_ref().map(|a| a.name.as_str()), Some("Alice Johnson"));
}

#[test]
fn every_card_sits_in_the_column_it_names() {
    let board = Board::seeded();
    for column in board.columns() {
        assert!(column.cards.iter().all(|card| card.column_id == column.id));
    }
}

#[test]
fn add_card_appends_with_timestamp_id() {
    let mut board = Board::seeded();
    let id = board
        .add_card(ColumnId::Review, CardDraft::titled("Audit logs"), now())
        .unwrap();
    assert_eq!(id, now().timestamp_millis().to_string());

    let card = board.column(ColumnId::Review).cards.last().unwrap();
    assert_eq!(card.id, id);
    assert_eq!(card.column_id, ColumnId::Review);
    assert_eq!(card.created_at, now());
    assert_eq!(card.priority, Priority::Medium);
    assert_eq!(board.card_count(), 6);
}

#[test]
fn ids_stay_unique_within_the_same_millisecond() {
    let mut board = Board::empty();
    let first = board.add_card(ColumnId::Todo, CardDraft::titled("a"), now()).unwrap();
    let second = board.add_card(ColumnId::Todo, CardDraft::titled("b"), now()).unwrap();
    assert_ne!(first, second);
    assert_eq!(
        second.parse::<i64>().unwrap(),
        first.parse::<i64>().unwrap() + 1
    );
}

#[test]
fn add_card_rejects_blank_title() {
    let mut board = Board::empty();
    let err = board
        .add_card(ColumnId::Todo, CardDraft::titled("  "), now())
        .unwrap_err();
    assert!(matches!(err, BoardError::EmptyTitle));
    assert_eq!(board.card_count(), 0);
}

#[test]
fn update_card_edits_in_place() {
    let mut board = Board::seeded();
    let mut draft = CardDraft::titled("Set up CI");
    draft.priority = Priority::High;
    board.update_card("2", draft).unwrap();

    assert_eq!(titles(&board, ColumnId::Todo), vec!["Design new landing page", "Set up CI"]);
    let card = board.find_card("2").unwrap();
    assert_eq!(card.priority, Priority::High);
    assert_eq!(card.column_id, ColumnId::Todo);
}

#[test]
fn update_unknown_card_fails() {
    let mut board = Board::seeded();
    let err = board.update_card("nope", CardDraft::titled("x")).unwrap_err();
    assert!(matches!(err, BoardError::CardNotFound(ref id) if id == "nope"));
}

#[test]
fn delete_card_removes_only_that_card() {
    let mut board = Board::seeded();
    let removed = board.delete_card("1").unwrap();
    assert_eq!(removed.title, "Design new landing page");
    assert!(board.find_card("1").is_none());
    assert_eq!(titles(&board, ColumnId::Todo), vec!["Set up CI/CD pipeline"]);
    assert!(matches!(board.delete_card("1"), Err(BoardError::CardNotFound(_))));
}

#[test]
fn move_card_reassigns_column_and_appends() {
    let mut board = Board::seeded();
    assert!(board.move_card("1", ColumnId::Done).unwrap());

    assert_eq!(titles(&board, ColumnId::Todo), vec!["Set up CI/CD pipeline"]);
    assert_eq!(
        titles(&board, ColumnId::Done),
        vec!["Database schema design", "Design new landing page"]
    );
    assert_eq!(board.find_card("1").unwrap().column_id, ColumnId::Done);
    assert_eq!(board.card_count(), 5);
}

#[test]
fn dropping_on_own_column_changes_nothing() {
    let mut board = Board::seeded();
    let before = board.clone();
    assert!(!board.move_card("1", ColumnId::Todo).unwrap());
    assert_eq!(board, before);
}

#[test]
fn moving_unknown_card_fails_without_side_effects() {
    let mut board = Board::seeded();
    let before = board.clone();
    assert!(board.move_card("42", ColumnId::Done).is_err());
    assert_eq!(board, before);
}

#[test]
fn filtered_view_leaves_board_untouched() {
    let board = Board::seeded();
    let view = board.filtered(&CardFilter::new("", PriorityFilter::Only(Priority::High)));

    let counts: Vec<usize> = view.iter().map(|c| c.cards.len()).collect();
    assert_eq!(counts, vec![1, 1, 0, 1]);
    assert_eq!(view[2].title, "Review");
    assert_eq!(board.card_count(), 5);
}
