use super::*;
use leptos::reactive::owner::Owner;

fn seeded_signal() -> (Owner, RwSignal<Board>) {
    let owner = Owner::new();
    owner.set();
    let board = RwSignal::new(Board::seeded());
    (owner, board)
}

fn column_ids(board: RwSignal<Board>, column: ColumnId) -> Vec<String> {
    board.with_untracked(|b| b.column(column).cards.iter().map(|c| c.id.clone()).collect())
}

#[test]
fn create_card_appends_to_signal_and_returns_id() {
    let (_owner, board) = seeded_signal();
    let id = create_card(ColumnId::Review, CardDraft::titled("Audit logs"), board).unwrap();

    assert_eq!(column_ids(board, ColumnId::Review), vec!["4".to_string(), id.clone()]);
    let card = board.with_untracked(|b| b.find_card(&id).cloned()).unwrap();
    assert_eq!(card.title, "Audit logs");
    assert_eq!(card.column_id, ColumnId::Review);
}

#[test]
fn rejected_create_leaves_board_alone() {
    let (_owner, board) = seeded_signal();
    let before = board.get_untracked();
    assert_eq!(create_card(ColumnId::Todo, CardDraft::titled("   "), board), None);
    assert_eq!(board.get_untracked(), before);
}

#[test]
fn update_card_reports_outcome() {
    let (_owner, board) = seeded_signal();
    assert!(update_card("3".to_string(), CardDraft::titled("Implement SSO"), board));
    let title = board.with_untracked(|b| b.find_card("3").map(|c| c.title.clone()));
    assert_eq!(title.as_deref(), Some("Implement SSO"));

    let before = board.get_untracked();
    assert!(!update_card("missing".to_string(), CardDraft::titled("x"), board));
    assert_eq!(board.get_untracked(), before);
}

#[test]
fn delete_card_removes_only_known_cards() {
    let (_owner, board) = seeded_signal();
    delete_card("1".to_string(), board);
    assert_eq!(board.with_untracked(Board::card_count), 4);
    assert_eq!(column_ids(board, ColumnId::Todo), vec!["2".to_string()]);

    delete_card("1".to_string(), board);
    assert_eq!(board.with_untracked(Board::card_count), 4);
}

#[test]
fn move_card_relocates_to_end_of_target() {
    let (_owner, board) = seeded_signal();
    move_card("1".to_string(), ColumnId::Done, board);

    assert_eq!(column_ids(board, ColumnId::Todo), vec!["2".to_string()]);
    assert_eq!(column_ids(board, ColumnId::Done), vec!["5".to_string(), "1".to_string()]);
    let column = board.with_untracked(|b| b.find_card("1").map(|c| c.column_id));
    assert_eq!(column, Some(ColumnId::Done));
}

#[test]
fn move_card_onto_own_column_changes_nothing() {
    let (_owner, board) = seeded_signal();
    let before = board.get_untracked();
    move_card("1".to_string(), ColumnId::Todo, board);
    move_card("missing".to_string(), ColumnId::Done, board);
    assert_eq!(board.get_untracked(), before);
}
