use super::*;

const DISTANCE: f64 = 8.0;

#[test]
fn idle_ignores_motion_and_release() {
    let mut state = DragState::default();
    assert!(!state.motion(Point::new(100.0, 100.0), DISTANCE));
    assert_eq!(state.release(Some(ColumnId::Done)), None);
    assert_eq!(state, DragState::Idle);
}

#[test]
fn small_motion_keeps_drag_pending() {
    let mut state = DragState::default();
    state.press("1", Point::new(10.0, 10.0));
    assert!(!state.motion(Point::new(15.0, 15.0), DISTANCE));
    assert!(!state.motion(Point::new(18.0, 10.0), DISTANCE));
    assert_eq!(state.active_card(), None);
}

#[test]
fn click_without_travel_never_drops() {
    let mut state = DragState::default();
    state.press("1", Point::new(10.0, 10.0));
    assert_eq!(state.release(Some(ColumnId::Done)), None);
    assert_eq!(state, DragState::Idle);
}

#[test]
fn passing_activation_distance_starts_drag_once() {
    let mut state = DragState::default();
    state.press("1", Point::new(0.0, 0.0));
    assert!(state.motion(Point::new(6.0, 6.0), DISTANCE));
    assert_eq!(state.active_card(), Some("1"));
    assert!(state.is_dragging("1"));
    assert!(!state.is_dragging("2"));

    assert!(!state.motion(Point::new(40.0, 12.0), DISTANCE));
    assert_eq!(state.pointer(), Some(Point::new(40.0, 12.0)));
}

#[test]
fn active_drag_over_column_yields_drop() {
    let mut state = DragState::default();
    state.press("3", Point::new(0.0, 0.0));
    state.motion(Point::new(0.0, 50.0), DISTANCE);
    assert_eq!(
        state.release(Some(ColumnId::Review)),
        Some(CardDrop {
            card_id: "3".to_string(),
            column: ColumnId::Review,
        })
    );
    assert_eq!(state, DragState::Idle);
}

#[test]
fn release_outside_columns_drops_nothing() {
    let mut state = DragState::default();
    state.press("3", Point::new(0.0, 0.0));
    state.motion(Point::new(0.0, 50.0), DISTANCE);
    assert_eq!(state.release(None), None);
    assert_eq!(state, DragState::Idle);
}

#[test]
fn cancel_resets() {
    let mut state = DragState::default();
    state.press("3", Point::new(0.0, 0.0));
    state.motion(Point::new(0.0, 50.0), DISTANCE);
    state.cancel();
    assert_eq!(state, DragState::Idle);
}
