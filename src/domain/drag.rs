//! Pointer drag state for moving cards between columns.
//!
//! A press only arms the drag. It becomes active once the pointer has moved
//! past the activation distance, so plain clicks on a card (opening its menu,
//! selecting text) never move it.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use super::models::ColumnId;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Pending { card_id: String, origin: Point },
    Active { card_id: String, pointer: Point },
}

/// A finished drag that landed on a column.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDrop {
    pub card_id: String,
    pub column: ColumnId,
}

impl DragState {
    pub fn press(&mut self, card_id: &str, at: Point) {
        *self = DragState::Pending {
            card_id: card_id.to_string(),
            origin: at,
        };
    }

    /// Feed pointer movement. Returns true when this call started the drag.
    pub fn motion(&mut self, at: Point, activation_distance: f64) -> bool {
        match self {
            DragState::Idle => false,
            DragState::Pending { card_id, origin } => {
                if origin.distance_to(at) <= activation_distance {
                    return false;
                }
                *self = DragState::Active {
                    card_id: std::mem::take(card_id),
                    pointer: at,
                };
                true
            }
            DragState::Active { pointer, .. } => {
                *pointer = at;
                false
            }
        }
    }

    /// Finish the gesture. Only an active drag over a column produces a drop.
    pub fn release(&mut self, target: Option<ColumnId>) -> Option<CardDrop> {
        match std::mem::take(self) {
            DragState::Active { card_id, .. } => target.map(|column| CardDrop { card_id, column }),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn active_card(&self) -> Option<&str> {
        match self {
            DragState::Active { card_id, .. } => Some(card_id),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        match self {
            DragState::Active { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }

    pub fn is_dragging(&self, card_id: &str) -> bool {
        self.active_card() == Some(card_id)
    }
}
