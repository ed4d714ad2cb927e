use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::domain::drag::{CardDrop, DragState, Point};
use crate::domain::models::ColumnId;

/// Pointer handlers shared by every card and the board grid.
#[derive(Clone, Copy)]
pub struct DragController {
    state: RwSignal<DragState>,
    activation_distance: f64,
}

fn pointer_position(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

// Column element under the pointer, found through its data-column-id attribute.
fn column_at(point: Point) -> Option<ColumnId> {
    let document = web_sys::window()?.document()?;
    let element = document.element_from_point(point.x as f32, point.y as f32)?;
    let column = element.closest("[data-column-id]").ok()??;
    column.get_attribute("data-column-id")?.parse().ok()
}

impl DragController {
    pub fn is_active(&self) -> bool {
        self.state.with(|state| state.active_card().is_some())
    }

    pub fn is_dragging(&self, card_id: &str) -> bool {
        self.state.with(|state| state.is_dragging(card_id))
    }

    pub fn active_card(&self) -> Option<String> {
        self.state.with(|state| state.active_card().map(str::to_string))
    }

    pub fn pointer(&self) -> Option<Point> {
        self.state.with(DragState::pointer)
    }

    pub fn press(&self, card_id: &str, ev: &PointerEvent) {
        // Primary button only.
        if ev.button() != 0 {
            return;
        }
        let at = pointer_position(ev);
        self.state.update_untracked(|state| state.press(card_id, at));
    }

    pub fn motion(&self, ev: &PointerEvent) {
        if self.state.with_untracked(|state| *state == DragState::Idle) {
            return;
        }
        let at = pointer_position(ev);
        let distance = self.activation_distance;
        // Pending presses change silently; subscribers only hear about real drags.
        let progress = self.state.try_update_untracked(|state| {
            let started = state.motion(at, distance);
            (started, state.active_card().map(str::to_string))
        });
        if let Some((started, Some(card_id))) = progress {
            if started {
                log::debug!("Drag started for card {}", card_id);
            }
            self.state.notify();
        }
    }

    pub fn release(&self, ev: &PointerEvent) -> Option<CardDrop> {
        let was_active = self.state.with_untracked(|state| state.active_card().is_some());
        let target = if was_active {
            column_at(pointer_position(ev))
        } else {
            None
        };
        let outcome = self
            .state
            .try_update_untracked(|state| state.release(target))
            .flatten();
        if was_active {
            self.state.notify();
            if outcome.is_none() {
                log::debug!("Drag released outside any column");
            }
        }
        outcome
    }

    pub fn cancel(&self) {
        if self.state.with_untracked(|state| *state != DragState::Idle) {
            self.state.update(DragState::cancel);
        }
    }
}

pub fn use_drag(activation_distance: f64) -> DragController {
    DragController {
        state: RwSignal::new(DragState::Idle),
        activation_distance,
    }
}
