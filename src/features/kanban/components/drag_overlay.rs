use leptos::prelude::*;

use super::CardView;
use crate::domain::services::Board;
use crate::features::kanban::hooks::DragController;

/// Tilted copy of the dragged card that follows the pointer.
#[component]
pub fn DragOverlay(drag: DragController, board: ReadSignal<Board>) -> impl IntoView {
    // Only re-render the card when the dragged card changes, not on every move.
    let active_card = Memo::new(move |_| drag.active_card());

    move || {
        let card_id = active_card.get()?;
        let card = board.with(|b| b.find_card(&card_id).cloned())?;
        let position = move || {
            drag.pointer()
                .map(|p| format!("left: {}px; top: {}px;", p.x, p.y))
                .unwrap_or_default()
        };
        Some(view! {
            <div class="drag-overlay" style=position>
                <CardView card=card overlay=true />
            </div>
        })
    }
}
