use leptos::prelude::*;

use super::{CardActions, CardView};
use crate::domain::models::{Column, ColumnId};

#[component]
pub fn KanbanColumn(
    column: Column,
    actions: CardActions,
    on_add_card: Callback<ColumnId>,
) -> impl IntoView {
    let column_id = column.id;
    let count = column.cards.len();
    let drag = actions.drag;

    view! {
        <div
            class="kanban-column"
            class:drop-ready=move || drag.is_active()
            data-column-id=column_id.as_str()
        >
            <div class=format!("column-header {}", column.color)>
                <div class="column-title-row">
                    <h3>{column.title.clone()}</h3>
                    <span class="badge task-count">{count}</span>
                </div>
                <button type="button" class="btn-ghost add-card-btn" on:click=move |_| on_add_card.run(column_id)>
                    "+ Add card"
                </button>
            </div>
            <div class="column-content">
                {column.cards.into_iter().map(|card| view! {
                    <CardView card=card actions=actions />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
