use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::domain::models::{Card, ColumnId, PriorityFilter};
use crate::domain::services::{team, CardFilter};
use crate::domain::BoardConfig;
use crate::features::kanban::{
    use_board, use_drag, AddCardDialog, BoardHeader, BoardHook, CardActions, DragOverlay,
    EditCardDialog, KanbanColumn,
};

#[component]
pub fn BoardPage(#[prop(into)] user: String, on_logout: Callback<()>) -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();

    // Board state lives and dies with this page; logging out discards it.
    let BoardHook {
        board,
        create_card,
        update_card,
        delete_card,
        move_card,
    } = use_board(&config);
    let drag = use_drag(config.drag_activation_distance);
    let roster = team();

    let search = RwSignal::new(String::new());
    let priority_filter = RwSignal::new(PriorityFilter::All);

    // Which card's dropdown is open (card id)
    let open_menu = RwSignal::new(None::<String>);
    // Column the add dialog is targeting; None keeps the dialog closed
    let add_target = RwSignal::new(None::<ColumnId>);
    let (editing_card, set_editing_card) = signal::<Option<Card>>(None);

    let filtered_columns = move || {
        let filter = CardFilter::new(&search.get(), priority_filter.get());
        board.with(|b| b.filtered(&filter))
    };

    let actions = CardActions {
        open_menu,
        drag,
        on_edit: Callback::new(move |card: Card| set_editing_card.set(Some(card))),
        on_delete: delete_card,
    };
    let on_add_card = Callback::new(move |column_id: ColumnId| add_target.set(Some(column_id)));

    let release = move |ev: PointerEvent| {
        if let Some(dropped) = drag.release(&ev) {
            move_card.run((dropped.card_id, dropped.column));
        }
    };

    let edit_dialog = {
        let roster = roster.clone();
        move || {
            editing_card.get().map(|card| {
                let on_close = Callback::new(move |_: ()| set_editing_card.set(None));
                view! {
                    <EditCardDialog
                        card=card
                        roster=roster.clone()
                        on_update=update_card
                        on_close=on_close
                    />
                }
            })
        }
    };

    view! {
        <div
            class="board-page"
            class:dragging=move || drag.is_active()
            on:click=move |_| open_menu.set(None)
            on:pointermove=move |ev: PointerEvent| drag.motion(&ev)
            on:pointerup=release
            on:pointerleave=move |_| drag.cancel()
            on:pointercancel=move |_| drag.cancel()
        >
            <BoardHeader
                title=config.title.clone()
                user=user
                search=search
                priority_filter=priority_filter
                on_logout=on_logout
            />

            <div class="kanban-board">
                {move || {
                    filtered_columns()
                        .into_iter()
                        .map(|column| view! {
                            <KanbanColumn
                                column=column
                                actions=actions
                                on_add_card=on_add_card
                            />
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <DragOverlay drag=drag board=board />

            <AddCardDialog
                target=add_target
                roster=roster
                default_color=config.default_card_color.clone()
                on_create=create_card
            />

            {edit_dialog}
        </div>
    }
}
