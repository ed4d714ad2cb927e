use leptos::prelude::*;
use web_sys::{MouseEvent, PointerEvent};

use crate::domain::models::Card;

#[component]
pub fn CardMenu(
    card: Card,
    open_menu: RwSignal<Option<String>>,
    text_color: &'static str,
    on_edit: Callback<Card>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_menu = {
        let card_id = card.id.clone();
        move |e: MouseEvent| {
            e.stop_propagation();
            open_menu.update(|open| {
                *open = if open.as_deref() == Some(card_id.as_str()) {
                    None
                } else {
                    Some(card_id.clone())
                };
            });
        }
    };

    let is_open = {
        let card_id = card.id.clone();
        move || open_menu.with(|open| open.as_deref() == Some(card_id.as_str()))
    };

    view! {
        // Pressing the menu must not arm a drag on the card underneath.
        <div class="card-menu" on:pointerdown=|e: PointerEvent| e.stop_propagation()>
            <button
                type="button"
                class="card-menu-btn"
                title="Card actions"
                style=format!("color: {text_color};")
                on:click=toggle_menu
            >"⋯"</button>

            <div class="card-dropdown" class:show=is_open>
                <button type="button" class="dropdown-item edit-item" on:click={
                    let card = card.clone();
                    move |e: MouseEvent| { e.stop_propagation(); open_menu.set(None); on_edit.run(card.clone()); }
                }>"✎ Edit"</button>
                <button type="button" class="dropdown-item delete-item" on:click={
                    let id = card.id.clone();
                    move |e: MouseEvent| { e.stop_propagation(); open_menu.set(None); on_delete.run(id.clone()); }
                }>"🗑 Delete"</button>
            </div>
        </div>
    }
}
