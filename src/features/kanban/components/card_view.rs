use chrono::Utc;
use leptos::prelude::*;
use web_sys::PointerEvent;

use super::CardMenu;
use crate::domain::color::label_color;
use crate::domain::models::Card;
use crate::features::kanban::hooks::DragController;

/// Everything an interactive card on the board needs from the page.
/// The drag overlay renders cards without it.
#[derive(Clone, Copy)]
pub struct CardActions {
    pub open_menu: RwSignal<Option<String>>,
    pub drag: DragController,
    pub on_edit: Callback<Card>,
    pub on_delete: Callback<String>,
}

#[component]
pub fn CardView(
    card: Card,
    #[prop(optional)] actions: Option<CardActions>,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let overdue = card.is_overdue(Utc::now());
    let text_color = card.text_color();
    let background = card.background().to_string();
    let drag = actions.as_ref().map(|a| a.drag);

    let is_drag_source = {
        let card_id = card.id.clone();
        move || drag.is_some_and(|d| d.is_dragging(&card_id))
    };

    let style = move || {
        let opacity = if is_drag_source() { "0.5" } else { "1" };
        format!("background-color: {background}; opacity: {opacity};")
    };

    let on_press = {
        let card_id = card.id.clone();
        move |ev: PointerEvent| {
            if let Some(drag) = drag {
                drag.press(&card_id, &ev);
            }
        }
    };

    let menu = actions.map(|actions| {
        view! {
            <CardMenu
                card=card.clone()
                open_menu=actions.open_menu
                text_color=text_color
                on_edit=actions.on_edit
                on_delete=actions.on_delete
            />
        }
    });

    let description = (!card.description.is_empty()).then(|| {
        view! {
            <p class="card-description" style=format!("color: {text_color}; opacity: 0.8;")>
                {card.description.clone()}
            </p>
        }
    });

    let labels = (!card.labels.is_empty()).then(|| {
        view! {
            <div class="card-labels">
                {card.labels.iter().enumerate().map(|(index, label)| view! {
                    <span class=format!("badge label-badge {}", label_color(index))>{label.clone()}</span>
                }).collect::<Vec<_>>()}
            </div>
        }
    });

    let due = card.due_date_label().map(|label| {
        let (icon, color, opacity) = if overdue {
            ("⚠", "#dc2626", "1")
        } else {
            ("📅", text_color, "0.7")
        };
        view! {
            <span class="card-due" class:overdue=move || overdue style=format!("color: {color}; opacity: {opacity};")>
                {icon} " " {label}
            </span>
        }
    });

    let assignee = card.assignee.clone().map(|assignee| {
        view! {
            <span class="avatar" title=assignee.name.clone()>{assignee.initials()}</span>
        }
    });

    view! {
        <div
            class="kanban-card"
            class:overdue=move || overdue
            class:drag-overlay-card=move || overlay
            data-card-id=card.id.clone()
            style=style
            on:pointerdown=on_press
        >
            <div class="card-header">
                <h4 class="card-title" style=format!("color: {text_color};")>{card.title.clone()}</h4>
                {menu}
            </div>
            {description}
            {labels}
            <div class="card-footer">
                <div class="card-meta">
                    <span class="card-priority">
                        <span class=format!("priority-dot {}", card.priority.indicator_class())></span>
                        <span style=format!("color: {text_color}; opacity: 0.7;")>{card.priority.label()}</span>
                    </span>
                    {due}
                </div>
                {assignee}
            </div>
        </div>
    }
}
