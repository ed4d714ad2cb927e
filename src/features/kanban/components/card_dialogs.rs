use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use super::ColorPicker;
use crate::domain::models::{Assignee, Card, CardDraft, ColumnId, Priority};
use crate::domain::services::CardForm;

// Inputs shared by the add and edit dialogs.
#[component]
fn CardFormFields(
    form: RwSignal<CardForm>,
    roster: Vec<Assignee>,
    id_prefix: &'static str,
) -> impl IntoView {
    let field_id = move |name: &str| format!("{id_prefix}-{name}");
    let selected_color = Signal::derive(move || form.with(|f| f.background_color.clone()));
    let pick_color = Callback::new(move |color: String| form.update(|f| f.background_color = color));

    view! {
        <div class="form-group">
            <label for=field_id("title")>"TITLE"</label>
            <input
                id=field_id("title")
                type="text"
                placeholder="Enter card title..."
                required
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for=field_id("description")>"DESCRIPTION"</label>
            <textarea
                id=field_id("description")
                placeholder="Enter card description..."
                rows="3"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for=field_id("labels")>"LABELS"</label>
            <input
                id=field_id("labels")
                type="text"
                placeholder="Design, Frontend"
                prop:value=move || form.with(|f| f.labels.clone())
                on:input=move |ev| form.update(|f| f.labels = event_target_value(&ev))
            />
        </div>
        <ColorPicker selected=selected_color on_select=pick_color />
        <div class="form-row">
            <div class="form-group">
                <label for=field_id("priority")>"PRIORITY"</label>
                <select
                    id=field_id("priority")
                    prop:value=move || form.with(|f| f.priority.as_str())
                    on:change=move |ev| {
                        let priority: Priority = event_target_value(&ev).parse().unwrap_or_default();
                        form.update(|f| f.priority = priority);
                    }
                >
                    {Priority::all().into_iter().map(|priority| view! {
                        <option value=priority.as_str()>{priority.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>
            <div class="form-group">
                <label for=field_id("due")>"DUE DATE"</label>
                <input
                    id=field_id("due")
                    type="date"
                    prop:value=move || form.with(|f| f.due_date.clone())
                    on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                />
            </div>
        </div>
        <div class="form-group">
            <label for=field_id("assignee")>"ASSIGNEE"</label>
            <select
                id=field_id("assignee")
                prop:value=move || form.with(|f| f.assignee_id.clone())
                on:change=move |ev| form.update(|f| f.assignee_id = event_target_value(&ev))
            >
                <option value="">"Unassigned"</option>
                {roster.into_iter().map(|member| view! {
                    <option value=member.id.clone()>{member.name.clone()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}

#[component]
pub fn AddCardDialog(
    target: RwSignal<Option<ColumnId>>,
    roster: Vec<Assignee>,
    #[prop(into)] default_color: String,
    on_create: Callback<(ColumnId, CardDraft), bool>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let form = RwSignal::new(CardForm::blank(&default_color));
    let (error, set_error) = signal::<Option<String>>(None);

    // The dialog stays mounted; the target column decides whether it is showing.
    Effect::new(move |_| {
        let wanted = target.get().is_some();
        if let Some(dialog) = dialog_ref.get() {
            if wanted && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !wanted && dialog.open() {
                dialog.close();
            }
        }
    });

    let close_modal = move |_| {
        set_error.set(None);
        target.set(None);
    };

    let validation_roster = roster.clone();
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(column_id) = target.get_untracked() else {
            return;
        };
        match form.with_untracked(|f| f.validate(&validation_roster)) {
            Ok(draft) => {
                if on_create.run((column_id, draft)) {
                    form.set(CardForm::blank(&default_color));
                    set_error.set(None);
                    target.set(None);
                } else {
                    set_error.set(Some("The card could not be added.".to_string()));
                }
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let heading = move || {
        target
            .get()
            .map(|column| format!("ADD CARD TO {}", column.title().to_uppercase()))
            .unwrap_or_else(|| "ADD CARD".to_string())
    };

    view! {
        <dialog node_ref=dialog_ref class="card-modal" on:close=move |_| target.set(None)>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{heading}</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <CardFormFields form=form roster=roster id_prefix="add" />
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"ADD CARD"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

#[component]
pub fn EditCardDialog(
    card: Card,
    roster: Vec<Assignee>,
    on_update: Callback<(String, CardDraft), bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let form = RwSignal::new(CardForm::from_card(&card));
    let (error, set_error) = signal::<Option<String>>(None);

    // Mounted only while a card is being edited, so open as soon as the element exists.
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    let validation_roster = roster.clone();
    let handle_submit = {
        let card_id = card.id.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            match form.with_untracked(|f| f.validate(&validation_roster)) {
                Ok(draft) => {
                    if on_update.run((card_id.clone(), draft)) {
                        on_close.run(());
                    } else {
                        set_error.set(Some("This card no longer exists.".to_string()));
                    }
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="card-modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT CARD"</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <CardFormFields form=form roster=roster id_prefix="edit" />
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"UPDATE CARD"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
