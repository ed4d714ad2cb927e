use leptos::prelude::*;

use crate::domain::models::{Priority, PriorityFilter};

#[component]
pub fn BoardHeader(
    #[prop(into)] title: String,
    #[prop(into)] user: String,
    search: RwSignal<String>,
    priority_filter: RwSignal<PriorityFilter>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-top">
                <h1>{title}</h1>
                <div class="kanban-actions">
                    <span class="signed-in-as">{user}</span>
                    <button type="button" class="btn-secondary logout-btn" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </div>
            <div class="kanban-filters">
                <div class="search-box">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="search"
                        placeholder="Search cards..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <select
                    class="priority-filter"
                    prop:value=move || priority_filter.get().as_str()
                    on:change=move |ev| priority_filter.set(PriorityFilter::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All Priorities"</option>
                    {Priority::all().into_iter().map(|priority| view! {
                        <option value=priority.as_str()>{priority.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </header>
    }
}
