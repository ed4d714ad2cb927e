use leptos::prelude::*;

use crate::domain::color::CARD_COLORS;

#[component]
pub fn ColorPicker(
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"CARD COLOR"</label>
            <div class="color-grid">
                {CARD_COLORS.iter().map(|color| {
                    let value = color.value;
                    view! {
                        <button
                            type="button"
                            class="color-swatch"
                            class:selected=move || selected.with(|current| current == value)
                            style=format!("background-color: {value};")
                            title=color.label
                            on:click=move |_| on_select.run(value.to_string())
                        ></button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
