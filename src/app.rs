use leptos::prelude::*;

use crate::domain::models::{AuthState, Credentials};
use crate::domain::BoardConfig;
use crate::pages::{BoardPage, Login};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // Signed-in user decides which page is mounted.
    let auth = RwSignal::new(AuthState::default());

    provide_context(config);

    let login = Callback::new(move |credentials: Credentials| {
        let user = auth
            .try_update(|state| state.login(&credentials).to_string())
            .unwrap_or_default();
        log::info!("Signed in as {}", user);
    });

    let logout = Callback::new(move |_: ()| {
        auth.update(AuthState::logout);
        log::info!("Signed out");
    });

    let signed_in = Memo::new(move |_| auth.with(|state| state.user().map(str::to_string)));

    view! {
        <main class="app">
            {move || match signed_in.get() {
                Some(user) => view! { <BoardPage user=user on_logout=logout /> }.into_any(),
                None => view! { <Login on_login=login /> }.into_any(),
            }}
        </main>
    }
}
