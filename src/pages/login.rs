use leptos::ev;
use leptos::prelude::*;

use crate::domain::models::Credentials;

#[component]
pub fn Login(on_login: Callback<Credentials>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // Any input is accepted; there is no account store behind this form.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_login.run(Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=handle_submit>
                <h1>"Kanban Board"</h1>
                <p class="login-subtitle">"Sign in to your board"</p>
                <div class="form-group">
                    <label for="login-email">"EMAIL"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"PASSWORD"</label>
                    <input
                        id="login-password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary login-btn">"SIGN IN"</button>
            </form>
        </div>
    }
}
