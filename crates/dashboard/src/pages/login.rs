//! Login page — the access gate in front of the dashboard.
//!
//! A convenience gate, not a security boundary: the comparison runs client
//! side against configured literals. Repeated failures are not rate limited.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tankview_domain::auth;

use crate::{config, session};

/// Two-field login form with an inline error slot.
///
/// On success the session flag is stored and the browser navigates to the
/// dashboard, which immediately runs one fetch cycle. On failure the inline
/// error is shown and the password field is cleared; the username stays.
#[component]
pub fn Login() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let navigate = use_navigate();

    // A session flag from a prior login bypasses the gate entirely.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if session::is_logged_in() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match auth::attempt_login(
            &config::credentials(),
            &username.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(auth::Session) => {
                session::store_login();
                set_error.set(None);
                navigate("/", NavigateOptions::default());
            }
            Err(err) => {
                set_error.set(Some(err.to_string()));
                set_password.set(String::new());
            }
        }
    };

    view! {
        <div class="login">
            <h1>"Water Tank Dashboard"</h1>
            <form class="login-form" on:submit=submit>
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Log in"</button>
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
