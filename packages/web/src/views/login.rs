//! Login page view with the email/password form.

use api::ApiClient;
use dioxus::prelude::*;
use store::SessionStore;
use ui::{session_store, use_auth, AuthState, Status, StatusLine};

use crate::Route;

/// Login page component. On success the session is persisted and the router
/// moves to the dashboard; on failure the form stays put and the status line
/// carries the message.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(Status::default);

    // Already signed in: nothing to do here.
    if auth().user.is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            status.set(Status::info("Signing in..."));
            let email = email().trim().to_string();
            let password = password().trim().to_string();
            match api.login(&email, &password).await {
                Ok(user) => {
                    session_store().save(&user);
                    status.set(Status::info("Signed in"));
                    auth.set(AuthState { user: Some(user) });
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("login failed: {}", err);
                    status.set(Status::error(err.user_message("Login failed")));
                }
            }
        });
    };

    rsx! {
        section {
            class: "login-section card",

            h1 { "Helpdesk" }
            p { class: "subtitle", "Sign in to manage support cases" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button { class: "primary", r#type: "submit", "Sign in" }

                StatusLine { status: status() }
            }
        }
    }
}
