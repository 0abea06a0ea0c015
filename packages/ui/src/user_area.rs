use dioxus::prelude::*;
use store::UserInfo;

use crate::auth::LogoutButton;

/// The identity widget in the page header: a placeholder when nobody is signed
/// in, otherwise a greeting with the user's role and the logout control.
#[component]
pub fn UserArea(user: Option<UserInfo>) -> Element {
    match user {
        None => rsx! {
            span {
                class: "user-area",
                em { "Not authenticated" }
            }
        },
        Some(user) => rsx! {
            span {
                class: "user-area",
                "Hello "
                strong { "{user.name}" }
                " ({user.role}) "
                LogoutButton {}
            }
        },
    }
}
