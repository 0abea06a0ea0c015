use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Default API base, baked in at build time. Override with the
/// `HELPDESK_API_BASE` environment variable when compiling.
const DEFAULT_API_BASE: &str = "https://helpdesk-1-oxo6.onrender.com";

fn api_base() -> &'static str {
    option_env!("HELPDESK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| api::ApiClient::new(api_base()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the view matching the restored session.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    if auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
