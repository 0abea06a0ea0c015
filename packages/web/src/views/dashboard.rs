//! Dashboard view: case list, case creation, and the aggregate report.

use api::{ApiClient, CaseInfo, NewCase};
use dioxus::prelude::*;
use serde_json::Value;
use ui::{use_auth, CaseList, ReportView, Status, StatusLine, UserArea};

use crate::Route;

/// The numeric user-id field of the case form, with the legacy fallback: empty,
/// non-numeric, or zero input becomes user 1.
fn parse_user_id(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n != 0 => n,
        _ => 1,
    }
}

/// Dashboard page component. Requires a session; renders the identity widget and
/// the three action sections, each with its own status line.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let api = use_context::<ApiClient>();
    let nav = use_navigator();

    let mut cases = use_signal(Vec::<CaseInfo>::new);
    let mut cases_status = use_signal(Status::default);

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut user_id = use_signal(String::new);
    let mut create_status = use_signal(Status::default);

    let mut report = use_signal(|| Option::<Value>::None);
    let mut report_status = use_signal(Status::default);

    // Overlapping refreshes are allowed; whichever response resolves last is the
    // one left on screen.
    let load_cases = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                cases_status.set(Status::info("Loading..."));
                match api.list_cases().await {
                    Ok(list) => {
                        cases.set(list);
                        cases_status.set(Status::default());
                    }
                    Err(err) => {
                        tracing::error!("loading cases failed: {}", err);
                        cases_status.set(Status::error(err.user_message("Failed to load cases")));
                    }
                }
            });
        }
    };

    // Initial load, once per mount.
    use_effect({
        let load_cases = load_cases.clone();
        move || {
            if auth.peek().user.is_some() {
                load_cases();
            }
        }
    });

    let handle_create = {
        let api = api.clone();
        let load_cases = load_cases.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let load_cases = load_cases.clone();
            spawn(async move {
                create_status.set(Status::info("Creating..."));
                let uid = parse_user_id(&user_id());
                let new_case = NewCase {
                    title: title().trim().to_string(),
                    description: description().trim().to_string(),
                    assigned_to: uid,
                    user_id: uid,
                };
                match api.create_case(&new_case).await {
                    Ok(_) => {
                        create_status.set(Status::info("Case created"));
                        title.set(String::new());
                        description.set(String::new());
                        load_cases();
                    }
                    Err(err) => {
                        tracing::error!("creating case failed: {}", err);
                        create_status
                            .set(Status::error(err.user_message("Failed to create case")));
                    }
                }
            });
        }
    };

    let handle_report = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                report_status.set(Status::info("Generating..."));
                match api.report().await {
                    Ok(value) => {
                        report.set(Some(value));
                        report_status.set(Status::default());
                    }
                    Err(err) => {
                        tracing::error!("fetching report failed: {}", err);
                        report_status
                            .set(Status::error(err.user_message("Failed to generate report")));
                    }
                }
            });
        }
    };

    // No session: back to the login view.
    if auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "topbar",
                h1 { "Helpdesk" }
                UserArea { user: auth().user }
            }

            section {
                class: "card",
                div {
                    class: "section-head",
                    h2 { "Cases" }
                    button {
                        class: "secondary",
                        onclick: {
                            let load_cases = load_cases.clone();
                            move |_| load_cases()
                        },
                        "Refresh"
                    }
                }
                StatusLine { status: cases_status() }
                CaseList { cases: cases() }
            }

            section {
                class: "card",
                h2 { "New case" }
                form {
                    class: "case-form",
                    onsubmit: handle_create,

                    label { r#for: "case-title", "Title" }
                    input {
                        id: "case-title",
                        r#type: "text",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }

                    label { r#for: "case-description", "Description" }
                    input {
                        id: "case-description",
                        r#type: "text",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }

                    label { r#for: "case-user-id", "User id" }
                    input {
                        id: "case-user-id",
                        r#type: "number",
                        placeholder: "1",
                        value: user_id(),
                        oninput: move |evt| user_id.set(evt.value()),
                    }

                    button { class: "primary", r#type: "submit", "Create" }

                    StatusLine { status: create_status() }
                }
            }

            section {
                class: "card",
                div {
                    class: "section-head",
                    h2 { "Report" }
                    button {
                        class: "secondary",
                        onclick: handle_report,
                        "Generate"
                    }
                }
                StatusLine { status: report_status() }
                ReportView { report: report() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_user_id;

    #[test]
    fn test_parse_user_id_accepts_positive_numbers() {
        assert_eq!(parse_user_id("7"), 7);
        assert_eq!(parse_user_id("  42 "), 42);
    }

    #[test]
    fn test_parse_user_id_falls_back_to_one() {
        assert_eq!(parse_user_id(""), 1);
        assert_eq!(parse_user_id("abc"), 1);
        assert_eq!(parse_user_id("0"), 1);
        assert_eq!(parse_user_id("2.5"), 1);
    }

    #[test]
    fn test_parse_user_id_keeps_negative_numbers() {
        // Matches the numeric-or-default rule: only failure and zero fall back.
        assert_eq!(parse_user_id("-3"), -3);
    }
}
