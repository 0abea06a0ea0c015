use dioxus::prelude::*;
use serde_json::Value;

/// Pretty-print the report structure for display.
pub fn format_report(report: &Value) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

/// Shows the last fetched report as indented JSON, verbatim. The report is
/// trusted diagnostic output from the server, not user content, so it is
/// rendered as text without interpretation.
#[component]
pub fn ReportView(report: Option<Value>) -> Element {
    match report {
        None => rsx! {},
        Some(report) => rsx! {
            pre {
                class: "report-area",
                "{format_report(&report)}"
            }
        },
    }
}
