//! Case list rendering.
//!
//! Each entry is a small HTML fragment built by [`case_entry_html`] and inserted
//! with `dangerous_inner_html`, so the user-supplied title and description are
//! run through [`escape_html`] first. Status and assignee come from the server's
//! own vocabulary and fall back to a placeholder dash when absent.

use api::CaseInfo;
use dioxus::prelude::*;

const PLACEHOLDER: &str = "\u{2014}";

/// Escape text for insertion into markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The inner HTML of one case entry: `#id title`, description, then status and
/// assignee on the detail line.
pub fn case_entry_html(case: &CaseInfo) -> String {
    let title = escape_html(&case.title);
    let description = escape_html(case.description.as_deref().unwrap_or(""));
    let status = case.status.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    let assignee = case
        .assignee_label()
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!(
        "<strong>#{} {title}</strong><br>\
         <small>{description}</small><br>\
         <em>Status: {status} \u{2022} Assigned: {assignee}</em>",
        case.id
    )
}

/// Renders the fetched cases in input order, or the empty-state placeholder.
#[component]
pub fn CaseList(cases: Vec<CaseInfo>) -> Element {
    if cases.is_empty() {
        return rsx! {
            ul {
                class: "case-list",
                li { "No cases" }
            }
        };
    }

    rsx! {
        ul {
            class: "case-list",
            for case in cases {
                li {
                    key: "{case.id}",
                    dangerous_inner_html: case_entry_html(&case),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: i64, title: &str) -> CaseInfo {
        CaseInfo {
            id,
            title: title.to_string(),
            description: None,
            status: None,
            assigned_to: None,
            user_id: None,
        }
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<script>a & \"b\"</script>"),
            "&lt;script&gt;a &amp; &quot;b&quot;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_entry_escapes_title_and_description() {
        let mut c = case(1, "<script>alert(1)</script>");
        c.description = Some("a < b".to_string());
        let html = case_entry_html(&c);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn test_entry_without_status_or_assignee_shows_dashes() {
        let html = case_entry_html(&case(2, "VPN down"));
        assert!(html.contains("#2 VPN down"));
        assert!(html.contains("Status: \u{2014}"));
        assert!(html.contains("Assigned: \u{2014}"));
    }

    #[test]
    fn test_entry_assignee_falls_back_to_user_id() {
        let mut c = case(3, "t");
        c.user_id = Some(7);
        assert!(case_entry_html(&c).contains("Assigned: 7"));
    }

    #[test]
    fn test_entry_prefers_assigned_to() {
        let mut c = case(4, "t");
        c.assigned_to = Some(api::Assignee::Name("Ana".to_string()));
        c.user_id = Some(7);
        assert!(case_entry_html(&c).contains("Assigned: Ana"));
    }

    #[test]
    fn test_entries_follow_input_order() {
        let cases = vec![case(9, "first"), case(2, "second"), case(5, "third")];
        let entries: Vec<String> = cases.iter().map(case_entry_html).collect();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].contains("#9 first"));
        assert!(entries[1].contains("#2 second"));
        assert!(entries[2].contains("#5 third"));
    }
}
