use dioxus::prelude::*;

/// Transient status text shown next to a form or action, with an error/success
/// color cue. The default value is the cleared state (empty text).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// Non-error notice ("Loading...", "Case created", ...).
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/// Renders a [`Status`]. Always present in the layout so messages appear and
/// clear in place without reflowing the section.
#[component]
pub fn StatusLine(status: Status) -> Element {
    let class = if status.is_error {
        "status status--error"
    } else {
        "status status--ok"
    };
    rsx! {
        p {
            class: "{class}",
            "{status.text}"
        }
    }
}
