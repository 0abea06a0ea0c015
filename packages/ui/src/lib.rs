//! This crate contains all shared UI for the workspace: the auth context, the
//! identity widget, and the rendering components the dashboard composes. None of
//! these perform network calls; they render what they are given.

mod session;
pub use session::session_store;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod user_area;
pub use user_area::UserArea;

mod status;
pub use status::{Status, StatusLine};

mod case_list;
pub use case_list::{case_entry_html, escape_html, CaseList};

mod report;
pub use report::{format_report, ReportView};
