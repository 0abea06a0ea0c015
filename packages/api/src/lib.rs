//! # API crate — HTTP boundary to the remote helpdesk service
//!
//! Everything the client exchanges with the remote API lives here: the
//! [`ApiClient`] issuing the four operations (login, list cases, create case,
//! fetch report), the wire models, and the [`ApiError`] classification every
//! caller matches on.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] and the four request/response exchanges |
//! | [`error`] | [`ApiError`] — server rejection vs transport failure |
//! | [`models`] | `CaseInfo`, `NewCase`, `Assignee` wire types |
//!
//! Requests are fire-and-forget from the caller's perspective: no retries, no
//! timeout, no cancellation. The caller decides what to render from the result.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Assignee, CaseInfo, NewCase};

pub use store::UserInfo;
