use serde_json::Value;
use thiserror::Error;

/// Failure at the API boundary, in exactly two families: the server answered and
/// said no, or no usable answer arrived at all.
///
/// A structurally wrong success body ([`ApiError::UnexpectedResponse`]) counts as a
/// rejection with its own message; it is kept as a separate variant so callers can
/// log it distinctly. 4xx and 5xx are not distinguished.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, with the human-readable message the server included (if
    /// any).
    #[error("{}", message.as_deref().unwrap_or("request rejected by the server"))]
    ServerRejected { status: u16, message: Option<String> },

    /// 2xx response whose body does not have the expected shape.
    #[error("unexpected response from the API")]
    UnexpectedResponse,

    /// Network failure or a body that is not JSON at all.
    #[error("cannot contact the API")]
    Transport(#[source] reqwest::Error),
}

impl ApiError {
    /// Build a rejection from a non-2xx status and the parsed response body,
    /// picking up the `message` or `error` field servers put in error payloads.
    pub(crate) fn rejected(status: reqwest::StatusCode, body: &Value) -> Self {
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string);
        ApiError::ServerRejected {
            status: status.as_u16(),
            message,
        }
    }

    /// The short string shown next to the control that triggered the request.
    ///
    /// Server-provided messages win; a rejection without one falls back to the
    /// per-operation `fallback`; the other two kinds map to fixed strings.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::ServerRejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::ServerRejected { .. } => fallback.to_string(),
            ApiError::UnexpectedResponse => "Unexpected response from the API".to_string(),
            ApiError::Transport(_) => "Cannot contact the API".to_string(),
        }
    }
}
