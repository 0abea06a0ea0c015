//! The four request/response exchanges against the configured base URL.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use store::UserInfo;

use crate::error::ApiError;
use crate::models::{CaseInfo, NewCase};

/// HTTP client for the remote helpdesk API.
///
/// Cheap to clone (the inner [`reqwest::Client`] is a shared handle); the app
/// constructs one at startup and passes it through context. No operation retries,
/// times out, or cancels — a failed exchange is reported and the user may try
/// again.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: UserInfo,
}

impl ApiClient {
    /// Client rooted at `base`, e.g. `https://helpdesk.example.com`. A trailing
    /// slash is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Parse the body and fold the status in: 2xx yields the JSON value, anything
    /// else a [`ApiError::ServerRejected`] carrying the server's message. A body
    /// that is not JSON is a transport failure either way.
    async fn read_body(resp: reqwest::Response) -> Result<Value, ApiError> {
        let status = resp.status();
        let body: Value = resp.json().await.map_err(ApiError::Transport)?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::rejected(status, &body))
        }
    }

    /// `POST /auth/login` with the given credentials. Returns the authenticated
    /// user; the caller persists it.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = Self::read_body(resp).await?;
        let parsed: LoginResponse =
            serde_json::from_value(body).map_err(|_| ApiError::UnexpectedResponse)?;
        Ok(parsed.user)
    }

    /// `GET /cases`. Returns the cases in server order; a 2xx body that is not an
    /// array is an unexpected response.
    pub async fn list_cases(&self) -> Result<Vec<CaseInfo>, ApiError> {
        let resp = self
            .http
            .get(self.url("/cases"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = Self::read_body(resp).await?;
        if !body.is_array() {
            return Err(ApiError::UnexpectedResponse);
        }
        serde_json::from_value(body).map_err(|_| ApiError::UnexpectedResponse)
    }

    /// `POST /cases`. Returns the created case; callers typically discard it and
    /// refresh the list instead.
    pub async fn create_case(&self, case: &NewCase) -> Result<CaseInfo, ApiError> {
        let resp = self
            .http
            .post(self.url("/cases"))
            .json(case)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = Self::read_body(resp).await?;
        serde_json::from_value(body).map_err(|_| ApiError::UnexpectedResponse)
    }

    /// `GET /reports`. The report is arbitrary JSON, rendered verbatim by the UI.
    pub async fn report(&self) -> Result<Value, ApiError> {
        let resp = self
            .http
            .get(self.url("/reports"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::read_body(resp).await
    }
}
