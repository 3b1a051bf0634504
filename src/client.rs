//! Blocking HTTP client for the movie-recommendation backend
//!
//! Thin fetch wrappers: parsed JSON on success, a typed `ApiError` otherwise.
//! The backend's retrieval pipeline is a black box behind two endpoints.

use std::time::Duration;

use crate::model::{AnalysisSummary, ErrorBody, SearchRequest, SearchResponse};

/// Error type for backend calls
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure: unreachable host, timeout, TLS trouble.
    Transport(reqwest::Error),
    /// The backend answered with a non-2xx status. `detail` is the backend's
    /// own message when it sent one, otherwise a generic description.
    Status { status: u16, detail: String },
    /// A 2xx body that did not match the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "backend unreachable: {}", e),
            ApiError::Status { detail, .. } => write!(f, "{}", detail),
            ApiError::Decode(message) => write!(f, "unexpected response shape: {}", message),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

impl ApiError {
    /// Short text for status bars and footers.
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

/// Client for `GET /api/analysis` and `POST /api/search`.
///
/// Holds one pooled blocking client; safe to share across the fetch worker
/// threads the TUI spawns.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the aggregate analytics payload.
    ///
    /// Non-2xx responses carry no structured body we can rely on, so the
    /// error detail is synthesized from the status code.
    pub fn fetch_analysis(&self) -> Result<AnalysisSummary, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/analysis", self.base_url))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: format!("analysis request failed (HTTP {})", status.as_u16()),
            });
        }

        response
            .json::<AnalysisSummary>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Run a semantic search against the backend.
    ///
    /// On a non-2xx status the body is parsed as `{"detail": ...}`; when that
    /// parse fails the error falls back to a generic message.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/search", self.base_url))
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or_else(|_| format!("search failed (HTTP {})", status.as_u16()));
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<SearchResponse>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
