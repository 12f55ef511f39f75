//! Blocking ureq transport that executes requests built by the core.

use std::time::Duration;

use showcase_core::{ApiError, FetchOutcome, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

pub struct UreqTransport {
    agent: ureq::Agent,
    origin: String,
}

impl UreqTransport {
    /// `origin` resolves request paths that are relative (`/api/...`).
    pub fn new(origin: &str, timeout: Duration) -> Self {
        // 4xx/5xx come back as data; the core interprets statuses.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.origin)
        } else {
            path.to_string()
        }
    }

    pub fn execute(&self, req: HttpRequest) -> FetchOutcome {
        let url = self.url_for(&req.path);
        debug!(method = req.method.as_str(), %url, "sending request");

        let result = match req.method {
            HttpMethod::Get => self.agent.get(&url).call(),
            HttpMethod::Post => self.agent.post(&url).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        // A body cut short must not pass for a complete (possibly empty) one.
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse::new(status, body))
    }
}
