//! Client for a GitHub-style Markdown rendering API.
//!
//! Sends Markdown text to `<endpoint>/markdown` as JSON and returns the
//! rendered HTML fragment. Uses a pooled [`ureq::Agent`] so sequential
//! page builds reuse one connection.

use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

use crate::converter::{MarkdownConverter, RenderError, strip_line_breaks};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Request body for the `/markdown` endpoint.
#[derive(Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    mode: &'a str,
    context: &'a str,
}

/// Markdown rendering API client.
pub struct ApiRenderer {
    agent: Agent,
    endpoint: String,
    context: String,
}

impl ApiRenderer {
    /// Create a client with the default timeout.
    ///
    /// # Arguments
    /// * `endpoint` - API base URL (e.g., `<https://api.github.com>`)
    /// * `context` - repository context sent with every request
    #[must_use]
    pub fn new(endpoint: &str, context: &str) -> Self {
        Self::with_timeout(endpoint, context, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with an explicit timeout.
    ///
    /// The timeout covers the whole request, the only I/O in the build
    /// pipeline that can hang.
    #[must_use]
    pub fn with_timeout(endpoint: &str, context: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            context: context.to_owned(),
        }
    }
}

impl MarkdownConverter for ApiRenderer {
    fn convert(&self, markdown: &str) -> Result<String, RenderError> {
        let url = format!("{}/markdown", self.endpoint);

        let response = self
            .agent
            .post(&url)
            .send_json(RenderRequest {
                text: markdown,
                mode: "gfm",
                context: &self.context,
            })
            .map_err(|e| RenderError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(RenderError::Api {
                status,
                body: error_body,
            });
        }

        let html = body
            .read_to_string()
            .map_err(|e| RenderError::Io(e.to_string()))?;

        Ok(strip_line_breaks(&html))
    }
}
