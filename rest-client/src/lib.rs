//! Private REST client for Nest API communication
//!
//! This crate provides the blocking transport used by `nest-api`. Every
//! request carries a bearer token, and redirects are followed by hand so the
//! `Authorization` header survives each hop (most HTTP stacks, ureq included,
//! strip it when they follow a redirect on their own).

mod error;

pub use error::RestError;

use serde::Deserialize;
use std::io::Read;
use tracing::{debug, warn};
use url::Url;

/// Longest redirect chain the client will follow before giving up
pub const MAX_REDIRECTS: usize = 10;

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    /// The method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

/// Error document returned by the API alongside non-200 responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub instance: String,
}

/// A minimal REST client that authenticates with a bearer token
#[derive(Clone)]
pub struct RestClient {
    agent: ureq::Agent,
    access_token: String,
}

impl RestClient {
    /// Create a new client that authenticates every request with `access_token`
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            // Redirects are handled in `execute`
            agent: ureq::AgentBuilder::new().redirects(0).build(),
            access_token: access_token.into(),
        }
    }

    /// The credential attached to every request
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Perform a request and return the raw response body
    ///
    /// # Arguments
    /// * `url` - Absolute request URL
    /// * `method` - HTTP method
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// The body of the final 200 response, verbatim. An empty body is a
    /// valid result; callers decide what it means.
    pub fn execute(
        &self,
        url: &str,
        method: Method,
        body: Option<&str>,
    ) -> Result<Vec<u8>, RestError> {
        let mut current =
            Url::parse(url).map_err(|e| RestError::InvalidUrl(format!("{}: {}", url, e)))?;
        let mut method = method;
        let mut body = body;
        let mut redirects = 0;

        loop {
            debug!(method = method.as_str(), url = %current, "sending request");

            let response = self.send(&current, method, body)?;
            let status = response.status();

            if is_redirect(status) {
                if let Some(location) = response.header("location") {
                    if redirects >= MAX_REDIRECTS {
                        return Err(RestError::TooManyRedirects(MAX_REDIRECTS));
                    }

                    let next = current.join(location).map_err(|e| {
                        RestError::InvalidUrl(format!("{}: {}", location, e))
                    })?;

                    // 307/308 replay the request as-is; the others turn into a plain GET
                    if matches!(status, 301 | 302 | 303) {
                        method = Method::Get;
                        body = None;
                    }

                    redirects += 1;
                    debug!(status, hop = redirects, to = %next, "following redirect");
                    current = next;
                    continue;
                }
            }

            let data = read_body(response)?;

            if status != 200 {
                warn!(status, url = %current, "request failed");
                return Err(classify_failure(status, &data));
            }

            return Ok(data);
        }
    }

    fn send(
        &self,
        url: &Url,
        method: Method,
        body: Option<&str>,
    ) -> Result<ureq::Response, RestError> {
        let request = self
            .agent
            .request(method.as_str(), url.as_str())
            .set("Authorization", &format!("Bearer {}", self.access_token));

        let result = match body {
            Some(body) => request
                .set("Content-Type", "application/json")
                .send_string(body),
            None => request.call(),
        };

        match result {
            Ok(response) => Ok(response),
            // 4xx/5xx still carry a body we want to inspect
            Err(ureq::Error::Status(_, response)) => Ok(response),
            Err(ureq::Error::Transport(transport)) => Err(RestError::Network(transport.to_string())),
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

fn read_body(response: ureq::Response) -> Result<Vec<u8>, RestError> {
    let mut data = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut data)
        .map_err(|e| RestError::Network(e.to_string()))?;
    Ok(data)
}

/// Turn a non-200 response body into an error, preferring the envelope message
fn classify_failure(status: u16, data: &[u8]) -> RestError {
    let message = match serde_json::from_slice::<ErrorEnvelope>(data) {
        Ok(envelope) if !envelope.message.is_empty() => envelope.message,
        _ => String::from_utf8_lossy(data).into_owned(),
    };

    RestError::Api { status, message }
}
