use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Body of the guess submission, one per completed level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub level: String,
    pub guess_lat: f64,
    pub guess_lon: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    Transport(String),
    /// The request exceeded the client's deadline.
    TimedOut,
    /// The server answered with a non-success HTTP status.
    Http(u16),
    /// The response body was not a valid submission response.
    Decode(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Transport(msg) => write!(f, "submission transport error: {msg}"),
            SubmitError::TimedOut => write!(f, "submission timed out"),
            SubmitError::Http(status) => write!(f, "submission rejected with HTTP {status}"),
            SubmitError::Decode(msg) => write!(f, "invalid submission response: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// The scoring endpoint seam. Implementations perform exactly one request
/// per call; the session guarantees at most one call is outstanding.
pub trait SubmitClient {
    fn submit(&mut self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError>;
}

/// `POST {base_url}/api/submit-level` with a JSON body.
///
/// Carries an explicit deadline so an unresponsive server surfaces as
/// [`SubmitError::TimedOut`] instead of an indefinitely in-flight request.
#[derive(Debug)]
pub struct HttpSubmitClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl HttpSubmitClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: format!("{}/api/submit-level", base_url.trim_end_matches('/')),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmitClient for HttpSubmitClient {
    fn submit(&mut self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::TimedOut
                } else {
                    SubmitError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Http(status.as_u16()));
        }

        response.json::<SubmitResponse>().map_err(|e| {
            if e.is_timeout() {
                SubmitError::TimedOut
            } else {
                SubmitError::Decode(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpSubmitClient, SubmitRequest};
    use serde_json::json;

    #[test]
    fn request_body_matches_the_wire_format() {
        let request = SubmitRequest {
            level: "42".to_string(),
            guess_lat: 34.012,
            guess_lon: -116.169,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({ "level": "42", "guess_lat": 34.012, "guess_lon": -116.169 })
        );
    }

    #[test]
    fn endpoint_is_joined_without_double_slashes() {
        let client = HttpSubmitClient::new("https://example.test/").unwrap();
        assert_eq!(client.endpoint(), "https://example.test/api/submit-level");
    }
}
