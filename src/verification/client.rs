//! HTTP client for the verify-email endpoint. Every failure, whether transport,
//! timeout, or a non-2xx response with any body shape, is decoded into a
//! [`SubmissionError`] carrying a message that is safe to show to the user.

use super::types::{MessageBody, VerificationRequest};
use reqwest::{Client, Response};
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use ulid::Ulid;
use url::Url;

/// Path of the verify-email endpoint, relative to the API base URL.
pub const VERIFY_EMAIL_PATH: &str = "/expressapi/verifyemail";
/// Default request timeout applied to submissions.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of server message characters surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;

const DEFAULT_SUCCESS_MESSAGE: &str = "Email verified.";
const DEFAULT_FAILURE_MESSAGE: &str = "Verification failed. Please try again.";
const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub const fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Joins `path` onto the base URL, keeping any path prefix of the base.
    ///
    /// # Errors
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path.trim().trim_start_matches('/')))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionErrorKind {
    Network,
    Timeout,
    Rejected { status: u16 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmissionError {
    pub kind: SubmissionErrorKind,
    pub message: String,
}

/// Failures while building an [`HttpTransport`].
#[derive(Debug, Error)]
pub enum TransportBuildError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl SubmissionError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: SubmissionErrorKind::Network,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self {
            kind: SubmissionErrorKind::Timeout,
            message: TIMEOUT_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: SubmissionErrorKind::Rejected { status },
            message: message.into(),
        }
    }
}

/// Sends a verification request and yields the server's message on success.
pub trait VerificationTransport {
    fn verify(
        &self,
        request: &VerificationRequest,
    ) -> impl Future<Output = Result<String, SubmissionError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the endpoint URL is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportBuildError> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        let endpoint = config.endpoint(VERIFY_EMAIL_PATH)?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl VerificationTransport for HttpTransport {
    #[instrument(skip_all, fields(request_id))]
    async fn verify(&self, request: &VerificationRequest) -> Result<String, SubmissionError> {
        let request_id = Ulid::new().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());
        debug!(endpoint = %self.endpoint, "submitting verification request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("X-Request-Id", request_id.as_str())
            .json(request)
            .send()
            .await
            .map_err(map_request_error)?;

        decode_response(response).await
    }
}

/// Maps transport failures into user-facing errors with timeout detection.
fn map_request_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        warn!("verification request timed out");
        SubmissionError::timeout()
    } else {
        warn!("verification request failed: {err}");
        SubmissionError::network(format!("Unable to reach the server: {err}"))
    }
}

async fn decode_response(response: Response) -> Result<String, SubmissionError> {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) if err.is_timeout() => return Err(SubmissionError::timeout()),
        Err(err) => {
            debug!("failed to read response body: {err}");
            String::new()
        }
    };
    debug!(status = status.as_u16(), "verification response received");

    if status.is_success() {
        Ok(extract_message(&body).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
    } else {
        Err(SubmissionError::rejected(
            status.as_u16(),
            extract_message(&body).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        ))
    }
}

/// Pulls a non-blank `message` out of a JSON body, trimmed and truncated.
fn extract_message(body: &str) -> Option<String> {
    let parsed: MessageBody = serde_json::from_str(body).ok()?;
    let trimmed = parsed.message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_MESSAGE_CHARS).collect())
    }
}
