//! Upstream API error types.

/// Errors that can occur when talking to the DB API gateway.
///
/// "No data" (HTTP 404) is not an error: clients turn it into
/// an empty page or `None`.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport failure: connect, timeout, TLS, body read.
    #[error("upstream unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Credentials were refused.
    #[error("unauthorized: check CLIENT_ID and CLIENT_SECRET")]
    Unauthorized,

    /// Non-success status other than 404.
    #[error("upstream rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// `CLIENT_ID` or `CLIENT_SECRET` cannot be sent as a header value.
    /// Raised when the client is built, before any request.
    #[error("credentials are not valid header values: check CLIENT_ID and CLIENT_SECRET")]
    InvalidCredentials,

    /// Body was not the JSON we expected.
    #[error("failed to decode upstream response: {message}")]
    Decode { message: String },
}

impl UpstreamError {
    /// HTTP status reported by the upstream, if it got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Rejected { status, .. } => Some(*status),
            UpstreamError::Unauthorized => Some(401),
            _ => None,
        }
    }
}
