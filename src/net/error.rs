//! API error type.
//!
//! No local taxonomy: transport failures and non-2xx statuses are carried
//! through to the calling page unchanged. The view layer decides what to
//! show the user.

/// Failure of a single API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("http status {0}")]
    Status(u16),
    /// Request issued outside a browser context (SSR stub).
    #[error("not available on server")]
    ServerSide,
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
