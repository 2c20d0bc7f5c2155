use reqwest::{Response, StatusCode};
use shared::error::ApiError;
use thiserror::Error;

/// Failure modes of a storefront API round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Converts a non-2xx response into [`FetchError::Api`], pulling the message
/// from the storefront error body when one is present.
pub(crate) async fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ApiError>(&body).ok())
        .map(|api_error| api_error.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(FetchError::Api { status, message })
}
