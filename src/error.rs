//! Standard errors used by all functions in the crate.

/// Error collecting all possible failures of the Chapa client.
///
/// Variants are split by whether the request ever left the process:
/// [`ValidationError`](Error::ValidationError), [`EncodingError`](Error::EncodingError) and
/// [`UrlError`](Error::UrlError) are raised before anything is sent, while
/// [`HttpError`](Error::HttpError) and [`DecodingError`](Error::DecodingError) mean the request
/// was sent but no usable response came back.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed local validation and was not sent.
    #[error("invalid input: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
    /// The request body could not be serialized.
    #[error("Error encoding request: {0}")]
    EncodingError(#[source] serde_json::Error),
    /// The endpoint URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    /// Reqwest error: connection failures, timeouts and errors while reading the body.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The response body is not the JSON document we expected.
    #[error("Error decoding response: {0}")]
    DecodingError(#[source] serde_json::Error),
    /// Chapa answered, but reported that the operation did not succeed.
    ///
    /// Only returned by [`GatewayResponse::ensure_success`](crate::gateway::GatewayResponse::ensure_success):
    /// the API clients themselves hand back the decoded response untouched.
    #[error("Chapa returned status \"{status}\": {message}")]
    BusinessFailure { status: String, message: String },
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}
