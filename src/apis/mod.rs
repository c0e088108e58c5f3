//! Clients for the various Chapa APIs.

use crate::Error;
use reqwest::Url;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

pub mod banks;
pub mod payments;
pub mod transfers;

pub(crate) struct ChapaClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) base_url: Url,
}

impl ChapaClientInner {
    /// Resolves an endpoint path against the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends a `GET` request and decodes the response body.
    pub(crate) async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R, Error> {
        self.execute(self.client.get(url)).await
    }

    /// Serializes `body`, sends it with a `POST` request and decodes the response body.
    pub(crate) async fn post<B, R>(&self, url: Url, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(Error::EncodingError)?;

        self.execute(self.client.post(url).body(body)).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, Error> {
        // Chapa reports failures in the body, the status code is not inspected
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(%status, "Failed to decode Chapa response: {}", e);
            Error::DecodingError(e)
        })
    }
}

impl Debug for ChapaClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapaClientInner")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
