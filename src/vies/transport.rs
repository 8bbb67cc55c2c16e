//! HTTP transport seam.
//!
//! The client only needs "POST this JSON, give me status and body". Any
//! response that arrived, whatever its status, is `Ok`; `Err` means no
//! response was obtained.

use std::future::Future;

use serde_json::Value;

use crate::core::TransportError;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 4xx or 5xx.
    pub fn is_error_status(&self) -> bool {
        (400..600).contains(&self.status)
    }
}

/// Sends a JSON POST request.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).post_json(url, body)
    }
}

#[cfg(feature = "rest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "rest")]
mod reqwest_transport {
    use super::*;

    /// [`Transport`] backed by a [`reqwest::Client`].
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
            let resp = self
                .client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(TransportError::new)?;

            let status = resp.status().as_u16();
            let body = resp.text().await.map_err(TransportError::new)?;

            Ok(TransportResponse { status, body })
        }
    }
}
