//! EU VIES REST API client for VAT number validation.

use std::fmt;
#[cfg(feature = "rest")]
use std::time::Duration;

use super::fault::{fault_error, is_fault};
use super::response::ResponseData;
use super::result::build_result;
use super::transport::Transport;
#[cfg(feature = "rest")]
use super::transport::ReqwestTransport;
#[cfg(feature = "rest")]
use crate::core::TransportError;
use crate::core::{ValidationResult, VatNumber, ViesError};

/// Production VIES endpoint.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// VIES test service endpoint. Answers with canned results for the
/// documented test numbers.
pub const VIES_TEST_URL: &str =
    "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-test-service";

/// Which VIES endpoint a client talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViesEndpoint {
    #[default]
    Production,
    TestService,
    /// Any other URL, e.g. a proxy or a local mock server.
    Custom(String),
}

impl ViesEndpoint {
    pub fn url(&self) -> &str {
        match self {
            Self::Production => VIES_URL,
            Self::TestService => VIES_TEST_URL,
            Self::Custom(url) => url,
        }
    }
}

impl fmt::Display for ViesEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

/// VIES client over a [`Transport`].
///
/// Each call is independent; the client holds no mutable state and can be
/// shared between tasks when the transport can.
#[derive(Debug, Clone)]
pub struct ViesClient<T> {
    endpoint: ViesEndpoint,
    transport: T,
}

impl<T: Transport> ViesClient<T> {
    pub fn new(endpoint: ViesEndpoint, transport: T) -> Self {
        Self { endpoint, transport }
    }

    pub fn endpoint(&self) -> &ViesEndpoint {
        &self.endpoint
    }

    /// Check `country_code` + `vat_number` against VIES.
    pub async fn validate(&self, country_code: &str, vat_number: &str) -> Result<ValidationResult, ViesError> {
        self.validate_vat(&VatNumber::new(country_code, vat_number)).await
    }

    /// Check a VAT number against VIES.
    ///
    /// # Errors
    ///
    /// - [`ViesError::ServiceRequest`] if no response was obtained.
    /// - A fault variant (or [`ViesError::UnknownService`]) if VIES answered
    ///   with `errorWrappers`, or with any 4xx/5xx status.
    /// - [`ViesError::AttributeNotFound`] if a success response lacks a
    ///   required attribute.
    pub async fn validate_vat(&self, vat_number: &VatNumber) -> Result<ValidationResult, ViesError> {
        let url = self.endpoint.url();
        let request = serde_json::json!({
            "countryCode": vat_number.country_code(),
            "vatNumber": vat_number.vat_number(),
        });

        tracing::debug!(%url, vat = %vat_number, "sending VIES check");

        let response = self
            .transport
            .post_json(url, &request)
            .await
            .map_err(|e| {
                tracing::warn!(%url, vat = %vat_number, error = %e, "VIES request failed");
                ViesError::ServiceRequest(e)
            })?;

        let data = ResponseData::from_body(&response.body);

        // Error statuses are always faults, even without errorWrappers.
        if response.is_error_status() || is_fault(&data) {
            let err = fault_error(&data);
            tracing::warn!(status = response.status, vat = %vat_number, error = %err, "VIES fault");
            return Err(err);
        }

        build_result(&data, vat_number)
    }
}

#[cfg(feature = "rest")]
impl ViesClient<ReqwestTransport> {
    /// Client for the production endpoint with default settings.
    pub fn production() -> Result<Self, ViesError> {
        ViesClientBuilder::new().build()
    }

    /// Client for the VIES test service with default settings.
    pub fn test_service() -> Result<Self, ViesError> {
        ViesClientBuilder::new().endpoint(ViesEndpoint::TestService).build()
    }

    pub fn builder() -> ViesClientBuilder {
        ViesClientBuilder::new()
    }
}

/// Builder for a reqwest-backed [`ViesClient`].
///
/// ```
/// use std::time::Duration;
/// use vies_rest::vies::{ViesClientBuilder, ViesEndpoint};
///
/// let client = ViesClientBuilder::new()
///     .endpoint(ViesEndpoint::TestService)
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.endpoint(), &ViesEndpoint::TestService);
/// ```
#[cfg(feature = "rest")]
#[derive(Debug, Clone)]
pub struct ViesClientBuilder {
    endpoint: ViesEndpoint,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

#[cfg(feature = "rest")]
impl Default for ViesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rest")]
impl ViesClientBuilder {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self {
            endpoint: ViesEndpoint::Production,
            timeout: Self::DEFAULT_TIMEOUT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            user_agent: None,
        }
    }

    pub fn endpoint(mut self, endpoint: ViesEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Shorthand for `endpoint(ViesEndpoint::Custom(url))`.
    pub fn url(self, url: impl Into<String>) -> Self {
        self.endpoint(ViesEndpoint::Custom(url.into()))
    }

    /// Total time allowed per request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ViesError::ServiceRequest`] if the HTTP client cannot be
    /// created (e.g. TLS backend initialization failed).
    pub fn build(self) -> Result<ViesClient<ReqwestTransport>, ViesError> {
        let mut http = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout);
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }
        let http = http
            .build()
            .map_err(|e| ViesError::ServiceRequest(TransportError::new(e)))?;

        Ok(ViesClient::new(self.endpoint, ReqwestTransport::new(http)))
    }
}

/// Check a VAT number against the production VIES endpoint.
///
/// `country_code` is the 2-letter code (e.g. "DE"), `vat_number` the number
/// part without the country prefix. Builds a fresh client per call; keep a
/// [`ViesClient`] around when checking many numbers.
///
/// # Errors
///
/// See [`ViesClient::validate_vat`].
#[cfg(feature = "rest")]
pub async fn check_vies(country_code: &str, vat_number: &str) -> Result<ValidationResult, ViesError> {
    ViesClient::production()?.validate(country_code, vat_number).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vies_urls_are_https() {
        assert!(VIES_URL.starts_with("https://"));
        assert!(VIES_TEST_URL.starts_with("https://"));
        assert_ne!(VIES_URL, VIES_TEST_URL);
    }

    #[test]
    fn endpoint_urls() {
        assert_eq!(ViesEndpoint::default().url(), VIES_URL);
        assert_eq!(ViesEndpoint::TestService.url(), VIES_TEST_URL);
        assert_eq!(
            ViesEndpoint::Custom("http://127.0.0.1:9/check".into()).url(),
            "http://127.0.0.1:9/check"
        );
    }

    #[test]
    fn endpoint_display_is_url() {
        assert_eq!(ViesEndpoint::TestService.to_string(), VIES_TEST_URL);
    }

    #[cfg(feature = "rest")]
    #[test]
    fn builder_defaults() {
        let b = ViesClientBuilder::default();
        assert_eq!(b.endpoint, ViesEndpoint::Production);
        assert_eq!(b.timeout, Duration::from_secs(30));
        assert_eq!(b.connect_timeout, Duration::from_secs(10));
        assert!(b.user_agent.is_none());
    }

    #[cfg(feature = "rest")]
    #[test]
    fn builder_custom_url() {
        let client = ViesClientBuilder::new()
            .url("http://localhost:8080/check-vat-number")
            .user_agent("vies-rest-tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint().url(), "http://localhost:8080/check-vat-number");
    }
}
