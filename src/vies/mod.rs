//! VIES REST client: request, response interpretation, and fault mapping.
//!
//! A check goes through four steps:
//!
//! 1. POST `{"countryCode","vatNumber"}` through a [`Transport`].
//! 2. Decode the body into [`ResponseData`] (anything but an object is `{}`).
//! 3. If the status is 4xx/5xx or the body carries `errorWrappers`, map the
//!    fault code to a [`ViesError`](crate::ViesError) variant.
//! 4. Otherwise build a [`ValidationResult`](crate::ValidationResult).
//!
//! # Example
//!
//! ```ignore
//! use vies_rest::vies::*;
//!
//! let client = ViesClient::production()?;
//! let result = client.validate("DE", "123456789").await?;
//! println!("valid: {}", result.is_valid);
//! ```

mod client;
mod fault;
mod response;
mod result;
mod transport;

#[cfg(feature = "rest")]
pub use client::{ViesClientBuilder, check_vies};
pub use client::{VIES_TEST_URL, VIES_URL, ViesClient, ViesEndpoint};
pub use fault::{fault_code, fault_error, fault_message, is_fault, map_fault};
pub use response::ResponseData;
pub use result::build_result;
#[cfg(feature = "rest")]
pub use transport::ReqwestTransport;
pub use transport::{Transport, TransportResponse};
