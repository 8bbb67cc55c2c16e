//! # vies-rest
//!
//! Client for the EU [VIES](https://ec.europa.eu/taxation_customs/vies/) REST
//! API. Validates a VAT number and turns the answer into either a
//! [`ValidationResult`] or a typed [`ViesError`], one variant per VIES fault
//! code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vies_rest::{ViesError, vies::ViesClient};
//!
//! let client = ViesClient::production()?;
//! match client.validate("DE", "123456789").await {
//!     Ok(result) => println!("valid: {}", result.is_valid),
//!     Err(ViesError::MsUnavailable { .. }) => println!("member state down, try later"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! Fault codes are matched case-insensitively and arrive the same way
//! whether VIES answers 200 or 4xx/5xx. Nothing is retried or cached;
//! [`FaultCode::is_concurrency_limit`] tells callers which faults are worth
//! retrying later.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `rest` (default) | reqwest transport, [`vies::ViesClientBuilder`], [`vies::check_vies`] |
//!
//! Without `rest`, plug in your own [`vies::Transport`].

pub mod core;
pub mod vies;

// Re-export core types at crate root for convenience
pub use crate::core::*;
