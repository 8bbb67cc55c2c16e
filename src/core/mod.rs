//! Core value types and errors.

mod error;
mod fault_code;
mod types;

pub use error::*;
pub use fault_code::FaultCode;
pub use types::*;
