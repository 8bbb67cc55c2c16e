//! Fault detection, extraction, and mapping.
//!
//! A fault-shaped response looks like
//! `{"errorWrappers":[{"error":"MS_UNAVAILABLE","message":"..."}]}`.
//! VIES sends this shape with 200 as well as 4xx/5xx statuses.

use serde_json::Value;

use super::response::ResponseData;
use crate::core::{FaultCode, ViesError};

const ERROR_WRAPPERS: &str = "errorWrappers";

/// Whether the response carries an `errorWrappers` array (empty arrays count).
pub fn is_fault(data: &ResponseData) -> bool {
    matches!(data.get(ERROR_WRAPPERS), Some(Value::Array(_)))
}

/// `error` of the first error wrapper, or `""` when there is none.
pub fn fault_code(data: &ResponseData) -> String {
    wrapper_field(data, "error")
}

/// `message` of the first error wrapper, or `""` when there is none.
pub fn fault_message(data: &ResponseData) -> String {
    wrapper_field(data, "message")
}

/// Map a fault code to its error, ignoring case.
///
/// Unknown codes, including `""`, become [`ViesError::UnknownService`]
/// with `code` and `message` kept verbatim.
///
/// ```
/// use vies_rest::{ViesError, vies::map_fault};
///
/// assert!(matches!(map_fault("ms_unavailable", "down"), ViesError::MsUnavailable { .. }));
/// assert!(matches!(map_fault("NOPE", ""), ViesError::UnknownService { .. }));
/// ```
pub fn map_fault(code: &str, message: &str) -> ViesError {
    match FaultCode::parse(code) {
        Some(known) => ViesError::from_fault_code(known, message),
        None => ViesError::UnknownService {
            code: code.to_string(),
            message: message.to_string(),
        },
    }
}

/// Extract and map the fault carried by `data`.
pub fn fault_error(data: &ResponseData) -> ViesError {
    map_fault(&fault_code(data), &fault_message(data))
}

fn first_wrapper(data: &ResponseData) -> Option<&serde_json::Map<String, Value>> {
    let Some(Value::Array(wrappers)) = data.get(ERROR_WRAPPERS) else {
        return None;
    };
    match wrappers.first()? {
        Value::Object(wrapper) if !wrapper.is_empty() => Some(wrapper),
        _ => None,
    }
}

fn wrapper_field(data: &ResponseData, key: &str) -> String {
    match first_wrapper(data).and_then(|w| w.get(key)) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
