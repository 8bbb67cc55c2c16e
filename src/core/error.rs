use thiserror::Error;

use super::fault_code::FaultCode;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The transport could not produce a response at all
/// (DNS, connect, TLS, timeout, or an unreadable body).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Wrap an underlying transport failure.
    pub fn new(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// A transport failure with no underlying error value.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// Errors returned by a VIES check.
///
/// Fault variants mirror the VIES fault codes one to one so callers can
/// branch on them, e.g. retry on [`MsMaxConcurrentReq`](Self::MsMaxConcurrentReq)
/// but not on [`InvalidInput`](Self::InvalidInput).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// No response was obtained from VIES.
    #[error("VIES request failed: {0}")]
    ServiceRequest(#[source] TransportError),

    #[error("VIES fault INVALID_INPUT: {message}")]
    InvalidInput { message: String },

    #[error("VIES fault INVALID_REQUESTER_INFO: {message}")]
    InvalidRequesterInfo { message: String },

    #[error("VIES fault SERVICE_UNAVAILABLE: {message}")]
    ServiceUnavailable { message: String },

    #[error("VIES fault MS_UNAVAILABLE: {message}")]
    MsUnavailable { message: String },

    #[error("VIES fault TIMEOUT: {message}")]
    Timeout { message: String },

    #[error("VIES fault VAT_BLOCKED: {message}")]
    VatBlocked { message: String },

    #[error("VIES fault IP_BLOCKED: {message}")]
    IpBlocked { message: String },

    #[error("VIES fault GLOBAL_MAX_CONCURRENT_REQ: {message}")]
    GlobalMaxConcurrentReq { message: String },

    #[error("VIES fault GLOBAL_MAX_CONCURRENT_REQ_TIME: {message}")]
    GlobalMaxConcurrentReqTime { message: String },

    #[error("VIES fault MS_MAX_CONCURRENT_REQ: {message}")]
    MsMaxConcurrentReq { message: String },

    #[error("VIES fault MS_MAX_CONCURRENT_REQ_TIME: {message}")]
    MsMaxConcurrentReqTime { message: String },

    /// A fault-shaped response whose code is not one of the documented ones.
    /// `code` and `message` are kept verbatim, and may be empty.
    #[error("unknown VIES fault '{code}': {message}")]
    UnknownService { code: String, message: String },

    /// A success response lacked a required attribute.
    #[error("VIES response attribute not found: {field}")]
    AttributeNotFound { field: &'static str },
}

impl ViesError {
    /// Build the error variant for a known fault code.
    pub fn from_fault_code(code: FaultCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            FaultCode::InvalidInput => Self::InvalidInput { message },
            FaultCode::InvalidRequesterInfo => Self::InvalidRequesterInfo { message },
            FaultCode::ServiceUnavailable => Self::ServiceUnavailable { message },
            FaultCode::MsUnavailable => Self::MsUnavailable { message },
            FaultCode::Timeout => Self::Timeout { message },
            FaultCode::VatBlocked => Self::VatBlocked { message },
            FaultCode::IpBlocked => Self::IpBlocked { message },
            FaultCode::GlobalMaxConcurrentReq => Self::GlobalMaxConcurrentReq { message },
            FaultCode::GlobalMaxConcurrentReqTime => Self::GlobalMaxConcurrentReqTime { message },
            FaultCode::MsMaxConcurrentReq => Self::MsMaxConcurrentReq { message },
            FaultCode::MsMaxConcurrentReqTime => Self::MsMaxConcurrentReqTime { message },
        }
    }

    /// The documented fault code behind this error, if any.
    pub fn fault_code(&self) -> Option<FaultCode> {
        let code = match self {
            Self::InvalidInput { .. } => FaultCode::InvalidInput,
            Self::InvalidRequesterInfo { .. } => FaultCode::InvalidRequesterInfo,
            Self::ServiceUnavailable { .. } => FaultCode::ServiceUnavailable,
            Self::MsUnavailable { .. } => FaultCode::MsUnavailable,
            Self::Timeout { .. } => FaultCode::Timeout,
            Self::VatBlocked { .. } => FaultCode::VatBlocked,
            Self::IpBlocked { .. } => FaultCode::IpBlocked,
            Self::GlobalMaxConcurrentReq { .. } => FaultCode::GlobalMaxConcurrentReq,
            Self::GlobalMaxConcurrentReqTime { .. } => FaultCode::GlobalMaxConcurrentReqTime,
            Self::MsMaxConcurrentReq { .. } => FaultCode::MsMaxConcurrentReq,
            Self::MsMaxConcurrentReqTime { .. } => FaultCode::MsMaxConcurrentReqTime,
            Self::ServiceRequest(_) | Self::UnknownService { .. } | Self::AttributeNotFound { .. } => {
                return None;
            }
        };
        Some(code)
    }

    /// The fault message sent by VIES, for fault variants.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { message }
            | Self::InvalidRequesterInfo { message }
            | Self::ServiceUnavailable { message }
            | Self::MsUnavailable { message }
            | Self::Timeout { message }
            | Self::VatBlocked { message }
            | Self::IpBlocked { message }
            | Self::GlobalMaxConcurrentReq { message }
            | Self::GlobalMaxConcurrentReqTime { message }
            | Self::MsMaxConcurrentReq { message }
            | Self::MsMaxConcurrentReqTime { message }
            | Self::UnknownService { message, .. } => Some(message),
            Self::ServiceRequest(_) | Self::AttributeNotFound { .. } => None,
        }
    }

    /// Whether VIES answered with a fault (known or unknown).
    pub fn is_fault(&self) -> bool {
        self.fault_code().is_some() || matches!(self, Self::UnknownService { .. })
    }
}
