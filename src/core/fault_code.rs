//! VIES fault codes.
//!
//! VIES reports a failed check through `errorWrappers[0].error`. The codes
//! below are the ones the REST API documents; anything else is surfaced as
//! [`ViesError::UnknownService`](super::ViesError::UnknownService).
//!
//! Matching is case-insensitive because VIES has not always been
//! consistent about casing.

use std::fmt;

/// A documented VIES fault code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCode {
    /// The country code or VAT number is malformed.
    InvalidInput,
    /// The requester country code or VAT number is malformed.
    InvalidRequesterInfo,
    /// VIES itself is down.
    ServiceUnavailable,
    /// The member state's national service is down.
    MsUnavailable,
    /// The member state did not answer in time.
    Timeout,
    /// The VAT number is blocked from VIES queries.
    VatBlocked,
    /// The caller's IP address is blocked.
    IpBlocked,
    /// Global concurrency limit reached.
    GlobalMaxConcurrentReq,
    /// Global concurrency limit reached for the current time window.
    GlobalMaxConcurrentReqTime,
    /// Member state concurrency limit reached.
    MsMaxConcurrentReq,
    /// Member state concurrency limit reached for the current time window.
    MsMaxConcurrentReqTime,
}

static FAULT_CODES: &[(&str, FaultCode)] = &[
    ("INVALID_INPUT", FaultCode::InvalidInput),
    ("INVALID_REQUESTER_INFO", FaultCode::InvalidRequesterInfo),
    ("SERVICE_UNAVAILABLE", FaultCode::ServiceUnavailable),
    ("MS_UNAVAILABLE", FaultCode::MsUnavailable),
    ("TIMEOUT", FaultCode::Timeout),
    ("VAT_BLOCKED", FaultCode::VatBlocked),
    ("IP_BLOCKED", FaultCode::IpBlocked),
    ("GLOBAL_MAX_CONCURRENT_REQ", FaultCode::GlobalMaxConcurrentReq),
    ("GLOBAL_MAX_CONCURRENT_REQ_TIME", FaultCode::GlobalMaxConcurrentReqTime),
    ("MS_MAX_CONCURRENT_REQ", FaultCode::MsMaxConcurrentReq),
    ("MS_MAX_CONCURRENT_REQ_TIME", FaultCode::MsMaxConcurrentReqTime),
];

impl FaultCode {
    /// All documented codes, in the order VIES lists them.
    pub const ALL: [FaultCode; 11] = [
        Self::InvalidInput,
        Self::InvalidRequesterInfo,
        Self::ServiceUnavailable,
        Self::MsUnavailable,
        Self::Timeout,
        Self::VatBlocked,
        Self::IpBlocked,
        Self::GlobalMaxConcurrentReq,
        Self::GlobalMaxConcurrentReqTime,
        Self::MsMaxConcurrentReq,
        Self::MsMaxConcurrentReqTime,
    ];

    /// Look up a fault code, ignoring ASCII case. Only exact matches count;
    /// surrounding whitespace is not trimmed.
    pub fn parse(code: &str) -> Option<Self> {
        FAULT_CODES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(code))
            .map(|(_, fault)| *fault)
    }

    /// The canonical upper-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidRequesterInfo => "INVALID_REQUESTER_INFO",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::MsUnavailable => "MS_UNAVAILABLE",
            Self::Timeout => "TIMEOUT",
            Self::VatBlocked => "VAT_BLOCKED",
            Self::IpBlocked => "IP_BLOCKED",
            Self::GlobalMaxConcurrentReq => "GLOBAL_MAX_CONCURRENT_REQ",
            Self::GlobalMaxConcurrentReqTime => "GLOBAL_MAX_CONCURRENT_REQ_TIME",
            Self::MsMaxConcurrentReq => "MS_MAX_CONCURRENT_REQ",
            Self::MsMaxConcurrentReqTime => "MS_MAX_CONCURRENT_REQ_TIME",
        }
    }

    /// Whether the fault comes from a VIES concurrency limit.
    ///
    /// These are the faults a caller may reasonably retry later; this crate
    /// never retries on its own.
    pub fn is_concurrency_limit(self) -> bool {
        matches!(
            self,
            Self::GlobalMaxConcurrentReq
                | Self::GlobalMaxConcurrentReqTime
                | Self::MsMaxConcurrentReq
                | Self::MsMaxConcurrentReqTime
        )
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
