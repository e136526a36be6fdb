use presence_common::Eligibility;
use thiserror::Error;

/// Coarse classification used to pick a user-facing reaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotConfigured,
    NotConnected,
    NotFound,
    Validation,
    Ineligible,
    Unauthorized,
    Rejected,
    SimulationFailed,
    NetworkUnreachable,
    Cancelled,
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ClientError {
    #[error("events contract not configured")]
    NotConfigured,
    #[error("no wallet connected")]
    NotConnected,
    #[error("{0} not found")]
    NotFound(String),
    /// Input rejected before any remote call.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// Local eligibility gate refused the action.
    #[error("{}", .0.reason())]
    Ineligible(Eligibility),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Contract refused the call with a known error code.
    #[error("contract rejected the call: {reason} (code {code})")]
    Rejected { code: u32, reason: String },
    #[error("simulation failed: {0}")]
    SimulationFailed(String),
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),
    #[error("operation cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ClientError::Validation { field, reason: reason.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NotConfigured => ErrorKind::NotConfigured,
            ClientError::NotConnected => ErrorKind::NotConnected,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Validation { .. } => ErrorKind::Validation,
            ClientError::Ineligible(_) => ErrorKind::Ineligible,
            ClientError::Unauthorized(_) => ErrorKind::Unauthorized,
            ClientError::Rejected { .. } => ErrorKind::Rejected,
            ClientError::SimulationFailed(_) => ErrorKind::SimulationFailed,
            ClientError::NetworkUnreachable(_) => ErrorKind::NetworkUnreachable,
            ClientError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Follow-up advice shown next to the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::Unauthorized => Some("sign with a wallet that holds the required role"),
            ErrorKind::NotConfigured => Some("ask an administrator to configure the events contract"),
            ErrorKind::NotConnected => Some("connect a wallet first"),
            ErrorKind::NetworkUnreachable => Some("check the RPC endpoint and try again"),
            _ => None,
        }
    }

    /// Whether the failure happened before anything was sent to the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotConfigured
                | ErrorKind::NotConnected
                | ErrorKind::Validation
                | ErrorKind::Ineligible
                | ErrorKind::Cancelled
        )
    }
}

impl From<core::convert::Infallible> for ClientError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}
