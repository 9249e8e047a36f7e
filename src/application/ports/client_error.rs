use crate::domain::{OperationState, TransitionError};

use super::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    #[error("submission rejected with HTTP {status}: {body}")]
    SubmissionRejected { status: u16, body: String },
    #[error("status check returned HTTP {status}: {body}")]
    StatusCheckFailed { status: u16, body: String },
    #[error("polling ceiling reached after {attempts} status checks")]
    PollingTimeout { attempts: u32 },
    #[error("result unavailable (HTTP {status}): {body}")]
    ResultUnavailable { status: u16, body: String },
    #[error("remote operation failed: {0}")]
    OperationFailed(String),
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),
    #[error("operation is {actual}, expected {expected}")]
    InvalidState {
        expected: OperationState,
        actual: OperationState,
    },
    #[error("state transition rejected: {0}")]
    Transition(#[from] TransitionError),
    #[error("operation cancelled")]
    Cancelled,
}
