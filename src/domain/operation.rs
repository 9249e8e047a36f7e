use chrono::{DateTime, Utc};

use super::{Artifact, OperationId, OperationState};

/// One remote long-running request, created on submission and driven to a
/// terminal state by the polling loop. Not persisted across process runs.
#[derive(Debug, Clone)]
pub struct Operation {
    pub id: OperationId,
    pub status_endpoint: String,
    pub state: OperationState,
    pub result: Option<Artifact>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Operation {
    pub fn submitted(id: OperationId, status_endpoint: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            status_endpoint,
            state: OperationState::Submitted,
            result: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// An operation whose submission response already carried the final
    /// result: it starts terminal and is never polled.
    pub fn completed_inline(id: OperationId, artifact: Artifact) -> Self {
        let now = Utc::now();
        Self {
            id,
            status_endpoint: String::new(),
            state: OperationState::Succeeded,
            result: Some(artifact),
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advance the state machine. Transitions are monotonic: once
    /// `Succeeded` or `Failed` is reached no further transition is
    /// accepted, and nothing ever moves back to `Submitted`.
    pub fn advance(&mut self, next: OperationState) -> Result<(), TransitionError> {
        if self.state == next && !self.state.is_terminal() {
            // A poll that re-observes the current state is a no-op.
            self.updated_at = Utc::now();
            return Ok(());
        }
        if !self.state.can_transition_to(next) {
            return Err(TransitionError {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record the final artifact. Populated at most once, only in
    /// `Succeeded` state.
    pub fn attach_result(&mut self, artifact: Artifact) -> Result<(), TransitionError> {
        if self.state != OperationState::Succeeded || self.result.is_some() {
            return Err(TransitionError {
                from: self.state,
                to: OperationState::Succeeded,
            });
        }
        self.result = Some(artifact);
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid operation transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: OperationState,
    pub to: OperationState,
}
