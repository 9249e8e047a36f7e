use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    Submitted,
    Running,
    Succeeded,
    Failed,
}

impl OperationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationState::Submitted => "SUBMITTED",
            OperationState::Running => "RUNNING",
            OperationState::Succeeded => "SUCCEEDED",
            OperationState::Failed => "FAILED",
        }
    }

    /// Terminal states never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationState::Succeeded | OperationState::Failed)
    }

    /// Monotonic transition check: `Submitted → Running* → {Succeeded | Failed}`.
    /// Re-observing the current non-terminal state is allowed (a poll that
    /// finds the operation still running is not a regression).
    pub fn can_transition_to(&self, next: OperationState) -> bool {
        match self {
            OperationState::Submitted => !matches!(next, OperationState::Submitted),
            OperationState::Running => !matches!(next, OperationState::Submitted),
            OperationState::Succeeded | OperationState::Failed => false,
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
