use super::OperationState;

/// Case-sensitive status words one service family uses in its status
/// envelope. The observed endpoints disagree on casing (`succeeded` vs
/// `Succeeded`), so each service declares its own vocabulary instead of the
/// client assuming a canonical one.
#[derive(Debug, Clone)]
pub struct StatusVocabulary {
    running: Vec<&'static str>,
    succeeded: Vec<&'static str>,
    failed: Vec<&'static str>,
}

impl StatusVocabulary {
    pub fn new(
        running: Vec<&'static str>,
        succeeded: Vec<&'static str>,
        failed: Vec<&'static str>,
    ) -> Self {
        Self {
            running,
            succeeded,
            failed,
        }
    }

    /// Lowercase vocabulary used by the Document Intelligence analyze
    /// endpoints.
    pub fn document_intelligence() -> Self {
        Self::new(
            vec!["notStarted", "running"],
            vec!["succeeded"],
            vec!["failed"],
        )
    }

    /// Capitalized vocabulary used by the Content Understanding analyzer
    /// endpoints.
    pub fn content_understanding() -> Self {
        Self::new(
            vec!["NotStarted", "Running"],
            vec!["Succeeded"],
            vec!["Failed"],
        )
    }

    /// Classify a raw status word. `None` means the word is outside this
    /// service's vocabulary and the envelope must be rejected rather than
    /// treated as still running.
    pub fn classify(&self, raw: &str) -> Option<OperationState> {
        if self.running.iter().any(|w| *w == raw) {
            Some(OperationState::Running)
        } else if self.succeeded.iter().any(|w| *w == raw) {
            Some(OperationState::Succeeded)
        } else if self.failed.iter().any(|w| *w == raw) {
            Some(OperationState::Failed)
        } else {
            None
        }
    }
}
