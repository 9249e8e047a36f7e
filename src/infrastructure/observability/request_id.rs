use std::fmt;

use uuid::Uuid;

/// Client-side correlation id, one per submission, attached to the span
/// that covers a whole submit/poll/fetch lifecycle so all its log lines
/// can be grepped together. Distinct from the service-issued operation id,
/// which only exists after acceptance.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
