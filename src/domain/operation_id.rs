use std::fmt;

/// Opaque token the remote service uses to identify one unit of work.
///
/// Depending on the service this arrives in a response header or a JSON
/// body field; the client never inspects its contents beyond substituting
/// it into endpoint templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId(String);

impl OperationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
