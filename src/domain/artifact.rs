use bytes::Bytes;

/// Content shape the caller expects a completed operation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Json,
    Binary,
}

/// Final payload of a completed operation, together with the HTTP status
/// observed when it was retrieved.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Json {
        body: serde_json::Value,
        http_status: u16,
    },
    Binary {
        content: Bytes,
        http_status: u16,
    },
}

impl Artifact {
    pub fn http_status(&self) -> u16 {
        match self {
            Artifact::Json { http_status, .. } => *http_status,
            Artifact::Binary { http_status, .. } => *http_status,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Artifact::Json { body, .. } => Some(body),
            Artifact::Binary { .. } => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Artifact::Binary { content, .. } => Some(content),
            Artifact::Json { .. } => None,
        }
    }
}
