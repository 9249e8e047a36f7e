/// Shared-secret credential attached to every request as a single header.
///
/// Constructed by the caller from its configuration and passed in
/// explicitly; the client never reads ambient environment state.
#[derive(Clone)]
pub struct Credential {
    header: String,
    secret: String,
}

impl Credential {
    pub fn new(header: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            secret: secret.into(),
        }
    }

    pub fn as_header(&self) -> (String, String) {
        (self.header.clone(), self.secret.clone())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret stays out of logs.
        f.debug_struct("Credential")
            .field("header", &self.header)
            .field("secret", &"***")
            .finish()
    }
}
