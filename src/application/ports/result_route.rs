use crate::domain::{ArtifactKind, Operation};

use super::submit_request::render_template;

/// How the final artifact of a succeeded operation is retrieved.
#[derive(Debug, Clone)]
pub enum ResultRoute {
    /// The status envelope itself is the result: re-fetch the status
    /// endpoint and hand the JSON body back (Content Understanding style).
    StatusBody,
    /// A dedicated result endpoint derived from the operation id, e.g. the
    /// rendered-PDF route of Document Intelligence.
    Url {
        /// Must contain `{operationId}`.
        template: String,
        kind: ArtifactKind,
    },
}

impl ResultRoute {
    pub fn resolve(&self, operation: &Operation) -> (String, ArtifactKind) {
        match self {
            ResultRoute::StatusBody => (operation.status_endpoint.clone(), ArtifactKind::Json),
            ResultRoute::Url { template, kind } => (render_template(template, &operation.id), *kind),
        }
    }
}
