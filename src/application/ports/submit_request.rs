use crate::domain::OperationId;

use super::RequestBody;

/// Literal substituted with the operation id when deriving the status and
/// result endpoints from their templates.
pub const OPERATION_ID_PLACEHOLDER: &str = "{operationId}";

/// Where an asynchronous-accepted submission response carries the
/// operation id. The field and header names are service-specific, so the
/// caller supplies the mapping rule instead of the client guessing.
#[derive(Debug, Clone)]
pub enum AcceptanceRule {
    /// Id arrives in a response header, e.g. `apim-request-id`.
    Header(String),
    /// Id arrives in a top-level JSON body field, e.g. `id`.
    BodyField(String),
}

/// Everything needed to post one unit of work and later find its status
/// endpoint.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub body: RequestBody,
    pub acceptance: AcceptanceRule,
    /// Must contain [`OPERATION_ID_PLACEHOLDER`].
    pub status_endpoint_template: String,
}

impl SubmitRequest {
    pub fn derive_status_endpoint(&self, id: &OperationId) -> String {
        render_template(&self.status_endpoint_template, id)
    }
}

pub(crate) fn render_template(template: &str, id: &OperationId) -> String {
    template.replace(OPERATION_ID_PLACEHOLDER, id.as_str())
}
