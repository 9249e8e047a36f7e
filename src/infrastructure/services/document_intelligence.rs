use std::path::Path;
use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    AcceptanceRule, ClientError, Credential, HttpTransport, RequestBody, ResultRoute,
    SubmitRequest,
};
use crate::application::services::{AsyncOperationClient, PollPolicy};
use crate::domain::{Artifact, ArtifactKind, OperationState, StatusVocabulary};

use super::SUBSCRIPTION_KEY_HEADER;

pub const API_VERSION: &str = "2024-07-31-preview";

/// Document Intelligence profile: analyze a document with the prebuilt
/// read model and fetch the rendered searchable PDF.
///
/// This service signals acceptance with HTTP 202 and carries the
/// operation id in the `apim-request-id` response header; its status
/// vocabulary is lowercase.
pub struct DocumentIntelligenceService {
    client: AsyncOperationClient,
    endpoint: String,
}

impl DocumentIntelligenceService {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str, api_key: &str) -> Self {
        Self {
            client: AsyncOperationClient::new(
                transport,
                Credential::new(SUBSCRIPTION_KEY_HEADER, api_key),
            ),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn submit_request(&self, document: &[u8]) -> SubmitRequest {
        let b64 = general_purpose::STANDARD.encode(document);
        SubmitRequest {
            endpoint: format!(
                "{}/documentintelligence/documentModels/prebuilt-read:analyze?_overload=analyzeDocument&output=pdf&api-version={}",
                self.endpoint, API_VERSION
            ),
            body: RequestBody::Json(serde_json::json!({ "base64Source": b64 })),
            acceptance: AcceptanceRule::Header("apim-request-id".to_string()),
            status_endpoint_template: format!(
                "{}/documentintelligence/documentModels/prebuilt-read/analyzeResults/{{operationId}}?api-version={}",
                self.endpoint, API_VERSION
            ),
        }
    }

    fn result_route(&self) -> ResultRoute {
        ResultRoute::Url {
            template: format!(
                "{}/documentintelligence/documentModels/prebuilt-read/analyzeResults/{{operationId}}/pdf?api-version={}",
                self.endpoint, API_VERSION
            ),
            kind: ArtifactKind::Binary,
        }
    }

    /// Full lifecycle: submit the document, wait for the analysis to
    /// finish, download the searchable PDF bytes.
    #[tracing::instrument(skip(self, document, policy, cancel), fields(input_bytes = document.len()))]
    pub async fn make_searchable(
        &self,
        document: &[u8],
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ClientError> {
        let request = self.submit_request(document);
        let mut operation = self.client.submit(&request).await?;
        self.client
            .wait_until_terminal(
                &mut operation,
                &StatusVocabulary::document_intelligence(),
                policy,
                cancel,
            )
            .await?;

        if operation.state == OperationState::Failed {
            return Err(ClientError::OperationFailed(
                operation
                    .error_message
                    .unwrap_or_else(|| "document analysis failed".to_string()),
            ));
        }

        let artifact = self
            .client
            .fetch_result(&mut operation, &self.result_route())
            .await?;
        match artifact {
            Artifact::Binary { content, .. } => Ok(content),
            Artifact::Json { .. } => Err(ClientError::MalformedEnvelope(
                "expected binary PDF content, got JSON".to_string(),
            )),
        }
    }
}

/// `invoice.pdf` becomes `invoice_search.pdf`, next to wherever the caller
/// chooses to write it.
pub fn searchable_pdf_filename(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{stem}_search.pdf")
}
