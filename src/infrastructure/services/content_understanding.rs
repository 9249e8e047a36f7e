use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    AcceptanceRule, ClientError, Credential, HttpTransport, RequestBody, ResultRoute,
    SubmitRequest,
};
use crate::application::services::{AsyncOperationClient, PollPolicy};
use crate::domain::{Artifact, OperationState, StatusVocabulary};

use super::SUBSCRIPTION_KEY_HEADER;

pub const API_VERSION: &str = "2024-12-01-preview";

/// Where the document to analyze lives: a URL the service downloads
/// itself, or raw bytes shipped inline as `application/octet-stream`.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Url(String),
    Bytes(Bytes),
}

/// Content Understanding profile: run a named analyzer over a document.
///
/// Acceptance carries the operation id in the JSON body field `id`, the
/// status vocabulary is capitalized, and the final result is the status
/// envelope itself rather than a separate download.
pub struct ContentUnderstandingService {
    client: AsyncOperationClient,
    endpoint: String,
    analyzer: String,
}

impl ContentUnderstandingService {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoint: &str,
        api_key: &str,
        analyzer: &str,
    ) -> Self {
        Self {
            client: AsyncOperationClient::new(
                transport,
                Credential::new(SUBSCRIPTION_KEY_HEADER, api_key),
            ),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            analyzer: analyzer.to_string(),
        }
    }

    pub fn submit_request(&self, source: &DocumentSource) -> SubmitRequest {
        let body = match source {
            DocumentSource::Url(url) => {
                RequestBody::Json(serde_json::json!({ "url": url }))
            }
            DocumentSource::Bytes(bytes) => RequestBody::Bytes(bytes.clone()),
        };
        SubmitRequest {
            endpoint: format!(
                "{}/contentunderstanding/analyzers/{}:analyze?api-version={}",
                self.endpoint, self.analyzer, API_VERSION
            ),
            body,
            acceptance: AcceptanceRule::BodyField("id".to_string()),
            status_endpoint_template: format!(
                "{}/contentunderstanding/analyzers/{}/results/{{operationId}}?api-version={}",
                self.endpoint, self.analyzer, API_VERSION
            ),
        }
    }

    /// Full lifecycle: submit, wait, return the analysis envelope.
    #[tracing::instrument(skip(self, source, policy, cancel), fields(analyzer = %self.analyzer))]
    pub async fn analyze(
        &self,
        source: &DocumentSource,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, ClientError> {
        let request = self.submit_request(source);
        let mut operation = self.client.submit(&request).await?;
        self.client
            .wait_until_terminal(
                &mut operation,
                &StatusVocabulary::content_understanding(),
                policy,
                cancel,
            )
            .await?;

        if operation.state == OperationState::Failed {
            return Err(ClientError::OperationFailed(
                operation
                    .error_message
                    .unwrap_or_else(|| "analysis failed".to_string()),
            ));
        }

        let artifact = self
            .client
            .fetch_result(&mut operation, &ResultRoute::StatusBody)
            .await?;
        match artifact {
            Artifact::Json { body, .. } => Ok(body),
            Artifact::Binary { .. } => Err(ClientError::MalformedEnvelope(
                "expected JSON analysis result, got binary content".to_string(),
            )),
        }
    }
}
