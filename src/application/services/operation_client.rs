use std::sync::Arc;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    AcceptanceRule, ClientError, Credential, HttpResponse, HttpTransport, ResultRoute,
    SubmitRequest,
};
use crate::domain::{Artifact, ArtifactKind, Operation, OperationId, OperationState,
    StatusVocabulary};

use super::PollPolicy;

/// Drives one remote long-running operation from submission to terminal
/// result: POST the work, derive a status endpoint from the returned
/// handle, check status until a terminal state, then fetch the artifact.
///
/// The client owns no schedule of its own. `poll_once` is a single status
/// check; `wait_until_terminal` loops on behalf of the caller but only
/// within the interval, ceiling, and cancellation token the caller hands
/// it.
pub struct AsyncOperationClient {
    transport: Arc<dyn HttpTransport>,
    credential: Credential,
}

impl AsyncOperationClient {
    pub fn new(transport: Arc<dyn HttpTransport>, credential: Credential) -> Self {
        Self {
            transport,
            credential,
        }
    }

    /// Submit one unit of work.
    ///
    /// HTTP 202 is asynchronous acceptance: the operation id is extracted
    /// per the request's [`AcceptanceRule`] and the operation comes back in
    /// `Submitted` state. Any other 2xx is synchronous acceptance: the
    /// body is the final result and the operation comes back already
    /// `Succeeded` with the artifact inline. Everything else is a
    /// rejection carrying the response body for diagnostics.
    #[tracing::instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    pub async fn submit(&self, request: &SubmitRequest) -> Result<Operation, ClientError> {
        let headers = vec![self.credential.as_header()];
        let response = self
            .transport
            .post(&request.endpoint, &headers, &request.body)
            .await?;

        match response.status {
            202 => {
                let id = extract_operation_id(&response, &request.acceptance)?;
                let status_endpoint = request.derive_status_endpoint(&id);
                tracing::debug!(operation_id = %id, "Submission accepted");
                Ok(Operation::submitted(id, status_endpoint))
            }
            status if response.is_success() => {
                let body = response.json().map_err(|e| {
                    ClientError::MalformedEnvelope(format!(
                        "synchronous result body is not JSON: {e}"
                    ))
                })?;
                tracing::debug!(status, "Submission completed synchronously");
                Ok(Operation::completed_inline(
                    OperationId::new("inline"),
                    Artifact::Json {
                        body,
                        http_status: status,
                    },
                ))
            }
            status => Err(ClientError::SubmissionRejected {
                status,
                body: response.text_lossy(),
            }),
        }
    }

    /// One status check: GET the status endpoint, classify the `status`
    /// word against the service vocabulary, and advance the operation.
    /// Never sleeps; iteration belongs to the caller.
    pub async fn poll_once(
        &self,
        operation: &mut Operation,
        vocabulary: &StatusVocabulary,
    ) -> Result<(), ClientError> {
        if operation.state.is_terminal() {
            return Err(ClientError::InvalidState {
                expected: OperationState::Running,
                actual: operation.state,
            });
        }

        let headers = vec![self.credential.as_header()];
        let response = self
            .transport
            .get(&operation.status_endpoint, &headers)
            .await?;

        if !response.is_success() {
            return Err(ClientError::StatusCheckFailed {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        let envelope: StatusEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
            ClientError::MalformedEnvelope(format!("undecodable status envelope: {e}"))
        })?;
        let next = vocabulary.classify(&envelope.status).ok_or_else(|| {
            ClientError::MalformedEnvelope(format!(
                "unrecognized status word {:?}",
                envelope.status
            ))
        })?;

        if next == OperationState::Failed {
            operation.error_message = envelope.error.map(|e| e.to_string());
        }
        operation.advance(next)?;
        tracing::debug!(operation_id = %operation.id, state = %operation.state, "Status check");
        Ok(())
    }

    /// Poll until the operation reaches a terminal state, sleeping
    /// `policy.interval` between checks. Gives up with `PollingTimeout`
    /// once `policy.max_attempts` checks have been spent, and honors the
    /// cancellation token at every poll boundary, including mid-sleep.
    pub async fn wait_until_terminal(
        &self,
        operation: &mut Operation,
        vocabulary: &StatusVocabulary,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> Result<(), ClientError> {
        let mut attempts: u32 = 0;
        while !operation.state.is_terminal() {
            if attempts >= policy.max_attempts {
                return Err(ClientError::PollingTimeout { attempts });
            }
            if cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }

            self.poll_once(operation, vocabulary).await?;
            attempts += 1;

            if operation.state.is_terminal() {
                break;
            }
            tokio::select! {
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = tokio::time::sleep(policy.interval) => {}
            }
        }
        Ok(())
    }

    /// Retrieve the final artifact of a succeeded operation. Calling this
    /// in any other state fails without touching the network. An inline
    /// result captured at submission time is returned as-is, also without
    /// a network call.
    pub async fn fetch_result(
        &self,
        operation: &mut Operation,
        route: &ResultRoute,
    ) -> Result<Artifact, ClientError> {
        if operation.state != OperationState::Succeeded {
            return Err(ClientError::InvalidState {
                expected: OperationState::Succeeded,
                actual: operation.state,
            });
        }
        if let Some(artifact) = &operation.result {
            return Ok(artifact.clone());
        }

        let (url, kind) = route.resolve(operation);
        let headers = vec![self.credential.as_header()];
        let response = self.transport.get(&url, &headers).await?;

        if !response.is_success() {
            // The status endpoint said succeeded but the content is gone;
            // surfaced as its own error because the caller saw success.
            return Err(ClientError::ResultUnavailable {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        let artifact = decode_artifact(&response, kind)?;
        operation.attach_result(artifact.clone())?;
        tracing::debug!(operation_id = %operation.id, http_status = response.status, "Result fetched");
        Ok(artifact)
    }
}

/// Status envelope shared by the observed service families. Only the
/// `status` word is interpreted; the rest of the body is opaque until a
/// result fetch. A missing `status` field rejects the envelope outright.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: String,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

fn extract_operation_id(
    response: &HttpResponse,
    acceptance: &AcceptanceRule,
) -> Result<OperationId, ClientError> {
    match acceptance {
        AcceptanceRule::Header(name) => response
            .header(name)
            .map(OperationId::new)
            .ok_or_else(|| {
                ClientError::MalformedEnvelope(format!(
                    "accepted response missing {name:?} header"
                ))
            }),
        AcceptanceRule::BodyField(field) => {
            let body = response.json().map_err(|e| {
                ClientError::MalformedEnvelope(format!("accepted response body is not JSON: {e}"))
            })?;
            body.get(field)
                .and_then(|v| v.as_str())
                .map(OperationId::new)
                .ok_or_else(|| {
                    ClientError::MalformedEnvelope(format!(
                        "accepted response body has no {field:?} field"
                    ))
                })
        }
    }
}

fn decode_artifact(response: &HttpResponse, kind: ArtifactKind) -> Result<Artifact, ClientError> {
    match kind {
        ArtifactKind::Json => {
            let body = response.json().map_err(|e| {
                ClientError::MalformedEnvelope(format!("result body is not JSON: {e}"))
            })?;
            Ok(Artifact::Json {
                body,
                http_status: response.status,
            })
        }
        ArtifactKind::Binary => Ok(Artifact::Binary {
            content: response.body.clone(),
            http_status: response.status,
        }),
    }
}
