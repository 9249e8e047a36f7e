use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{HttpResponse, HttpTransport, RequestBody, TransportError};

/// What a scripted transport saw, for assertions on call counts and URLs.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// Scripted transport: responses are served in the order enqueued,
/// regardless of method. Running out of script is a connection error so a
/// test that over-polls fails loudly.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, response: HttpResponse) {
        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(Ok(response));
    }

    pub fn enqueue_error(&self, error: TransportError) {
        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(Err(error));
    }

    /// Convenience for the common JSON-envelope case.
    pub fn enqueue_json(&self, status: u16, body: serde_json::Value) {
        self.enqueue(HttpResponse::new(
            status,
            vec![],
            Bytes::from(body.to_string()),
        ));
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    fn record(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(request);
        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "mock transport script exhausted".to_string(),
                ))
            })
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &RequestBody,
    ) -> Result<HttpResponse, TransportError> {
        self.record(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            headers: headers.to_vec(),
            body: Some(body.clone()),
        })
    }

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.record(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            headers: headers.to_vec(),
            body: None,
        })
    }
}
