use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{HttpResponse, HttpTransport, RequestBody, TransportError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Real transport backed by a shared reqwest client. One instance is
/// reused across all operations so connection pooling applies.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &RequestBody,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        request = match body {
            RequestBody::Json(value) => request.json(value),
            RequestBody::Bytes(bytes) => request
                .header("Content-Type", "application/octet-stream")
                .body(bytes.clone()),
        };
        let response = request.send().await.map_err(map_error)?;
        read_response(response).await
    }

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        let response = request.send().await.map_err(map_error)?;
        read_response(response).await
    }
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Connection(e.to_string())
    }
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .bytes()
        .await
        .map_err(|e| TransportError::Connection(e.to_string()))?;
    Ok(HttpResponse::new(status, headers, body))
}
