mod client_error;
mod credential;
mod http_transport;
mod result_route;
mod submit_request;

pub use client_error::ClientError;
pub use credential::Credential;
pub use http_transport::{HttpResponse, HttpTransport, RequestBody, TransportError};
pub use result_route::ResultRoute;
pub use submit_request::{AcceptanceRule, SubmitRequest, OPERATION_ID_PLACEHOLDER};
