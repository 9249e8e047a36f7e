mod init_tracing;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::RequestId;
pub use tracing_config::TracingConfig;
