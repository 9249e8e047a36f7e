/// Configuration for tracing initialization, supplied by the caller's
/// settings layer. Never reads the environment itself.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}
