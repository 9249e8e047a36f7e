use std::env;
use std::time::Duration;

use crate::application::services::PollPolicy;

use super::Environment;

/// Everything the CLI reads from the environment. Each service section is
/// optional: a subcommand fails with a clear error only if the section it
/// actually needs is absent.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub document_intelligence: Option<DocumentIntelligenceSettings>,
    pub content_understanding: Option<ContentUnderstandingSettings>,
    pub polling: PollingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct DocumentIntelligenceSettings {
    pub endpoint: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct ContentUnderstandingSettings {
    pub endpoint: String,
    pub key: String,
    pub analyzer: String,
}

#[derive(Debug, Clone)]
pub struct PollingSettings {
    pub interval_secs: u64,
    pub max_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment: Environment = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()
            .map_err(|value| SettingsError::InvalidValue {
                name: "APP_ENV",
                value,
            })?;

        // A section exists once its endpoint variable is set; the key (and
        // analyzer) then become mandatory.
        let document_intelligence = match env::var("AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT") {
            Ok(endpoint) => Some(DocumentIntelligenceSettings {
                endpoint,
                key: require("AZURE_DOCUMENT_INTELLIGENCE_KEY")?,
            }),
            Err(_) => None,
        };

        let content_understanding = match env::var("AZURE_CU_ENDPOINT") {
            Ok(endpoint) => Some(ContentUnderstandingSettings {
                endpoint,
                key: require("AZURE_CU_KEY")?,
                analyzer: require("AZURE_CU_ANALYZER_NAME")?,
            }),
            Err(_) => None,
        };

        let polling = PollingSettings {
            interval_secs: parse_var("LONGRUN_POLL_INTERVAL_SECS", 10)?,
            max_attempts: parse_var("LONGRUN_POLL_MAX_ATTEMPTS", 30)?,
        };

        let logging = LoggingSettings {
            json_format: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        };

        Ok(Self {
            environment,
            document_intelligence,
            content_understanding,
            polling,
            logging,
        })
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            Duration::from_secs(self.polling.interval_secs),
            self.polling.max_attempts,
        )
    }
}

fn require(name: &'static str) -> Result<String, SettingsError> {
    env::var(name).map_err(|_| SettingsError::MissingVar(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, SettingsError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| SettingsError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
