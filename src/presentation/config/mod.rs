mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ContentUnderstandingSettings, DocumentIntelligenceSettings, LoggingSettings, PollingSettings,
    Settings, SettingsError,
};
