pub mod config;

pub use config::{Environment, Settings, SettingsError};
