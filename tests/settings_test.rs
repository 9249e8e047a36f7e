use std::sync::Mutex;
use std::time::Duration;

use longrun::presentation::{Environment, Settings, SettingsError};

// Settings tests mutate process-wide environment variables, so they must
// not interleave.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "APP_ENV",
    "AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT",
    "AZURE_DOCUMENT_INTELLIGENCE_KEY",
    "AZURE_CU_ENDPOINT",
    "AZURE_CU_KEY",
    "AZURE_CU_ANALYZER_NAME",
    "LONGRUN_POLL_INTERVAL_SECS",
    "LONGRUN_POLL_MAX_ATTEMPTS",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn given_empty_environment_when_loading_then_sections_are_absent_with_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let settings = Settings::from_env().unwrap();

    assert_eq!(settings.environment, Environment::Local);
    assert!(settings.document_intelligence.is_none());
    assert!(settings.content_understanding.is_none());
    assert_eq!(settings.polling.interval_secs, 10);
    assert_eq!(settings.polling.max_attempts, 30);
    assert!(!settings.logging.json_format);

    let policy = settings.poll_policy();
    assert_eq!(policy.interval, Duration::from_secs(10));
    assert_eq!(policy.max_attempts, 30);
}

#[test]
fn given_full_service_sections_when_loading_then_sections_are_populated() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("APP_ENV", "prod");
    std::env::set_var(
        "AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT",
        "https://di.example.com",
    );
    std::env::set_var("AZURE_DOCUMENT_INTELLIGENCE_KEY", "di-key");
    std::env::set_var("AZURE_CU_ENDPOINT", "https://cu.example.com/");
    std::env::set_var("AZURE_CU_KEY", "cu-key");
    std::env::set_var("AZURE_CU_ANALYZER_NAME", "invoices");
    std::env::set_var("LONGRUN_POLL_INTERVAL_SECS", "2");
    std::env::set_var("LONGRUN_POLL_MAX_ATTEMPTS", "5");

    let settings = Settings::from_env().unwrap();
    clear_env();

    assert_eq!(settings.environment, Environment::Prod);
    let di = settings.document_intelligence.unwrap();
    assert_eq!(di.endpoint, "https://di.example.com");
    assert_eq!(di.key, "di-key");
    let cu = settings.content_understanding.unwrap();
    assert_eq!(cu.analyzer, "invoices");
    assert_eq!(settings.polling.interval_secs, 2);
    assert_eq!(settings.polling.max_attempts, 5);
}

#[test]
fn given_json_log_format_when_loading_then_logging_section_reflects_it() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("LOG_FORMAT", "JSON");

    let settings = Settings::from_env().unwrap();
    clear_env();

    assert!(settings.logging.json_format);
}

#[test]
fn given_endpoint_without_key_when_loading_then_missing_var_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("AZURE_CU_ENDPOINT", "https://cu.example.com");

    let result = Settings::from_env();
    clear_env();

    assert!(matches!(
        result,
        Err(SettingsError::MissingVar("AZURE_CU_KEY"))
    ));
}

#[test]
fn given_garbage_poll_interval_when_loading_then_invalid_value_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("LONGRUN_POLL_INTERVAL_SECS", "soon");

    let result = Settings::from_env();
    clear_env();

    assert!(matches!(
        result,
        Err(SettingsError::InvalidValue { name, .. }) if name == "LONGRUN_POLL_INTERVAL_SECS"
    ));
}

#[test]
fn given_environment_strings_when_parsing_then_aliases_resolve() {
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
    assert_eq!(
        Environment::try_from("LOCAL".to_string()).unwrap(),
        Environment::Local
    );
    assert!(Environment::try_from("moon".to_string()).is_err());
}
