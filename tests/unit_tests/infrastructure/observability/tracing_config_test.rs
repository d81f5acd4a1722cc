use condo_advocate::infrastructure::observability::TracingConfig;
use condo_advocate::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_uses_plain_info_logging() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, Environment::Local);
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
}

#[test]
fn given_prod_environment_when_building_from_settings_then_forces_json() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert!(config.json_format);
    assert!(config.default_filter().starts_with("warn,"));
    assert!(config.default_filter().contains("tower_http=debug"));
}

#[test]
fn given_local_environment_with_json_flag_when_building_then_uses_json() {
    let settings = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    assert!(TracingConfig::from_settings(&settings, Environment::Local).json_format);
}
