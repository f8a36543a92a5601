//! Unit tests for configuration loading.

use fittrack::storage::config::{load_config_from, save_config_to, ADMIN_PASSWORD_ENV};
use fittrack::storage::{AdminSettings, AppConfig, Theme};

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.database.file_name, "fitness_tracker.db");
    assert_eq!(config.model.n_estimators, 100);
    assert_eq!(config.model.random_seed, 42);
    assert_eq!(config.model.max_depth, None);
    assert_eq!(config.admin.username, "admin");
    assert_eq!(config.ui.theme, Theme::Dark);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.ui.theme = Theme::Light;
    config.model.max_depth = Some(12);
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.ui.theme, Theme::Light);
    assert_eq!(loaded.model, config.model);
}

#[test]
fn test_env_override_ignores_blank_values() {
    // Only this test touches the variable
    std::env::set_var(ADMIN_PASSWORD_ENV, "   ");
    let settings = AdminSettings::default().with_env_override();
    assert_eq!(settings.password, "admin");

    std::env::set_var(ADMIN_PASSWORD_ENV, "from-env");
    let settings = AdminSettings::default().with_env_override();
    assert_eq!(settings.password, "from-env");

    std::env::remove_var(ADMIN_PASSWORD_ENV);
}
