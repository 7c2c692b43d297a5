// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, DemoSettings, JournalSettings, Settings};

/// The active environment: `APP_ENVIRONMENT`, defaulting to "development".
pub fn environment_name() -> String {
    std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into())
}

/// Loads the application settings from `dir` for the active environment.
pub fn load_settings_in(dir: &Path) -> Result<Settings> {
    load_settings_from(dir, &environment_name())
}

/// Loads settings rooted at `dir`.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables (e.g., `APP_JOURNAL__SETTLEMENT_CURRENCY=USD`).
pub fn load_settings_from(dir: &Path, environment: &str) -> Result<Settings> {
    let base = dir.join("base");
    let env_file = dir.join(environment);

    let settings = Config::builder()
        .add_source(File::with_name(&base.to_string_lossy()))
        .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

/// Parses a standalone settings file without layering.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
