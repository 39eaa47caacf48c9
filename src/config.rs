use config::Config;
use error_stack::ResultExt;
use thiserror::Error;

/// Connection settings for a single spreadsheet.
///
/// `credentials_b64` holds the service-account JSON key, base64-encoded so it
/// can live in an env-style config file without newline mangling.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    pub credentials_b64: Box<str>,
    pub spreadsheet_id: Box<str>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file")]
    ReadFile,
    #[error("Config file is missing required spreadsheet fields")]
    MissingFields,
}

impl SpreadsheetConfig {
    pub fn new(credentials_b64: impl Into<Box<str>>, spreadsheet_id: impl Into<Box<str>>) -> Self {
        SpreadsheetConfig {
            credentials_b64: credentials_b64.into(),
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    /// Loads the config from the file named by `CONFIG_PATH` (default `Config`).
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let settings = Config::builder()
            .add_source(config::File::with_name(&config_path))
            .build()
            .change_context(ConfigError::ReadFile)
            .attach_printable_lazy(|| format!("config path: {}", config_path))?;

        settings
            .try_deserialize()
            .change_context(ConfigError::MissingFields)
    }
}
