use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{GrievanceError, Result};

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
    pub citizen: CitizenConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

/// Admin access. The password is compared as plain text, with no hashing or lockout.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenConfig {
    pub recent_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: "grievances.csv".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            admin: AdminConfig {
                password: "admin".to_string(),
            },
            citizen: CitizenConfig { recent_limit: 5 },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let builder = Self::default()
            .default_entries()
            .into_iter()
            .try_fold(Config::builder(), |builder, (key, value)| {
                builder.set_default(key, value)
            })?;

        let config = builder
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("grievance").required(false))
            // Add environment variables with prefix, e.g. GRIEVANCE_ADMIN__PASSWORD
            .add_source(
                Environment::with_prefix("GRIEVANCE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;

        // Validate configuration
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.storage.data_file.trim().is_empty() {
            return Err(GrievanceError::Validation(
                "storage.data_file must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(GrievanceError::Validation(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(GrievanceError::Validation(format!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format, valid_formats
            )));
        }

        if self.citizen.recent_limit == 0 {
            return Err(GrievanceError::Validation(
                "citizen.recent_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Admin password; the `ADMIN_PASS` environment variable wins over the config value
    #[must_use]
    pub fn get_admin_password(&self) -> String {
        std::env::var("ADMIN_PASS").unwrap_or_else(|_| self.admin.password.clone())
    }

    /// Get log level from environment or config
    #[must_use]
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }

    /// Flatten into `section.key` pairs for the config builder's defaults
    fn default_entries(self) -> Vec<(&'static str, config::Value)> {
        let mut entries = vec![
            ("storage.data_file", config::Value::from(self.storage.data_file)),
            ("logging.level", config::Value::from(self.logging.level)),
            ("logging.format", config::Value::from(self.logging.format)),
            ("admin.password", config::Value::from(self.admin.password)),
            (
                "citizen.recent_limit",
                config::Value::from(self.citizen.recent_limit),
            ),
        ];
        if let Some(file_path) = self.logging.file_path {
            entries.push(("logging.file_path", config::Value::from(file_path)));
        }
        entries
    }
}
