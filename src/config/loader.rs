//! Layered configuration loading
//!
//! Configuration sources are merged lowest to highest priority:
//! 1. `config/default.toml`
//! 2. `config/{environment}.toml`
//! 3. `config/local.toml` (not committed)
//! 4. `COURTSIDE_*` environment variables (`__` as section separator)

use config::{Config, File};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Loads [`Settings`] from layered configuration sources
pub struct ConfigLoader {
    environment: Environment,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader for the given environment, reading from `config/`
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            config_dir: "config".to_string(),
        }
    }

    /// Overrides the configuration directory (used by tests)
    pub fn with_config_dir(mut self, dir: impl Into<String>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Loads and deserializes settings from all configured sources
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let dir = &self.config_dir;
        let builder = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(
                File::with_name(&format!("{}/{}", dir, self.environment.as_str())).required(false),
            )
            .add_source(File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(
                config::Environment::with_prefix("COURTSIDE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_no_files_yields_defaults() {
        let loader =
            ConfigLoader::new(Environment::Test).with_config_dir("nonexistent-config-dir");
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.max_connections, 10);
    }
}
