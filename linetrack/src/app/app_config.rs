use std::{path::Path, time::Duration};

use config::{Config, Environment, FileFormat};
use serde::{Deserialize, Deserializer};

use crate::app::{AppError, OutputFormat};

/// configuration file read when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "linetrack.toml";
/// prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "LINETRACK";

/// settings of the linetrack command line tool.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file holding the route and line definitions
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// time between two ticks of `watch`, written as 1s, 500ms, 1m...
    #[serde(
        default = "default_tick_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub tick_interval: Duration,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_file: default_store_file(),
            tick_interval: default_tick_interval(),
            output_format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// reads the configuration from a TOML file layered with `LINETRACK_*`
    /// environment variables.
    ///
    /// # Arguments
    ///
    /// * `config_file` - file to read. without one, `linetrack.toml` is read if it exists.
    ///
    /// # Returns
    ///
    /// * the configuration, with defaults for every missing value
    pub fn load(config_file: Option<&str>) -> Result<AppConfig, AppError> {
        let file_source = match config_file {
            Some(path) => config::File::new(path, FileFormat::Toml),
            None => config::File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };
        let source_name = config_file.unwrap_or(DEFAULT_CONFIG_FILE);
        let config = Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed reading '{source_name}'"),
                source: e,
            })?;
        let app_config = config
            .try_deserialize::<AppConfig>()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed deserializing configuration from '{source_name}'"),
                source: e,
            })?;
        log::debug!("loaded configuration {app_config:?}");
        Ok(app_config)
    }

    /// applies command line overrides
    pub fn with_overrides(
        self,
        store_file: Option<&str>,
        output_format: Option<OutputFormat>,
    ) -> AppConfig {
        AppConfig {
            store_file: store_file.map(String::from).unwrap_or(self.store_file),
            output_format: output_format.unwrap_or(self.output_format),
            ..self
        }
    }

    pub fn store_path(&self) -> &Path {
        Path::new(&self.store_file)
    }
}

fn default_store_file() -> String {
    String::from("linetrack.json")
}

fn default_tick_interval() -> Duration {
    Duration::from_secs(1)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::app::OutputFormat;
    use std::time::Duration;

    fn temp_config(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "linetrack-config-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("should write config fixture");
        path.display().to_string()
    }

    #[test]
    fn test_reads_toml_file() {
        let path = temp_config(
            "full",
            "store_file = \"lines.json\"\ntick_interval = \"250ms\"\noutput_format = \"json\"\n",
        );
        let config = AppConfig::load(Some(path.as_str())).expect("should load config");
        assert_eq!(config.store_file, "lines.json");
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.output_format, OutputFormat::Json);
        std::fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let path = temp_config("empty", "");
        let config = AppConfig::load(Some(path.as_str())).expect("should load config");
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.output_format, OutputFormat::Text);
        std::fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let path = temp_config("bad", "tick_interval = \"soon\"\n");
        assert!(AppConfig::load(Some(path.as_str())).is_err());
        std::fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn test_command_line_overrides() {
        let config = AppConfig::default().with_overrides(Some("other.json"), Some(OutputFormat::Json));
        assert_eq!(config.store_file, "other.json");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }
}
