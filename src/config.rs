//! CLI configuration loaded from ~/.painttalk/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a scene is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing of the canvas and each shape.
    #[default]
    Text,
    Yaml,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,
    /// `tracing` filter directive, e.g. `warn` or `painttalk=debug`.
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load config from the standard path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        default_config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: Self::default_log_level(),
        }
    }
}

/// `~/.painttalk/config.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".painttalk").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("format: json\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "format: yaml\nlog_level: debug").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_invalid_yaml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "format: [not, a, format]").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn serialize_deserialize() {
        let config = Config {
            format: OutputFormat::Json,
            log_level: "info".to_string(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
