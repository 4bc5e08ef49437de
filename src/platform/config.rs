// LogLens - platform/config.rs
//
// config.toml loading with startup validation. Unknown keys are silently
// ignored for forward compatibility -- a newer config file can be used
// with an older binary without crashing. CLI flags override file values.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// =============================================================================
// config.toml sections (raw input)
// =============================================================================

/// Raw deserialisable shape of config.toml.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[server]` section.
    pub server: ServerSection,
    /// `[storage]` section.
    pub storage: StorageSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[server]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Listen address, e.g. "127.0.0.1:8080".
    pub listen: Option<String>,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: Option<usize>,
}

/// `[storage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory that receives uploaded log files and the pointer record.
    pub log_directory: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", or "trace".
    pub level: Option<String>,
}

/// Load and parse a config.toml file.
pub fn load_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Effective configuration
// =============================================================================

/// Validated runtime configuration after merging defaults, config.toml,
/// and CLI overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds.
    pub listen: SocketAddr,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,

    /// Directory that receives uploaded log files and the pointer record.
    pub log_directory: PathBuf,

    /// Log level from the config file (CLI and RUST_LOG take priority).
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Merge raw config with CLI overrides and validate ranges.
    ///
    /// Precedence per field: CLI flag > config.toml > built-in default.
    pub fn resolve(
        raw: RawConfig,
        listen_override: Option<SocketAddr>,
        log_dir_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let listen = match listen_override {
            Some(addr) => addr,
            None => {
                let raw_listen = raw
                    .server
                    .listen
                    .unwrap_or_else(|| constants::DEFAULT_LISTEN_ADDR.to_string());
                raw_listen
                    .parse()
                    .map_err(|_| ConfigError::ValueOutOfRange {
                        field: "server.listen".to_string(),
                        value: raw_listen.clone(),
                        expected: "a host:port socket address".to_string(),
                    })?
            }
        };

        let max_upload_bytes = raw
            .server
            .max_upload_bytes
            .unwrap_or(constants::DEFAULT_MAX_UPLOAD_BYTES);
        if !(constants::MIN_MAX_UPLOAD_BYTES..=constants::ABSOLUTE_MAX_UPLOAD_BYTES)
            .contains(&max_upload_bytes)
        {
            return Err(ConfigError::ValueOutOfRange {
                field: "server.max_upload_bytes".to_string(),
                value: max_upload_bytes.to_string(),
                expected: format!(
                    "{} to {}",
                    constants::MIN_MAX_UPLOAD_BYTES,
                    constants::ABSOLUTE_MAX_UPLOAD_BYTES
                ),
            });
        }

        let log_directory = log_dir_override.unwrap_or_else(|| {
            PathBuf::from(
                raw.storage
                    .log_directory
                    .unwrap_or_else(|| constants::DEFAULT_LOG_DIRECTORY.to_string()),
            )
        });

        Ok(Self {
            listen,
            max_upload_bytes,
            log_directory,
            log_level: raw.logging.level,
        })
    }

    /// Path of the single-line pointer record inside the log directory.
    pub fn pointer_file(&self) -> PathBuf {
        self.log_directory.join(constants::POINTER_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let config = AppConfig::resolve(RawConfig::default(), None, None).unwrap();
        assert_eq!(config.listen.to_string(), constants::DEFAULT_LISTEN_ADDR);
        assert_eq!(config.max_upload_bytes, constants::DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(
            config.log_directory,
            PathBuf::from(constants::DEFAULT_LOG_DIRECTORY)
        );
    }

    #[test]
    fn test_toml_values_applied() {
        let raw: RawConfig = toml::from_str(
            r#"
            [server]
            listen = "0.0.0.0:9000"
            max_upload_bytes = 2048

            [storage]
            log_directory = "/var/lib/loglens"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        let config = AppConfig::resolve(raw, None, None).unwrap();
        assert_eq!(config.listen.to_string(), "0.0.0.0:9000");
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.log_directory, PathBuf::from("/var/lib/loglens"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let raw: RawConfig = toml::from_str("[server]\nlisten = \"0.0.0.0:9000\"").unwrap();
        let config = AppConfig::resolve(
            raw,
            Some("127.0.0.1:7777".parse().unwrap()),
            Some(PathBuf::from("./elsewhere")),
        )
        .unwrap();
        assert_eq!(config.listen.to_string(), "127.0.0.1:7777");
        assert_eq!(config.log_directory, PathBuf::from("./elsewhere"));
    }

    #[test]
    fn test_invalid_listen_rejected() {
        let raw: RawConfig = toml::from_str("[server]\nlisten = \"not-an-address\"").unwrap();
        let result = AppConfig::resolve(raw, None, None);
        assert!(matches!(
            result,
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_upload_cap_range_checked() {
        let raw: RawConfig = toml::from_str("[server]\nmax_upload_bytes = 1").unwrap();
        assert!(AppConfig::resolve(raw, None, None).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw: Result<RawConfig, _> = toml::from_str("[future]\nshiny = true");
        assert!(raw.is_ok());
    }
}
