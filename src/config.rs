//! Configuration System
//!
//! Settings for the bundle host and the companion simulation. The types are
//! always available so the front end can use the defaults; file and
//! environment loading needs the `server` feature.

use serde::Deserialize;
#[cfg(feature = "server")]
use std::path::Path;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub companion: CompanionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bundle host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front-end bundle (trunk's `dist/`)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("echo-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

/// Simulated companion behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct CompanionConfig {
    /// Delay before a FINN reply lands (ms)
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    /// Seeds balance every screen wallet starts with
    #[serde(default = "default_starting_seeds")]
    pub starting_seeds: u32,
}

fn default_reply_delay() -> u64 {
    1000
}

fn default_starting_seeds() -> u32 {
    crate::catalog::seed::STARTING_SEEDS
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
            starting_seeds: default_starting_seeds(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Apply overrides from a variable lookup (normally `std::env::var`)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ECHO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ECHO_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid ECHO_PORT"),
            }
        }
        if let Some(dist) = lookup("ECHO_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist);
        }
        if let Some(level) = lookup("ECHO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ECHO_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(f) => self.logging.format = f,
                None => tracing::warn!(value = %format, "Ignoring invalid ECHO_LOG_FORMAT"),
            }
        }
    }
}

#[cfg(feature = "server")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Defaults plus environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("echo").join("config.toml")),
            Some(PathBuf::from("/etc/echo/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Echo Configuration
#
# Environment variables override these settings:
# - ECHO_HOST
# - ECHO_PORT
# - ECHO_DIST_DIR
# - ECHO_LOG_LEVEL
# - ECHO_LOG_FORMAT

[server]
# Address the bundle host binds to
host = "127.0.0.1"
port = 8080

# Built front-end bundle (output of `trunk build` in echo-ui/)
dist_dir = "echo-ui/dist"

[companion]
# Delay before FINN answers (ms)
reply_delay_ms = 1000

# Seeds every wallet starts with
starting_seeds = 256

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.companion.reply_delay_ms, 1000);
        assert_eq!(config.companion.starting_seeds, 256);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ECHO_HOST", "0.0.0.0"),
            ("ECHO_PORT", "9000"),
            ("ECHO_DIST_DIR", "/srv/echo"),
            ("ECHO_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/echo"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "ECHO_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.companion.starting_seeds, 256);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 3000\n\n[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }
}
