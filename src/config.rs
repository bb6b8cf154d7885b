//! Application-level configuration loading: listening port, data file and static assets.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "FRUIT_CATCHER_CONFIG_PATH";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_FILE: &str = "users.json";
const DEFAULT_STATIC_DIR: &str = ".";
/// Number of entries returned by the ranking endpoint.
pub const DEFAULT_RANKING_LIMIT: usize = 5;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    port: u16,
    data_file: PathBuf,
    static_dir: PathBuf,
    ranking_limit: usize,
    expose_password: bool,
}

impl AppConfig {
    /// Load the configuration file (if any) then apply environment overrides.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_env_overrides(|key| env::var(key).ok())
    }

    /// Apply `PORT`, `DATA_FILE` and `STATIC_DIR` overrides read through `lookup`.
    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup("PORT") {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => warn!(%value, "ignoring invalid PORT"),
            }
        }
        if let Some(value) = lookup("DATA_FILE").filter(|value| !value.is_empty()) {
            self.data_file = PathBuf::from(value);
        }
        if let Some(value) = lookup("STATIC_DIR").filter(|value| !value.is_empty()) {
            self.static_dir = PathBuf::from(value);
        }
        self
    }

    /// Override the data file location.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Override the directory static assets are served from.
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = path.into();
        self
    }

    /// Toggle whether login responses echo the stored password.
    pub fn with_expose_password(mut self, expose: bool) -> Self {
        self.expose_password = expose;
        self
    }

    /// TCP port the server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path of the JSON user file.
    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }

    /// Directory served for unrouted GET requests.
    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    /// Number of leaderboard entries returned.
    pub fn ranking_limit(&self) -> usize {
        self.ranking_limit
    }

    /// Whether the plaintext password is part of the login payload.
    pub fn expose_password(&self) -> bool {
        self.expose_password
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            ranking_limit: DEFAULT_RANKING_LIMIT,
            expose_password: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    data_file: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    ranking_limit: Option<usize>,
    expose_password: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            port: value.port.unwrap_or(defaults.port),
            data_file: value.data_file.unwrap_or(defaults.data_file),
            static_dir: value.static_dir.unwrap_or(defaults.static_dir),
            ranking_limit: value.ranking_limit.unwrap_or(defaults.ranking_limit),
            expose_password: value.expose_password.unwrap_or(defaults.expose_password),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_server() {
        let config = AppConfig::default();
        assert_eq!(config.port(), 8000);
        assert_eq!(config.data_file(), &PathBuf::from("users.json"));
        assert_eq!(config.static_dir(), &PathBuf::from("."));
        assert_eq!(config.ranking_limit(), 5);
        assert!(config.expose_password());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"port": 9000, "expose_password": false}"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.port(), 9000);
        assert!(!config.expose_password());
        assert_eq!(config.data_file(), &PathBuf::from("users.json"));
        assert_eq!(config.ranking_limit(), 5);
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default().with_env_overrides(|key| match key {
            "PORT" => Some("8123".into()),
            "DATA_FILE" => Some("/tmp/scores.json".into()),
            _ => None,
        });

        assert_eq!(config.port(), 8123);
        assert_eq!(config.data_file(), &PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.static_dir(), &PathBuf::from("."));
    }

    #[test]
    fn invalid_port_is_ignored() {
        let config = AppConfig::default().with_env_overrides(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });

        assert_eq!(config.port(), 8000);
    }
}
