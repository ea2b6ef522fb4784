//! Handles settings for the application.
//!
//! Values are layered: built-in defaults, then the optional settings file
//! (`settings.toml` unless `--config` says otherwise), then `BUDGET__*`
//! environment variables (e.g. `BUDGET__SERVER__PORT`), and finally `PORT`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub data_dir: String,
    pub history_capacity: usize,
    pub recent_limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        Self::from_sources(path, std::env::var("PORT").ok())
    }

    fn from_sources(path: &str, port: Option<String>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.data_dir", "data")?
            .set_default("server.history_capacity", engine::DEFAULT_CAPACITY as i64)?
            .set_default("server.recent_limit", 10)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("BUDGET").separator("__"))
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::from_sources("does-not-exist", None).unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.data_dir, "data");
        assert_eq!(settings.server.history_capacity, 100);
        assert_eq!(settings.server.recent_limit, 10);
    }

    #[test]
    fn port_variable_overrides_default() {
        let settings = Settings::from_sources("does-not-exist", Some("8080".to_string())).unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Settings::from_sources("does-not-exist", Some("http".to_string())).is_err());
    }
}
