use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_DEV_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("DEV_SERVER_URL must start with http:// or https://, got {0:?}")]
    InvalidDevServerUrl(String),
}

/// Which asset pipeline the server fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Non-API requests are forwarded to the trunk dev server.
    Development,
    /// Non-API requests are served from the pre-built dist directory.
    Production,
}

impl Environment {
    // for dev its 'development' and for prod anything else
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Environment::Development,
            Some(value) if value.eq_ignore_ascii_case("development") => Environment::Development,
            Some(_) => Environment::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub environment: Environment,
    pub dist_dir: PathBuf,
    pub dev_server_url: String,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let environment = Environment::parse(lookup("ENVIRONMENT").as_deref());

        let dist_dir = lookup("DIST_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        let dev_server_url = lookup("DEV_SERVER_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEV_SERVER_URL.to_string());
        if !dev_server_url.starts_with("http://") && !dev_server_url.starts_with("https://") {
            return Err(ConfigError::InvalidDevServerUrl(dev_server_url));
        }

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        Ok(Self {
            port,
            environment,
            dist_dir,
            dev_server_url: dev_server_url.trim_end_matches('/').to_string(),
            sentry_dsn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.dev_server_url, "http://127.0.0.1:8080");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn reads_port_and_production_environment() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("ENVIRONMENT", "production"),
            ("DIST_DIR", "/srv/site"),
            ("DEV_SERVER_URL", "http://localhost:9000/"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.dev_server_url, "http://localhost:9000");
    }

    #[test]
    fn any_non_development_value_means_production() {
        let config = config_from(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.environment, Environment::Production);
        let config = config_from(&[("ENVIRONMENT", "Development")]).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "eighty"));
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn rejects_dev_server_url_without_scheme() {
        let err = config_from(&[("DEV_SERVER_URL", "localhost:8080")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDevServerUrl(_)));
    }

    #[test]
    fn example_env_points_at_the_trunk_output() {
        let example = include_str!("../.env.example");
        let vars: HashMap<String, String> = dotenvy::from_read_iter(example.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));

        // trunk runs from frontend/, the server from the workspace root
        let trunk = include_str!("../../frontend/Trunk.toml");
        assert!(trunk.contains(&format!("dist = \"../{}\"", DEFAULT_DIST_DIR)));
    }
}
