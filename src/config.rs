use std::env;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:local.db?mode=rwc";
const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub production: bool,
    pub database_url: String,
    pub server_address: String,
    pub max_connections: u32,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    /// Call `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("APP_ENV")
            .map(|value| value.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => url,
            _ if production => return Err(ConfigError::Missing("DATABASE_URL")),
            _ => DEFAULT_DATABASE_URL.to_string(),
        };

        Ok(Self {
            production,
            database_url,
            server_address: lookup("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            token_ttl_minutes: parse_var(&lookup, "TOKEN_TTL_MINUTES", 60)?,
            bcrypt_cost: parse_var(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_in_development() {
        let config = config_from(&[]).unwrap();
        assert!(!config.production);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.server_address, DEFAULT_SERVER_ADDRESS);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.token_ttl_minutes, 60);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn production_requires_database_url() {
        assert_eq!(
            config_from(&[("APP_ENV", "production")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );

        let config = config_from(&[
            ("APP_ENV", "Production"),
            ("DATABASE_URL", "sqlite:/var/lib/scheduler.db"),
        ])
        .unwrap();
        assert!(config.production);
        assert_eq!(config.database_url, "sqlite:/var/lib/scheduler.db");
    }

    #[test]
    fn numeric_overrides() {
        let config = config_from(&[
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("TOKEN_TTL_MINUTES", " 15 "),
            ("BCRYPT_COST", "4"),
        ])
        .unwrap();
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.token_ttl_minutes, 15);
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn invalid_number_is_rejected() {
        assert_eq!(
            config_from(&[("TOKEN_TTL_MINUTES", "soon")]),
            Err(ConfigError::Invalid {
                name: "TOKEN_TTL_MINUTES",
                value: "soon".to_string(),
            })
        );
    }
}
