use derive_more::Display;
use std::env;
use std::error::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Process settings, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_size: u32,
}

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} not set", _0)]
    Missing(&'static str),
    #[display(fmt = "{} has an invalid value: {:?}", key, value)]
    Invalid { key: &'static str, value: String },
}

impl Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let pool_size = parse_or(&lookup, "DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?;

        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
            });
        }

        Ok(Config {
            host,
            port,
            database_url,
            pool_size,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
