use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", 8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://users.db".to_string()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset or malformed.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid number ({:?}), using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
