use std::env::VarError;
use std::fmt;

use interfaces_youtube_channels::index::DEFAULT_BASE_URL;
use thiserror::Error;

pub const DEFAULT_CHANNEL_ID: &str = "UCrmtSeYObZJNG6OIC7Pw-_A";
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Everything one run needs, validated up front.
#[derive(Clone)]
pub struct Config {
    pub youtube: YouTubeConfig,
    pub database: DatabaseConfig,
    pub channel_id: String,
}

#[derive(Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// libpq keyword/value connection string with every value quoted.
    pub fn conninfo(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            quote(&self.host),
            self.port,
            quote(&self.name),
            quote(&self.user),
            quote(&self.password),
        )
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("youtube", &self.youtube)
            .field("database", &self.database)
            .field("channel_id", &self.channel_id)
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadConfigError {
    #[error("MissingEnvVars: {}", .names.join(", "))]
    MissingEnvVars { names: Vec<&'static str> },

    #[error("InvalidEnvVar: {var}: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },
}

impl Config {
    /// Loads `./.env` (if any; parent directories are not searched) then
    /// reads the process environment.
    pub fn load() -> Result<Self, LoadConfigError> {
        dotenvy::from_path(".env").ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the config from an arbitrary variable lookup. Every missing
    /// required variable is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let get = |var: &str| lookup(var).ok().filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |var: &'static str| {
            let value = get(var);
            if value.is_none() {
                missing.push(var);
            }
            value.unwrap_or_default()
        };

        let api_key = require("YOUTUBE_API_KEY");
        let host = require("DB_HOST");
        let name = require("DB_NAME");
        let user = require("DB_USER");
        let password = require("DB_PASSWORD");

        if !missing.is_empty() {
            return Err(LoadConfigError::MissingEnvVars { names: missing });
        }

        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| LoadConfigError::InvalidEnvVar {
                var: "DB_PORT",
                reason: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Config {
            youtube: YouTubeConfig {
                api_key,
                base_url: get("YOUTUBE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            database: DatabaseConfig {
                host,
                name,
                user,
                password,
                port,
            },
            channel_id: get("YUURA_CHANNEL_ID").unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string()),
        })
    }
}
