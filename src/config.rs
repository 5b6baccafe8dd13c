use log::warn;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Whether a route requires a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
}

impl RouteAccess {
    pub fn requires_auth(self) -> bool {
        self == RouteAccess::Authenticated
    }
}

impl FromStr for RouteAccess {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(RouteAccess::Public),
            "authenticated" => Ok(RouteAccess::Authenticated),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub store_backend: StoreBackend,
    pub read_access: RouteAccess,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET is not set, falling back to the default secret");
            "secret".to_string()
        });

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or("PORT", lookup("PORT"), 8000)?,
            mongodb_uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "rust_blogdb".to_string()),
            store_backend: parse_or("STORE_BACKEND", lookup("STORE_BACKEND"), StoreBackend::Mongo)?,
            read_access: parse_or("READ_ACCESS", lookup("READ_ACCESS"), RouteAccess::Public)?,
            jwt_secret,
        })
    }
}

#[cfg(test)]
pub const TEST_SECRET: &str = "test-secret";

#[cfg(test)]
impl AppConfig {
    pub fn test_config(read_access: RouteAccess) -> Self {
        AppConfig {
            host: "localhost".to_string(),
            port: 0,
            mongodb_uri: String::new(),
            database_name: "test".to_string(),
            store_backend: StoreBackend::Memory,
            read_access,
            jwt_secret: TEST_SECRET.to_string(),
        }
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
