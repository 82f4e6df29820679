use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

/// Owner account created at startup when it does not exist yet.
#[derive(Clone)]
pub struct OwnerCredentials {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl std::fmt::Debug for OwnerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub owner: Option<OwnerCredentials>,
    pub run_migrations: bool,
}

/// Loads `.env.{RUST_ENV}` first, falling back to `.env`.
#[cfg(not(tarpaulin_include))]
pub fn load_dotenv() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;
        let min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 1u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "cannot exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }
        let connect_timeout = Duration::from_secs(parse_or(&lookup, "DB_CONNECT_TIMEOUT", 5u64)?);

        let owner = match (lookup("OWNER_EMAIL"), lookup("OWNER_PASSWORD")) {
            (Some(email), Some(password)) => Some(OwnerCredentials {
                email,
                password,
                full_name: lookup("OWNER_NAME"),
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("OWNER_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("OWNER_EMAIL")),
        };

        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;

        Ok(Self {
            host,
            port,
            database: DatabaseConfig {
                url,
                max_connections,
                min_connections,
                connect_timeout,
            },
            jwt: JwtConfig::from_lookup(&lookup)?,
            owner,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("cannot parse '{raw}'"),
        }),
        None => Ok(default),
    }
}
