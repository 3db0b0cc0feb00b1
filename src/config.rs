use std::env;
use std::str::FromStr;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("PORT", 8080)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),

            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: parse_var("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            run_migrations: parse_var("RUN_MIGRATIONS", true)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads an optional variable, falling back to `default` when unset or empty.
fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        _ => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_skips_blanks() {
        let origins = split_origins(" http://a.local , ,http://b.local,");
        assert_eq!(origins, vec!["http://a.local", "http://b.local"]);
    }

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let port: u16 = parse_var("GOALTRACK_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("GOALTRACK_TEST_BAD_PORT", "eighty");
        let result: anyhow::Result<u16> = parse_var("GOALTRACK_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        env::remove_var("GOALTRACK_TEST_BAD_PORT");
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            database_url: "postgres://localhost/goaltrack".into(),
            host: "127.0.0.1".into(),
            port: 9000,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            db_max_connections: 10,
            db_acquire_timeout_secs: 5,
            run_migrations: false,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }
}
