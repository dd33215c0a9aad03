use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

/// Server configuration, read from `BB_*` environment variables.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("BB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid BB_LISTEN_ADDR")?;
        let db_path = env_or("BB_DB_PATH", "./db/budget.db");
        let cors_allow = parse_origins(&env_or("BB_CORS_ALLOW_ORIGINS", "*"));
        let timeout_ms: u64 = env_or("BB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid BB_REQUEST_TIMEOUT_MS")?;
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Configuration with defaults for everything but the database file.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            db_path: db_path.into(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(parse_origins("*"), vec!["*".to_string()]);
    }
}
