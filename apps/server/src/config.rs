//! Server configuration.

use std::env;

use anyhow::Context;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL for the SQLite-backed store.
    pub database_url: String,
    /// Whether to keep tasks in process memory instead of SQLite.
    pub in_memory: bool,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let in_memory = env::var("TASKS_IN_MEMORY")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        let port = env::var("TASKS_SERVER_PORT")
            .unwrap_or_else(|_| "5500".to_string())
            .parse()
            .context("invalid TASKS_SERVER_PORT")?;

        Ok(Self {
            host: env::var("TASKS_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:tasks.db?mode=rwc".to_string()),
            in_memory,
            log_level: env::var("TASKS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        env::remove_var("TASKS_IN_MEMORY");
        env::remove_var("TASKS_SERVER_HOST");
        env::remove_var("TASKS_SERVER_PORT");
        env::remove_var("TASKS_LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert!(!config.in_memory);
        assert_eq!(config.port, 5500);
        assert_eq!(config.server_addr(), "0.0.0.0:5500");
    }
}
