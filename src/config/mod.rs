//! Configuration module for the employee gateway.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream mock employee API (endpoints live under `{base}/employee`)
    pub upstream_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Per-call timeout for upstream requests
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let upstream_url = env::var("EMPLOYEE_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://localhost:8112/api/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = env::var("EMPLOYEE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid EMPLOYEE_BIND_ADDR format");

        let log_level = env::var("EMPLOYEE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let upstream_timeout_ms = env::var("EMPLOYEE_UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            upstream_url,
            bind_addr,
            log_level,
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("EMPLOYEE_UPSTREAM_URL");
        env::remove_var("EMPLOYEE_BIND_ADDR");
        env::remove_var("EMPLOYEE_LOG_LEVEL");
        env::remove_var("EMPLOYEE_UPSTREAM_TIMEOUT_MS");

        let config = Config::from_env();

        assert_eq!(config.upstream_url, "http://localhost:8112/api/v1");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.upstream_timeout, Duration::from_millis(10_000));
    }
}
