use std::env;
use anyhow::{Result, Context};
use tracing::{info, warn};

/// Extensions accepted by the upload endpoint, lowercase with leading dot.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];

/// Largest accepted upload payload (10 MiB).
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Headroom on top of the payload limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = Config::default();

        // PORT wins over SERVER_PORT so the service runs unchanged on PaaS hosts
        let server_port = match env::var("PORT") {
            Ok(_) => Self::parse_env_var("PORT", defaults.server_port)
                .context("Failed to parse PORT")?,
            Err(_) => Self::parse_env_var("SERVER_PORT", defaults.server_port)
                .context("Failed to parse SERVER_PORT")?,
        };

        let config = Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| {
                info!("SERVER_HOST not set, using default: {}", defaults.server_host);
                defaults.server_host.clone()
            }),
            server_port,
            log_format: Self::log_format_from_env(),
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    /// Reads `LOG_FORMAT` without logging, since it is needed before the
    /// subscriber is installed.
    pub fn log_format_from_env() -> LogFormat {
        match env::var("LOG_FORMAT") {
            Ok(val) if val.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.server_host.trim().is_empty() {
            return Err(anyhow::anyhow!("SERVER_HOST must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = Config {
            server_port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits() {
        assert_eq!(MAX_FILE_SIZE_BYTES, 10_485_760);
        assert_eq!(SUPPORTED_EXTENSIONS, [".pdf", ".docx", ".txt"]);
    }
}
