//! Configuration module
//!
//! Environment-driven configuration for the API. Every setting has a default
//! suitable for local development; `Config::from_env` fails fast on values
//! that are present but unparseable.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_OUTPUT_DIR: &str = "converted";

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    upload_dir: String,
    output_dir: String,
    cors_origins: Vec<String>,
    environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", v, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
        let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_port,
            upload_dir,
            output_dir,
            cors_origins,
            environment,
        })
    }

    /// Construct a config directly, bypassing the environment. Used by tests
    /// and embedders that manage their own settings.
    pub fn new(
        server_port: u16,
        upload_dir: impl Into<String>,
        output_dir: impl Into<String>,
        cors_origins: Vec<String>,
        environment: impl Into<String>,
    ) -> Self {
        Config {
            server_port,
            upload_dir: upload_dir.into(),
            output_dir: output_dir.into(),
            cors_origins,
            environment: environment.into(),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(3000, "uploads", "converted", vec!["*".into()], "development");
        assert_eq!(config.server_port(), 3000);
        assert_eq!(config.upload_dir(), "uploads");
        assert_eq!(config.output_dir(), "converted");
        assert!(!config.is_production());
    }

    #[test]
    fn test_is_production() {
        let config = Config::new(3000, "u", "o", vec![], "Production");
        assert!(config.is_production());
        let config = Config::new(3000, "u", "o", vec![], "prod");
        assert!(config.is_production());
        let config = Config::new(3000, "u", "o", vec![], "staging");
        assert!(!config.is_production());
    }
}
