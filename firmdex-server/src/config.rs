//! Server configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Browser origin allowed to call the API (the local UI during development)
    pub cors_allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_allowed_origin: "http://localhost:4200".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables.
    /// CLI arguments take precedence over environment variables.
    pub fn from_cli_and_env(cli_args: crate::cli::CliArgs) -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("FIRMDEX_PORT") {
            config.port = port.parse()?;
        }
        if let Ok(origin) = env::var("FIRMDEX_CORS_ORIGIN") {
            config.cors_allowed_origin = origin;
        }

        if let Some(port) = cli_args.port {
            config.port = port;
        }
        if let Some(origin) = cli_args.cors_origin {
            config.cors_allowed_origin = origin;
        }

        Ok(config)
    }
}
