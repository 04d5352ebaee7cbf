//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the webhook server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means allow all (development).
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
    pub request_timeout: Duration,
    /// System prompt markdown file, `{{CUSTOMER_PROFILE}}` substituted on load.
    pub prompt_path: Option<PathBuf>,
    /// Account whose profile is injected into the prompt.
    pub account_number: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: Vec::new(),
            max_body_size: 2 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            prompt_path: None,
            account_number: None,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_prompt_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.prompt_path = Some(path.into());
        self
    }

    pub fn with_account_number(mut self, account: impl Into<String>) -> Self {
        self.account_number = Some(account.into());
        self
    }

    /// Read configuration from the environment, loading a `.env` file first
    /// if one exists. Unset variables keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(host) = std::env::var("VOX_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("VOX_PORT") {
            config.port =
                port.parse().map_err(|_| anyhow::anyhow!("VOX_PORT is not a port: {port}"))?;
        }
        if let Ok(origins) = std::env::var("VOX_ALLOWED_ORIGINS") {
            config.allowed_origins =
                origins.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect();
        }
        if let Ok(path) = std::env::var("VOX_PROMPT_PATH") {
            config.prompt_path = Some(PathBuf::from(path));
        }
        if let Ok(account) = std::env::var("VOX_ACCOUNT_NUMBER") {
            config.account_number = Some(account);
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
