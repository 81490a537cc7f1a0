use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub foundry: FoundryConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Connection settings for the hosted agent service
#[derive(Debug, Clone)]
pub struct FoundryConfig {
    /// Base URL of the agent service API, without a trailing slash
    pub endpoint: String,
    /// Bearer token for the agent service; may be empty, in which case
    /// requests go out unauthenticated and fail on the remote side
    pub api_key: String,
    /// Agent used when a request does not name one
    pub default_agent_id: Option<String>,
    /// Delay between run status checks
    pub poll_interval: Duration,
    /// Wall-clock budget for a run to reach a terminal status
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            foundry: FoundryConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FoundryConfig {
    const DEFAULT_POLL_INTERVAL_MS: u64 = 1000; // 1 second between status checks
    const DEFAULT_POLL_TIMEOUT_SECS: u64 = 120; // 2 minutes

    pub fn from_env() -> Result<Self, String> {
        let endpoint = env::var("FOUNDRY_ENDPOINT")
            .map_err(|_| "FOUNDRY_ENDPOINT environment variable is required".to_string())?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err("FOUNDRY_ENDPOINT must not be empty".to_string());
        }

        // A missing key or agent id is not a startup error: the failure
        // surfaces on the first remote call instead.
        let api_key = env::var("FOUNDRY_API_KEY").unwrap_or_default();
        let default_agent_id = env::var("FOUNDRY_AGENT_ID")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let poll_interval_ms = env::var("FOUNDRY_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| Self::DEFAULT_POLL_INTERVAL_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "FOUNDRY_POLL_INTERVAL_MS must be a valid number".to_string())?;

        let poll_timeout_secs = env::var("FOUNDRY_POLL_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_POLL_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FOUNDRY_POLL_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            endpoint,
            api_key,
            default_agent_id,
            poll_interval: Duration::from_millis(poll_interval_ms),
            poll_timeout: Duration::from_secs(poll_timeout_secs),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Foundry Relay API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "HTTP relay for a hosted conversational agent".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_address_joins_host_and_port() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
        };

        assert_eq!(config.server_address(), "0.0.0.0:8080");
    }

    // Process env is global, so every env-touching assertion lives in this
    // one sequential test fn. The other test modules build FoundryConfig
    // directly and never read these variables.
    #[test]
    fn foundry_config_from_env() {
        env::set_var("FOUNDRY_ENDPOINT", "https://agents.example.com/api/");
        env::set_var("FOUNDRY_API_KEY", "key-123");
        env::set_var("FOUNDRY_AGENT_ID", "  agent-1  ");
        env::set_var("FOUNDRY_POLL_INTERVAL_MS", "250");
        env::set_var("FOUNDRY_POLL_TIMEOUT_SECS", "30");

        let config = FoundryConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "https://agents.example.com/api");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.default_agent_id.as_deref(), Some("agent-1"));
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.poll_timeout, Duration::from_secs(30));

        env::set_var("FOUNDRY_AGENT_ID", "   ");
        env::remove_var("FOUNDRY_API_KEY");
        env::remove_var("FOUNDRY_POLL_INTERVAL_MS");
        env::remove_var("FOUNDRY_POLL_TIMEOUT_SECS");

        let config = FoundryConfig::from_env().unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.default_agent_id, None);
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
        assert_eq!(config.poll_timeout, Duration::from_secs(120));

        env::set_var("FOUNDRY_POLL_INTERVAL_MS", "not-a-number");
        assert!(FoundryConfig::from_env().is_err());
        env::remove_var("FOUNDRY_POLL_INTERVAL_MS");

        env::remove_var("FOUNDRY_ENDPOINT");
        assert!(FoundryConfig::from_env().is_err());
        env::remove_var("FOUNDRY_AGENT_ID");
    }
}
