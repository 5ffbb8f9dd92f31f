use serde::Deserialize;

/// Application configuration
///
/// Sources, later ones winning: `config/default.*`, `config/local.*`, then
/// `APP__`-prefixed environment variables (e.g. `APP__SERVER__PORT=9000`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub request_log: RequestLogConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Shared-secret API key settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Header checked first for the key
    pub header_name: String,
    /// Query parameter checked when the header is absent
    pub query_param: String,
    /// Environment variable holding the expected key
    pub secret_env_var: String,
    /// Requests under this path prefix need the key
    pub protected_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestLogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with a single demo user
    pub seed_demo_user: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header_name: "X-API-Key".to_string(),
            query_param: "api_key".to_string(),
            secret_env_var: "MYAPI_API_KEY".to_string(),
            protected_prefix: "/users".to_string(),
        }
    }
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            path: "server.log".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_user: true,
        }
    }
}

impl AppConfig {
    /// Load from files and the process environment.
    ///
    /// Any unreadable or mistyped value is an error; nothing falls back to
    /// defaults silently.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(None)
    }

    /// Load with `env` standing in for the process environment when given
    fn load_with_env(
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }
}
