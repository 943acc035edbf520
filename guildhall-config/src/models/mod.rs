pub mod sources;

use crate::constants::DEFAULT_TOKEN_KEY;

use std::path::PathBuf;

/// Fully composed runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub discord: DiscordConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub items_path: PathBuf,
}

/// Discord OAuth application settings. The base URLs are overridable so
/// tests can point the exchange at a local stub.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub api_base: String,
    pub authorize_base: String,
}

impl DiscordConfig {
    pub fn is_configured(&self) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }
        present(&self.client_id) && present(&self.client_secret) && present(&self.redirect_uri)
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token_key: String,
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    pub fn is_default_token_key(&self) -> bool {
        self.token_key == DEFAULT_TOKEN_KEY
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
