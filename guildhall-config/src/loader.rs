use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_DISCORD_API_BASE, DEFAULT_DISCORD_AUTHORIZE_BASE, DEFAULT_ITEMS_PATH,
        DEFAULT_TOKEN_KEY, DEFAULT_TOKEN_TTL_SECS,
    },
    models::{
        AuthConfig, CatalogConfig, Config, ConfigMetadata, CorsConfig, DiscordConfig,
        ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("guildhall.toml"),
        PathBuf::from("config/guildhall.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Composes configuration from `.env`, process environment, and a TOML
/// file, with environment values taking precedence over file values.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path)
                .map(|_| true)
                .or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let env_config = EnvConfig::gather();

        let (file_config, config_path, config_present) = self.load_file_config(&env_config)?;

        let (config, warnings) = self.compose_config(
            file_config,
            env_config,
            config_path,
            env_file_loaded,
            config_present,
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>, bool), ConfigLoadError> {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env_config.config_path {
            source.env = Some(from_env.clone());
        }

        if source.is_empty() {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        if let Some((path, provenance)) = source.resolved_path() {
            if !path.exists() {
                if provenance.is_explicit() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                return Ok((None, None, false));
            }

            let contents = fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
            let file_config: FileConfig =
                toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                    path: path.clone(),
                    source: err,
                })?;

            Ok((Some(file_config), Some(path), true))
        } else {
            Ok((None, None, false))
        }
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        env_file_loaded: bool,
        config_present: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if !config_present {
            warnings.push_with_hint(
                "No guildhall.toml detected; falling back to environment variables",
                "Create guildhall.toml or point GUILDHALL_CONFIG at a configuration file",
            );
        }

        let file = file_config.unwrap_or_default();
        let FileConfig {
            server: file_server,
            catalog: file_catalog,
            discord: file_discord,
            auth: file_auth,
            cors: file_cors,
            dev_mode: file_dev_mode,
        } = file;

        let server = ServerConfig {
            host: env
                .server_host
                .clone()
                .or(file_server.host)
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(3000),
        };

        let catalog = CatalogConfig {
            items_path: env
                .items_path
                .clone()
                .or(file_catalog.items_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ITEMS_PATH)),
        };

        let discord = DiscordConfig {
            client_id: env.discord_client_id.clone().or(file_discord.client_id),
            client_secret: env
                .discord_client_secret
                .clone()
                .or(file_discord.client_secret),
            redirect_uri: env
                .discord_redirect_uri
                .clone()
                .or(file_discord.redirect_uri),
            api_base: env
                .discord_api_base
                .clone()
                .or(file_discord.api_base)
                .unwrap_or_else(|| DEFAULT_DISCORD_API_BASE.to_string()),
            authorize_base: env
                .discord_authorize_base
                .clone()
                .or(file_discord.authorize_base)
                .unwrap_or_else(|| DEFAULT_DISCORD_AUTHORIZE_BASE.to_string()),
        };

        let auth = AuthConfig {
            token_key: env
                .auth_token_key
                .clone()
                .or(file_auth.token_key)
                .unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_string()),
            token_ttl_secs: env
                .auth_token_ttl_secs
                .or(file_auth.token_ttl_secs)
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        };

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .clone()
                .or(file_cors.allowed_origins)
                .unwrap_or_else(default_cors_origins),
            allowed_methods: env
                .cors_allowed_methods
                .clone()
                .or(file_cors.allowed_methods)
                .unwrap_or_else(default_cors_methods),
            allowed_headers: env
                .cors_allowed_headers
                .clone()
                .or(file_cors.allowed_headers)
                .unwrap_or_else(default_cors_headers),
            allow_credentials: env
                .cors_allow_credentials
                .or(file_cors.allow_credentials)
                .unwrap_or(false),
        };

        let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };

        let config = Config {
            server,
            catalog,
            discord,
            auth,
            cors,
            dev_mode,
            metadata,
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn is_empty(&self) -> bool {
        self.explicit.is_none() && self.env.is_none() && self.default.is_none()
    }

    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(
            self,
            ConfigPathProvenance::Explicit | ConfigPathProvenance::Env
        )
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_cors_methods() -> Vec<String> {
    vec![
        "GET".to_string(),
        "POST".to_string(),
        "OPTIONS".to_string(),
    ]
}

fn default_cors_headers() -> Vec<String> {
    vec!["Authorization".to_string(), "Content-Type".to_string()]
}

/// A loaded configuration plus everything worth logging about how it
/// was assembled.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
