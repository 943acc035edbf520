use std::{fmt, sync::Arc};

use guildhall_config::Config;
use guildhall_core::Catalog;

use crate::auth::{discord::DiscordAuthService, jwt::JwtIssuer, registry::UserRegistry};

/// Shared handler state. Every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub users: UserRegistry,
    pub discord: Arc<DiscordAuthService>,
    pub tokens: Arc<JwtIssuer>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up the services a request handler can reach.
    pub fn from_parts(config: Config, catalog: Catalog) -> Self {
        let config = Arc::new(config);
        let discord = Arc::new(DiscordAuthService::new(config.discord.clone()));
        let tokens = Arc::new(JwtIssuer::new(
            &config.auth.token_key,
            config.auth.token_ttl_secs,
        ));

        Self {
            catalog: Arc::new(catalog),
            users: UserRegistry::new(),
            discord,
            tokens,
            config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
