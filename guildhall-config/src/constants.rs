/// Compiled fallback signing key. The loader warns whenever a deployment
/// is still running on it.
pub const DEFAULT_TOKEN_KEY: &str = "guildhall-dev-token-key-do-not-deploy";

/// Dataset location relative to the working directory.
pub const DEFAULT_ITEMS_PATH: &str = "data/items.json";

/// Discord REST API root. Token exchange and user lookup hang off this.
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api";

/// Discord authorization page users are redirected to.
pub const DEFAULT_DISCORD_AUTHORIZE_BASE: &str = "https://discord.com/api/oauth2/authorize";

/// Issued tokens last a week unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
