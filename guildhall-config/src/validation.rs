use thiserror::Error;

use crate::models::Config;

/// A non-fatal configuration finding, optionally with a remediation hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Accumulated warnings from loading and guard-rail checks.
#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    warnings: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>) {
        self.warnings.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(&mut self, message: impl Into<String>, hint: impl Into<String>) {
        self.warnings.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.warnings.iter()
    }
}

impl IntoIterator for ConfigWarnings {
    type Item = ConfigWarning;
    type IntoIter = std::vec::IntoIter<ConfigWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.into_iter()
    }
}

/// Misconfigurations refused outright rather than warned about.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("CORS cannot combine a wildcard origin with allow_credentials")]
    WildcardCorsWithCredentials,
    #[error("auth token TTL must be greater than zero")]
    ZeroTokenTtl,
}

/// Check a composed config against the guard rails.
///
/// Hard failures reject the config; softer findings come back as warnings
/// for the caller to log.
pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    if config.cors.is_wildcard_included() && config.cors.allow_credentials {
        return Err(ConfigGuardRailError::WildcardCorsWithCredentials);
    }
    if config.auth.token_ttl_secs == 0 {
        return Err(ConfigGuardRailError::ZeroTokenTtl);
    }

    let mut warnings = ConfigWarnings::default();
    if config.auth.is_default_token_key() {
        warnings.push_with_hint(
            "auth token key is the compiled default; issued tokens are forgeable",
            "set AUTH_TOKEN_KEY or [auth] token_key to a private value",
        );
    }
    if !config.discord.is_configured() {
        warnings.push_with_hint(
            "Discord OAuth credentials are not configured; sign-in will refuse requests",
            "set DISCORD_CLIENT_ID, DISCORD_CLIENT_SECRET, and DISCORD_REDIRECT_URI",
        );
    }
    Ok(warnings)
}
