use guildhall_config::DiscordConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DiscordAuthError {
    #[error("Discord OAuth credentials are not configured")]
    NotConfigured,

    #[error("authorize URL is malformed: {0}")]
    AuthorizeUrl(#[from] url::ParseError),

    #[error("token exchange failed: HTTP {0}")]
    TokenExchange(reqwest::StatusCode),

    #[error("profile fetch failed: HTTP {0}")]
    ProfileFetch(reqwest::StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// The slice of `/users/@me` the catalog cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Client for the Discord OAuth2 authorization-code flow.
///
/// Base URLs come from config so tests can point the service at a stub.
pub struct DiscordAuthService {
    http: reqwest::Client,
    config: DiscordConfig,
}

impl std::fmt::Debug for DiscordAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // config holds the client secret; keep it out of logs
        f.debug_struct("DiscordAuthService")
            .field("configured", &self.config.is_configured())
            .finish_non_exhaustive()
    }
}

impl DiscordAuthService {
    pub fn new(config: DiscordConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Where to send the browser to start the flow.
    pub fn authorize_url(&self, state: &str) -> Result<String, DiscordAuthError> {
        let (client_id, _, redirect_uri) = self.credentials()?;
        let url = Url::parse_with_params(
            &self.config.authorize_base,
            [
                ("client_id", client_id),
                ("redirect_uri", redirect_uri),
                ("response_type", "code"),
                ("scope", "identify email"),
                ("state", state),
            ],
        )?;

        Ok(url.into())
    }

    /// Redeem an authorization code for the signed-in user's profile.
    pub async fn exchange_code(&self, code: &str) -> Result<DiscordProfile, DiscordAuthError> {
        let (client_id, client_secret, redirect_uri) = self.credentials()?;

        let token_url = format!("{}/oauth2/token", self.config.api_base);
        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DiscordAuthError::TokenExchange(response.status()));
        }
        let token: TokenResponse = response.json().await?;

        let me_url = format!("{}/users/@me", self.config.api_base);
        let response = self
            .http
            .get(&me_url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DiscordAuthError::ProfileFetch(response.status()));
        }

        Ok(response.json::<DiscordProfile>().await?)
    }

    fn credentials(&self) -> Result<(&str, &str, &str), DiscordAuthError> {
        match (
            self.config.client_id.as_deref(),
            self.config.client_secret.as_deref(),
            self.config.redirect_uri.as_deref(),
        ) {
            (Some(id), Some(secret), Some(uri))
                if !id.is_empty() && !secret.is_empty() && !uri.is_empty() =>
            {
                Ok((id, secret, uri))
            }
            _ => Err(DiscordAuthError::NotConfigured),
        }
    }
}
