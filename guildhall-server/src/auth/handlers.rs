use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use guildhall_core::{Tier, User};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Echoed back by Discord; not verified against the login request.
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub discord_id: String,
    pub discord_username: String,
    pub tier: Tier,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            discord_id: user.discord_id.clone(),
            discord_username: user.discord_username.clone(),
            tier: user.tier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthSuccess {
    pub success: bool,
    pub user: AuthUser,
    pub token: String,
}

/// Start the Discord authorization-code flow with a 302 to Discord.
pub async fn discord_login_handler(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    if !state.discord.is_configured() {
        return Err(AppError::service_unavailable(
            "DISCORD_NOT_CONFIGURED",
            "Discord sign-in is not configured on this server",
        ));
    }

    let csrf_state = random_state();
    let url = state.discord.authorize_url(&csrf_state).map_err(|err| {
        warn!(error = %err, "failed to build Discord authorize URL");
        AppError::internal("Failed to build the Discord authorize URL")
    })?;

    info!(target = %state.config.discord.authorize_base, "redirecting to Discord sign-in");
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}

/// Finish the flow: redeem the code, upsert the account, mint a token.
pub async fn discord_callback_handler(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> AppResult<Json<AuthSuccess>> {
    if let Some(denied) = params.error {
        let description = params
            .error_description
            .unwrap_or_else(|| "Discord authentication failed".to_string());
        warn!(error = %denied, description = %description, "Discord refused the authorization");
        return Err(AppError::unauthorized("DISCORD_AUTH_FAILED", description));
    }

    let Some(code) = params.code.as_deref() else {
        return Err(AppError::bad_request(
            "MISSING_CODE",
            "Authorization code missing",
        ));
    };

    let profile = match state.discord.exchange_code(code).await {
        Ok(profile) => profile,
        Err(err) => {
            warn!(error = %err, "Discord code exchange failed");
            return Err(auth_failed());
        }
    };

    let user = state.users.upsert(&profile);
    let token = state.tokens.issue(&user).map_err(|err| {
        warn!(error = %err, "token signing failed");
        auth_failed()
    })?;

    Ok(Json(AuthSuccess {
        success: true,
        user: AuthUser::from(&user),
        token,
    }))
}

/// Stateless sign-out; the client discards its token.
pub async fn logout_handler() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Logged out",
    }))
}

fn random_state() -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Exchange and token-minting failures are indistinguishable to the client.
fn auth_failed() -> AppError {
    AppError::unauthorized("AUTH_FAILED", "Authentication failed")
}
