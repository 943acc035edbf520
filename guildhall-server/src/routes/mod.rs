pub mod v1;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use guildhall_config::Config;

use crate::{auth, infra::app_state::AppState};

/// Assemble the full application router.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config);

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/auth/discord", get(auth::handlers::discord_login_handler))
        .route(
            "/auth/discord/callback",
            get(auth::handlers::discord_callback_handler),
        )
        .route("/auth/logout", post(auth::handlers::logout_handler))
        .nest("/api/v1", v1::create_v1_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer (permissive in dev, allow-list otherwise).
fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let allow_origin = if config.cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "skipping unparseable CORS origin");
                    None
                }
            })
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    let methods: Vec<Method> = config
        .cors
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .cors
        .allowed_headers
        .iter()
        .filter_map(|header| HeaderName::from_bytes(header.as_bytes()).ok())
        .collect();

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers));

    if config.cors.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}

async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Guildhall catalog server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "catalog": {
                "status": "healthy",
                "total_items": state.catalog.len(),
                "sources": state.catalog.options().sources.len(),
            }
        }
    }))
}
