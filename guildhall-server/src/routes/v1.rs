use axum::{Router, routing::get};

use crate::{
    catalog::{handlers, session},
    infra::app_state::AppState,
};

/// All v1 API routes.
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::list_items_handler))
        .route("/items/options", get(handlers::item_options_handler))
        .route("/items/session", get(session::items_session_handler))
}
