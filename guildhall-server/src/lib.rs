//! Guildhall catalog server.
//!
//! HTTP and WebSocket surface over the crafting-item table: filtered and
//! sorted views from `guildhall-core`, Discord OAuth sign-in, and liveness
//! endpoints. The binary in `main.rs` wires configuration and the dataset;
//! everything testable lives here.

pub mod auth;
pub mod catalog;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};
pub use routes::create_app;
