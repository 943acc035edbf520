//! Shared configuration library for Guildhall.
//!
//! This crate centralizes config loading and validation so the server binary
//! and its tests share a single source of truth for defaults, precedence
//! (environment over file over built-in), and guard rails. Values arrive from
//! an optional `.env` file, the process environment, and a `guildhall.toml`
//! configuration file.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    AuthConfig, CatalogConfig, Config, ConfigMetadata, CorsConfig, DiscordConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
