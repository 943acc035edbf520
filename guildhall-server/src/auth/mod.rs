pub mod discord;
pub mod handlers;
pub mod jwt;
pub mod registry;
