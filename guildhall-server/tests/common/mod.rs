//! Shared harness: the app on an ephemeral port plus a stub Discord API.
#![allow(dead_code)]

use std::io::Write;
use std::net::SocketAddr;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

use guildhall_config::{
    AuthConfig, CatalogConfig, Config, ConfigMetadata, CorsConfig, DiscordConfig, ServerConfig,
};
use guildhall_core::Catalog;
use guildhall_server::{AppState, create_app};

pub const TOKEN_KEY: &str = "integration-test-token-key";

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_discord(true).await
}

/// Serve the full router on 127.0.0.1:0 against a five-item fixture
/// catalog, with Discord pointed at an in-process stub.
pub async fn spawn_app_with_discord(exchange_succeeds: bool) -> TestApp {
    let discord_addr = spawn_discord_stub(exchange_succeeds).await;

    let items_file = write_items_file();
    let catalog = Catalog::load(items_file.path()).expect("failed to load fixture catalog");

    let state = AppState::from_parts(test_config(discord_addr), catalog);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server exited");
    });

    // Redirects stay observable; the login flow is asserted on the 302.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build test client");

    TestApp {
        base_url: format!("http://{addr}"),
        client,
    }
}

fn test_config(discord_addr: SocketAddr) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        catalog: CatalogConfig {
            items_path: "unused-in-tests.json".into(),
        },
        discord: DiscordConfig {
            client_id: Some("stub-client".to_string()),
            client_secret: Some("stub-secret".to_string()),
            redirect_uri: Some("http://localhost:3000/auth/discord/callback".to_string()),
            api_base: format!("http://{discord_addr}"),
            authorize_base: format!("http://{discord_addr}/oauth2/authorize"),
        },
        auth: AuthConfig {
            token_key: TOKEN_KEY.to_string(),
            token_ttl_secs: 3600,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "OPTIONS".to_string(),
            ],
            allowed_headers: vec!["Authorization".to_string(), "Content-Type".to_string()],
            allow_credentials: false,
        },
        dev_mode: false,
        metadata: ConfigMetadata {
            config_path: None,
            env_file_loaded: false,
        },
    }
}

async fn spawn_discord_stub(exchange_succeeds: bool) -> SocketAddr {
    let token = move || async move {
        if exchange_succeeds {
            (
                StatusCode::OK,
                Json(json!({
                    "access_token": "stub-access-token",
                    "token_type": "Bearer",
                })),
            )
        } else {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid_grant"})),
            )
        }
    };
    let me = || async {
        Json(json!({
            "id": "99887766",
            "username": "stub_adventurer",
            "email": "stub@example.com",
        }))
    };

    let app = Router::new()
        .route("/oauth2/token", post(token))
        .route("/users/@me", get(me));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server exited");
    });

    addr
}

pub fn fixture_items() -> Value {
    json!([
        {
            "Name": "Longsword",
            "Rarity": "Common (mundane)",
            "Cost": "15 gp",
            "Type": "Weapon",
            "Source": "PHB",
            "Craftable": "Yes",
            "Tools": "Smith's Tools",
            "Attunement": "No",
            "Use": "Martial"
        },
        {
            "Name": "Potion of Healing",
            "Rarity": "Common",
            "Cost": "50 gp",
            "Type": "Potion",
            "Source": "DMG",
            "Craftable": "Yes",
            "Tools": "Herbalism Kit",
            "Attunement": "No",
            "Use": "Consumable"
        },
        {
            "Name": "Bag of Holding",
            "Rarity": "Uncommon",
            "Cost": "4000 gp",
            "Type": "Wondrous Item",
            "Source": "DMG",
            "Craftable": "No",
            "Tools": "",
            "Attunement": "No",
            "Use": "Utility"
        },
        {
            "Name": "Flame Tongue",
            "Rarity": "Rare",
            "Cost": "5000 gp",
            "Type": "Weapon",
            "Source": "DMG",
            "Craftable": "Yes",
            "Tools": "Smith's Tools, As Base Item",
            "Attunement": "Yes",
            "Use": "Martial"
        },
        {
            "Name": "Vorpal Sword",
            "Rarity": "Legendary",
            "Cost": "24000 gp",
            "Type": "Weapon",
            "Source": "DMG",
            "Craftable": "No",
            "Tools": "",
            "Attunement": "Yes",
            "Use": "Martial"
        }
    ])
}

fn write_items_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create items file");
    let body = serde_json::to_vec_pretty(&fixture_items()).expect("fixture serializes");
    file.write_all(&body).expect("failed to write items file");
    file.flush().expect("failed to flush items file");
    file
}
