use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership tier. New sign-ins start on the free tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Supporter,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Supporter => "supporter",
        }
    }
}

/// A guild member who has signed in through Discord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub discord_id: String,
    pub discord_username: String,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
}

/// Token claims embedded in issued JWTs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub discord_id: String,
    pub email: Option<String>,
    pub tier: Tier,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}
