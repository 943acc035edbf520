use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use guildhall_core::{Tier, User};
use tracing::info;
use uuid::Uuid;

use super::discord::DiscordProfile;

/// In-memory account store keyed by Discord ID.
///
/// Accounts live for the process lifetime only. A returning profile keeps
/// its minted id and tier while username and email are refreshed from
/// Discord.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Arc<DashMap<String, User>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, profile: &DiscordProfile) -> User {
        let mut entry = self
            .users
            .entry(profile.id.clone())
            .or_insert_with(|| {
                info!(discord_id = %profile.id, "registering first sign-in");
                User {
                    id: Uuid::new_v4(),
                    email: None,
                    discord_id: profile.id.clone(),
                    discord_username: String::new(),
                    tier: Tier::default(),
                    created_at: Utc::now(),
                }
            });

        entry.discord_username = profile.username.clone();
        entry.email = profile.email.clone();
        entry.clone()
    }

    pub fn get(&self, discord_id: &str) -> Option<User> {
        self.users.get(discord_id).map(|user| user.clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
