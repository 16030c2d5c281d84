//! Direct messages to the bot owner.

use serenity::all::{CreateMessage, Http, UserId};

/// Sends notices to the configured owner, if any.
///
/// Delivery is best effort: the owner may have DMs closed, so failures are logged at
/// debug level and otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct OwnerNotifier {
    owner_id: Option<UserId>,
}

impl OwnerNotifier {
    pub fn new(owner_id: Option<u64>) -> Self {
        Self {
            owner_id: owner_id.map(UserId::new),
        }
    }

    /// DMs `content` to the owner. Does nothing without an owner.
    pub async fn notify(&self, http: &Http, content: &str) {
        let Some(owner_id) = self.owner_id else {
            return;
        };

        if let Err(e) = owner_id
            .direct_message(http, CreateMessage::new().content(content))
            .await
        {
            tracing::debug!("Could not DM owner {}: {}", owner_id, e);
        }
    }
}

/// Notice sent to the owner for every new registration.
pub fn new_registration_notice(discord_tag: &str, nickname: &str, external_id: &str) -> String {
    format!(
        "🆕 Nuevo registro: {} | Nick: {} | ID: {}",
        discord_tag, nickname, external_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_registration_notice() {
        assert_eq!(
            new_registration_notice("pilot", "Maverick", "SP-1"),
            "🆕 Nuevo registro: pilot | Nick: Maverick | ID: SP-1"
        );
    }
}
