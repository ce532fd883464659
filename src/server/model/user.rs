//! Session user domain model.

use crate::model::user::SessionUserDto;

/// Actor ID recorded for bumps made by an admin with no Discord identity in session.
pub const ADMIN_ACTOR_ID: &str = "admin";

/// Identity resolved from the current session.
///
/// A session may carry a Discord login, the shared admin flag, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub discord_id: Option<u64>,
    pub name: Option<String>,
    pub admin: bool,
}

impl SessionUser {
    /// Identifier written to the bump audit log for this user.
    pub fn actor_id(&self) -> String {
        match self.discord_id {
            Some(id) => id.to_string(),
            None => ADMIN_ACTOR_ID.to_string(),
        }
    }

    pub fn into_dto(self) -> SessionUserDto {
        SessionUserDto {
            discord_id: self.discord_id,
            name: self.name,
            admin: self.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_id_prefers_discord_identity() {
        let user = SessionUser {
            discord_id: Some(42),
            name: Some("owner".to_string()),
            admin: true,
        };

        assert_eq!(user.actor_id(), "42");
    }

    #[test]
    fn actor_id_falls_back_to_admin() {
        let user = SessionUser {
            discord_id: None,
            name: None,
            admin: true,
        };

        assert_eq!(user.actor_id(), ADMIN_ACTOR_ID);
    }
}
