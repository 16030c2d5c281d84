//! Staff check shared by every admin command and the userbase pager.
//!
//! A caller counts as staff when their guild permissions include any of
//! ADMINISTRATOR, MANAGE_GUILD or MODERATE_MEMBERS, or when one of their roles has a
//! name that exactly equals a configured staff role name. Anything else, including a
//! missing member or a failed role lookup, is treated as not staff.

use std::collections::HashMap;

use serenity::all::{Cache, GuildId, Http, Member, Permissions, Role, RoleId};

/// Permissions that grant staff access on their own.
pub fn elevated_permissions() -> Permissions {
    Permissions::ADMINISTRATOR | Permissions::MANAGE_GUILD | Permissions::MODERATE_MEMBERS
}

/// Resolves a member's role ids to role names, skipping ids the guild does not know.
pub fn member_role_names<'a>(
    member_roles: &[RoleId],
    guild_roles: &'a HashMap<RoleId, Role>,
) -> Vec<&'a str> {
    member_roles
        .iter()
        .filter_map(|id| guild_roles.get(id))
        .map(|role| role.name.as_str())
        .collect()
}

/// Configured staff role names and the predicate built on them.
#[derive(Debug, Clone)]
pub struct StaffPolicy {
    role_names: Vec<String>,
}

impl StaffPolicy {
    pub fn new(role_names: Vec<String>) -> Self {
        Self { role_names }
    }

    /// Decides whether a caller is staff.
    ///
    /// Role names are compared exactly, including case and whitespace.
    ///
    /// # Arguments
    /// - `permissions` - Caller's resolved guild permissions, `None` outside a guild
    /// - `role_names` - Names of the caller's roles
    ///
    /// # Returns
    /// - `true` - Elevated permissions or a matching role name
    /// - `false` - Neither
    pub fn is_staff<'r>(
        &self,
        permissions: Option<Permissions>,
        role_names: impl IntoIterator<Item = &'r str>,
    ) -> bool {
        if permissions.is_some_and(|p| p.intersects(elevated_permissions())) {
            return true;
        }

        role_names
            .into_iter()
            .any(|name| self.role_names.iter().any(|staff| staff == name))
    }

    /// Checks an interaction member against the policy.
    ///
    /// Guild roles are only looked up when the member's permissions are not enough on
    /// their own. They are read from the cache and fetched over HTTP only when the
    /// guild is not cached. A failed fetch is logged and counts as no matching role.
    ///
    /// # Arguments
    /// - `cache` - Gateway cache holding the guilds the bot is in
    /// - `http` - Discord HTTP client for fetching guild roles
    /// - `member` - Member attached to the interaction, `None` in DMs
    ///
    /// # Returns
    /// - `true` - The member is staff
    /// - `false` - The member is not staff or there is no member
    pub async fn check_member(
        &self,
        cache: &Cache,
        http: &Http,
        member: Option<&Member>,
    ) -> bool {
        let Some(member) = member else {
            return false;
        };

        if self.is_staff(member.permissions, std::iter::empty()) {
            return true;
        }

        if member.roles.is_empty() || self.role_names.is_empty() {
            return false;
        }

        if let Some(is_staff) = self.check_cached_roles(cache, member.guild_id, &member.roles) {
            return is_staff;
        }

        match member.guild_id.roles(http).await {
            Ok(guild_roles) => self.is_staff(
                member.permissions,
                member_role_names(&member.roles, &guild_roles),
            ),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch roles of guild {} for staff check: {}",
                    member.guild_id,
                    e
                );
                false
            }
        }
    }

    /// Matches role names against the cached guild, `None` when the guild is not cached.
    fn check_cached_roles(
        &self,
        cache: &Cache,
        guild_id: GuildId,
        member_roles: &[RoleId],
    ) -> Option<bool> {
        let guild = cache.guild(guild_id)?;

        Some(self.is_staff(None, member_role_names(member_roles, &guild.roles)))
    }
}
