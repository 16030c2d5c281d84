use crate::error::{config::ConfigError, AppError};

const DEFAULT_STAFF_ROLES: &str = "Admin,Moderador ES";

pub struct Config {
    pub discord_token: String,
    /// Guild the slash commands are synced to. Commands are not synced without it.
    pub guild_id: Option<u64>,
    /// Role names that grant staff access in addition to elevated guild permissions.
    pub staff_roles: Vec<String>,
    /// User that receives a DM for every new registration.
    pub owner_id: Option<u64>,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DISCORD_TOKEN` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `GUILD_ID` is not a snowflake
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let guild_id = match lookup("GUILD_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "GUILD_ID".to_string(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            discord_token,
            guild_id,
            staff_roles: parse_staff_roles(lookup("STAFF_ROLES")),
            owner_id: parse_owner_id(lookup("OWNER_ID")),
            database_url: lookup("DATABASE_URL").map(|url| normalize_database_url(&url)),
        })
    }
}

/// Splits the comma-separated staff role list, dropping blank entries.
///
/// Falls back to `Admin,Moderador ES` when the variable is unset.
pub fn parse_staff_roles(raw: Option<String>) -> Vec<String> {
    raw.as_deref()
        .unwrap_or(DEFAULT_STAFF_ROLES)
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the owner id; anything that is not a non-zero number disables owner DMs.
fn parse_owner_id(raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Rewrites a leading `postgres://` scheme to `postgresql://`.
///
/// Hosting providers commonly hand out the short scheme; only the first occurrence
/// at the start of the URL is replaced.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
