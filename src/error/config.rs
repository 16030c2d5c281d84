use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot start without this variable. Check the `.env.example` file for
    /// the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value could not be parsed.
    ///
    /// Raised for numeric variables such as `GUILD_ID` that contain anything other
    /// than a Discord snowflake.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Raw value that failed to parse
        value: String,
    },
}
