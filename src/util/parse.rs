use crate::error::{internal::InternalError, AppError};

/// Converts a Discord snowflake into the signed form stored in BIGINT columns.
///
/// Snowflakes use 63 bits, so the cast never changes the value for real ids.
pub fn id_to_db(id: u64) -> i64 {
    id as i64
}

/// Converts a stored BIGINT back into a Discord snowflake.
///
/// # Arguments
/// - `value` - The stored column value
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(AppError::InternalErr(InvalidStoredId))` - The stored value is negative
pub fn id_from_db(value: i64) -> Result<u64, AppError> {
    let id = u64::try_from(value).map_err(|e| InternalError::InvalidStoredId { value, source: e })?;

    Ok(id)
}
