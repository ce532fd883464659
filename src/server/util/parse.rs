use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored Discord ID.
///
/// # Returns
/// - `Ok(None)` - No value stored
/// - `Ok(Some(u64))` - Stored value parsed
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a u64
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Splits stored comma-separated tags into a list, skipping empty entries.
pub fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags into their stored comma-separated form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
