use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord IDs are stored as strings; a value that fails to parse means the
    /// row was written outside the repositories. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Stored bump source is not one of the known sources.
    #[error("Unknown bump source '{0}'")]
    UnknownBumpSource(String),

    /// A bump kept losing the conditional write to concurrent bumps.
    ///
    /// Only reachable with a near-zero cooldown under sustained contention.
    #[error("Bump of listing {server_id} lost {attempts} conditional writes in a row")]
    BumpContention {
        /// The listing being bumped
        server_id: i32,
        /// Number of attempts made
        attempts: usize,
    },

    /// A listing's bump count is already at the largest storable value.
    #[error("Bump count of listing {server_id} cannot be incremented past {count}")]
    BumpCountOverflow {
        /// The listing being bumped
        server_id: i32,
        /// The stored bump count
        count: i32,
    },

    /// Failure to convert a UTC timestamp to a Discord timestamp
    ///
    /// Occurs when building bot embeds with a timestamp out of Discord's range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
