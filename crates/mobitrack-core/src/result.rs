//! Result type aliases for the Mobitrack datastore.

use crate::MobitrackError;

/// A specialized `Result` type for datastore operations.
pub type MobitrackResult<T> = Result<T, MobitrackError>;
