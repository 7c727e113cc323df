//! Record id generation.
//!
//! Record ids are opaque strings as far as the store is concerned; they are
//! generated as UUIDv7 so primary-key order tracks creation time.

use uuid::Uuid;

/// Generates a fresh record id.
#[must_use]
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}
