//! Organization entity.

use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization that admins belong to.
///
/// Referenced as the foreign key of [`Admin`]; admins are never cascaded
/// when an organization goes away.
///
/// [`Admin`]: crate::domain::Admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Primary key. Empty until the record is first persisted.
    pub id: String,

    /// Organization name, looked up via its own secondary index.
    pub name: String,

    /// Creation timestamp, set once on create.
    pub created_at: Option<DateTime<Utc>>,

    /// Last-mutation timestamp, refreshed on every write.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Organization {
    /// Creates a new organization record awaiting persistence.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Organization {
    fn id(&self) -> &str {
        &self.id
    }
}
