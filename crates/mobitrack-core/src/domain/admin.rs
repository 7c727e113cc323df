//! Admin entity.

use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrator of one organization.
///
/// Every persisted admin has a non-blank id, email, first name, last name,
/// and organization id, and the organization existed when the admin was
/// created. The email is unique across all admins (enforced best-effort at
/// create time). Ids and timestamps are assigned by the DAO on create; any
/// caller-supplied id is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    /// Primary key. Empty until the record is first persisted.
    pub id: String,

    /// Unique email address.
    pub email: String,

    /// Admin's first name.
    pub first_name: String,

    /// Admin's last name.
    pub last_name: String,

    /// Owning organization (foreign key).
    pub organization_id: String,

    /// Creation timestamp, set once on create.
    pub created_at: Option<DateTime<Utc>>,

    /// Last-mutation timestamp, refreshed on every write.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Admin {
    /// Creates a new admin record awaiting persistence.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            organization_id: organization_id.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the admin's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Admin {
    fn id(&self) -> &str {
        &self.id
    }
}
