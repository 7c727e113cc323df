//! Admin data access.

use crate::generic::GenericDao;
use crate::organization_dao::OrganizationDao;
use crate::pages::QueryPages;
use crate::store::{IndexSpec, TableSpec};
use chrono::Utc;
use mobitrack_core::{ids, validation, Admin, MobitrackError, MobitrackResult};
use std::sync::Arc;
use tracing::debug;

/// Secondary index over the unique admin email.
pub const EMAIL_INDEX: &str = "email-index";
/// Secondary index partitioned by owning organization.
pub const ORGANIZATION_INDEX: &str = "organization-index";

/// DAO for [`Admin`] records.
///
/// Orchestrates the table adapter and the organization existence oracle:
/// every operation validates its inputs before the first store round trip,
/// and create enforces referential integrity plus email uniqueness.
#[derive(Debug, Clone)]
pub struct AdminDao {
    generic: GenericDao<Admin>,
    organizations: Arc<OrganizationDao>,
    page_size: usize,
}

impl AdminDao {
    /// Page size used by list operations unless overridden.
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    /// Returns the table layout admins are stored under.
    #[must_use]
    pub fn table_spec(table: impl Into<String>) -> TableSpec {
        TableSpec::new(table, "id")
            .with_index(IndexSpec::unique(EMAIL_INDEX, "email"))
            .with_index(IndexSpec::new(ORGANIZATION_INDEX, "organization_id"))
    }

    /// Creates a new admin DAO over the given collaborators.
    #[must_use]
    pub fn new(generic: GenericDao<Admin>, organizations: Arc<OrganizationDao>) -> Self {
        Self {
            generic,
            organizations,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the list-operation page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Persists a new admin.
    ///
    /// Fails with the field-specific invalid-input error on blank fields,
    /// with a record-not-found error when the organization is unknown, and
    /// with a duplicate-record error when the email is already taken. On
    /// success the caller's record is updated in place with the assigned id
    /// and timestamps; any caller-supplied id is discarded.
    ///
    /// Email uniqueness is a read-then-write check: two concurrent creates
    /// racing on the same email can both pass it. Best effort, not a
    /// transactional guarantee.
    pub async fn create(&self, record: &mut Admin) -> MobitrackResult<()> {
        validation::admin_for_create(record)?;
        debug!(email = %record.email, "creating admin");

        self.organizations
            .find_by_id(&record.organization_id)
            .await?
            .ok_or_else(|| MobitrackError::not_found("organization", &record.organization_id))?;

        if self
            .generic
            .get_by_index(EMAIL_INDEX, &record.email)
            .await?
            .is_some()
        {
            return Err(MobitrackError::duplicate(format!(
                "admin with email {} already exists",
                record.email
            )));
        }

        let now = Utc::now();
        record.id = ids::new_record_id();
        record.created_at = Some(now);
        record.updated_at = Some(now);
        self.generic.put(record).await
    }

    /// Looks up an admin by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: &str) -> MobitrackResult<Option<Admin>> {
        validation::not_blank(id, validation::ID_BLANK)?;
        debug!(id, "finding admin by id");
        self.generic.get(id).await
    }

    /// Looks up an admin by email via the unique email index.
    /// Absence is `Ok(None)`.
    pub async fn find_by_email(&self, email: &str) -> MobitrackResult<Option<Admin>> {
        validation::not_blank(email, validation::EMAIL_BLANK)?;
        debug!(email, "finding admin by email");
        self.generic.get_by_index(EMAIL_INDEX, email).await
    }

    /// Lists the admins belonging to an organization as a lazy page cursor.
    ///
    /// The blank guard fires here, before the cursor exists; the store is
    /// only consulted as pages are pulled. An organization with no admins
    /// yields exactly one empty page.
    pub fn find_all_in_organization(
        &self,
        organization_id: &str,
    ) -> MobitrackResult<QueryPages<Admin>> {
        validation::not_blank(organization_id, validation::ORGANIZATION_ID_BLANK)?;
        debug!(organization_id, "listing admins in organization");
        self.generic
            .query(ORGANIZATION_INDEX, organization_id, self.page_size)
    }

    /// Overwrites an existing admin.
    ///
    /// Fails with the field-specific invalid-input error on blank fields
    /// (including the id) and with a record-not-found error when the id is
    /// not stored. The stored `created_at` is preserved and `updated_at`
    /// refreshed, both reflected on the caller's record in place.
    /// Organization existence is not re-checked on update.
    pub async fn update(&self, record: &mut Admin) -> MobitrackResult<()> {
        validation::admin_for_update(record)?;
        debug!(id = %record.id, "updating admin");

        let existing = self
            .generic
            .get(&record.id)
            .await?
            .ok_or_else(|| MobitrackError::not_found("admin", &record.id))?;

        record.created_at = existing.created_at;
        record.updated_at = Some(Utc::now());
        self.generic.update(record).await
    }

    /// Deletes an admin by id. Deleting an absent id succeeds silently.
    pub async fn delete(&self, id: &str) -> MobitrackResult<()> {
        validation::not_blank(id, validation::ID_BLANK)?;
        debug!(id, "deleting admin");
        self.generic.delete(id).await
    }
}
