//! Organization data access.

use crate::generic::GenericDao;
use crate::store::{IndexSpec, TableSpec};
use chrono::Utc;
use mobitrack_core::{ids, validation, MobitrackResult, Organization};
use tracing::debug;

/// Secondary index over the organization name.
pub const NAME_INDEX: &str = "name-index";

/// DAO for [`Organization`] records.
///
/// Mostly serves as the existence oracle consulted by
/// [`AdminDao::create`]; organizations themselves are rarely touched.
///
/// [`AdminDao::create`]: crate::admin_dao::AdminDao::create
#[derive(Debug, Clone)]
pub struct OrganizationDao {
    generic: GenericDao<Organization>,
}

impl OrganizationDao {
    /// Returns the table layout organizations are stored under.
    #[must_use]
    pub fn table_spec(table: impl Into<String>) -> TableSpec {
        TableSpec::new(table, "id").with_index(IndexSpec::unique(NAME_INDEX, "name"))
    }

    /// Creates a new organization DAO over the given table adapter.
    #[must_use]
    pub fn new(generic: GenericDao<Organization>) -> Self {
        Self { generic }
    }

    /// Persists a new organization, assigning its id and timestamps.
    ///
    /// The caller's record is updated in place with the assigned id and
    /// timestamps.
    pub async fn create(&self, record: &mut Organization) -> MobitrackResult<()> {
        validation::organization_for_create(record)?;
        debug!(name = %record.name, "creating organization");

        let now = Utc::now();
        record.id = ids::new_record_id();
        record.created_at = Some(now);
        record.updated_at = Some(now);
        self.generic.put(record).await
    }

    /// Looks up an organization by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: &str) -> MobitrackResult<Option<Organization>> {
        validation::not_blank(id, validation::ID_BLANK)?;
        debug!(id, "finding organization by id");
        self.generic.get(id).await
    }

    /// Looks up an organization by name. Absence is `Ok(None)`.
    pub async fn find_by_name(&self, name: &str) -> MobitrackResult<Option<Organization>> {
        validation::not_blank(name, validation::NAME_BLANK)?;
        debug!(name, "finding organization by name");
        self.generic.get_by_index(NAME_INDEX, name).await
    }
}
