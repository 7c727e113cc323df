//! Shared harness for datastore integration tests.
//!
//! Builds a fresh in-memory store per test, creates both tables with their
//! indexes, wires the DAOs together, and seeds the reference organization.

#![allow(dead_code)]

use mobitrack_core::{telemetry, Admin, MobitrackError, Organization};
use mobitrack_datastore::{
    AdminDao, DatastoreConfig, DocumentStore, GenericDao, MemoryStore, OrganizationDao,
};
use std::sync::Arc;

pub const ID: &str = "admin-id-123";
pub const EMAIL1: &str = "johnsmith@email.com";
pub const EMAIL2: &str = "johnsmithiscool@email.com";
pub const FIRST_NAME: &str = "John";
pub const LAST_NAME: &str = "Smith";
pub const EXISTS_ORGANIZATION_ID: &str = "org-id-abc";
pub const EXISTS_ORGANIZATION_NAME: &str = "Mobility Clinic";
pub const NOT_EXISTS_ORGANIZATION_ID: &str = "org-id-not";

/// Test datastore wrapper.
///
/// Exposes the DAOs under test plus the raw table adapters for seeding and
/// direct assertions.
pub struct TestDatastore {
    pub admin_dao: AdminDao,
    pub organization_dao: Arc<OrganizationDao>,
    pub admin_table: GenericDao<Admin>,
    pub organization_table: GenericDao<Organization>,
}

impl TestDatastore {
    /// Creates a harness with the default page size.
    pub async fn new() -> Self {
        Self::with_page_size(AdminDao::DEFAULT_PAGE_SIZE).await
    }

    /// Creates a harness with an explicit list-operation page size.
    pub async fn with_page_size(page_size: usize) -> Self {
        telemetry::init_tracing();

        let config = DatastoreConfig::default();
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

        let organization_spec = OrganizationDao::table_spec(&config.organization_table);
        let admin_spec = AdminDao::table_spec(&config.admin_table);
        store
            .create_table(organization_spec.clone())
            .await
            .expect("failed to create organization table");
        store
            .create_table(admin_spec.clone())
            .await
            .expect("failed to create admin table");

        let organization_table = GenericDao::new(Arc::clone(&store), &organization_spec);
        let admin_table = GenericDao::new(Arc::clone(&store), &admin_spec);
        let organization_dao = Arc::new(OrganizationDao::new(organization_table.clone()));
        let admin_dao =
            AdminDao::new(admin_table.clone(), Arc::clone(&organization_dao)).with_page_size(page_size);

        let datastore = Self {
            admin_dao,
            organization_dao,
            admin_table,
            organization_table,
        };
        datastore.seed_organization().await;
        datastore
    }

    /// Seeds the reference organization the admin tests hang off.
    async fn seed_organization(&self) {
        let mut organization = Organization::new(EXISTS_ORGANIZATION_NAME);
        organization.id = EXISTS_ORGANIZATION_ID.to_string();
        self.organization_table
            .put(&organization)
            .await
            .expect("failed to seed organization");
    }
}

pub fn build_admin() -> Admin {
    build_admin_with(ID, EMAIL1, FIRST_NAME, LAST_NAME, EXISTS_ORGANIZATION_ID)
}

pub fn build_admin_with(
    id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    organization_id: &str,
) -> Admin {
    let mut record = Admin::new(email, first_name, last_name, organization_id);
    record.id = id.to_string();
    record
}

pub fn assert_invalid_input(err: MobitrackError, expected: &str) {
    match err {
        MobitrackError::InvalidInput(message) => assert_eq!(message, expected),
        other => panic!("expected invalid input error, got {other:?}"),
    }
}
