//! Document-store abstraction.
//!
//! The external store is modelled as named tables of JSON documents, each
//! table keyed by one string attribute and carrying a set of named
//! secondary indexes. Everything above this seam is store-agnostic; the
//! in-memory implementation in [`memory`] stands in for a managed store.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use mobitrack_core::MobitrackResult;

/// A stored item, as schemaless JSON.
pub type Document = serde_json::Value;

/// A named secondary index over one string attribute.
#[derive(Debug, Clone)]
pub struct IndexSpec {
    /// Index name, unique within its table.
    pub name: String,
    /// The document attribute the index is keyed by.
    pub key_attribute: String,
    /// Whether lookups expect at most one logical match.
    ///
    /// The store does not enforce this at write time; uniqueness remains a
    /// read-then-write concern of the caller.
    pub unique: bool,
}

impl IndexSpec {
    /// Creates a non-unique (partition) index.
    #[must_use]
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
            unique: false,
        }
    }

    /// Creates an index intended for unique equality lookups.
    #[must_use]
    pub fn unique(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
            unique: true,
        }
    }
}

/// A table definition: name, primary key attribute, secondary indexes.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Table name.
    pub name: String,
    /// The document attribute holding the primary key.
    pub key_attribute: String,
    /// Secondary indexes on the table.
    pub indexes: Vec<IndexSpec>,
}

impl TableSpec {
    /// Creates a table spec with no secondary indexes.
    #[must_use]
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
            indexes: Vec::new(),
        }
    }

    /// Adds a secondary index.
    #[must_use]
    pub fn with_index(mut self, index: IndexSpec) -> Self {
        self.indexes.push(index);
        self
    }
}

/// One page of raw query results with an opaque continuation key.
#[derive(Debug, Clone, Default)]
pub struct DocumentPage {
    /// Matching documents, in index order.
    pub items: Vec<Document>,
    /// Continuation key, absent on the final page.
    pub last_key: Option<String>,
}

/// Table-and-index primitives offered by the external store.
///
/// Implementations provide per-operation atomicity and immediate read
/// visibility after writes; nothing here coordinates across operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Registers a table. An existing table of the same name is replaced.
    async fn create_table(&self, spec: TableSpec) -> MobitrackResult<()>;

    /// Removes a table and all its items. Absent tables are ignored.
    async fn drop_table(&self, table: &str) -> MobitrackResult<()>;

    /// Inserts or overwrites an item by its primary key.
    async fn put_item(&self, table: &str, item: Document) -> MobitrackResult<()>;

    /// Fetches an item by primary key.
    async fn get_item(&self, table: &str, key: &str) -> MobitrackResult<Option<Document>>;

    /// Overwrites an existing item, rejecting keys that are not stored.
    async fn update_item(&self, table: &str, item: Document) -> MobitrackResult<()>;

    /// Deletes an item by primary key. Absent keys are ignored.
    async fn delete_item(&self, table: &str, key: &str) -> MobitrackResult<()>;

    /// Equality lookup on a secondary index, returning the first match.
    async fn get_by_index(
        &self,
        table: &str,
        index: &str,
        value: &str,
    ) -> MobitrackResult<Option<Document>>;

    /// One page of an index partition query, resuming after `start_key`.
    async fn query_index(
        &self,
        table: &str,
        index: &str,
        value: &str,
        start_key: Option<&str>,
        limit: usize,
    ) -> MobitrackResult<DocumentPage>;
}
