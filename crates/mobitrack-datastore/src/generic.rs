//! Type-agnostic table adapter.

use crate::pages::QueryPages;
use crate::store::{DocumentStore, TableSpec};
use mobitrack_core::{Entity, MobitrackError, MobitrackResult, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Thin adapter binding one table and its named secondary indexes.
///
/// Mechanically converts between entities and store documents; no business
/// validation happens here. Collaborators receive the store handle and the
/// table layout at construction, never through ambient state.
pub struct GenericDao<T> {
    store: Arc<dyn DocumentStore>,
    table: String,
    indexes: Vec<String>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for GenericDao<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            table: self.table.clone(),
            indexes: self.indexes.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for GenericDao<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericDao")
            .field("table", &self.table)
            .field("indexes", &self.indexes)
            .finish_non_exhaustive()
    }
}

impl<T> GenericDao<T>
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Creates an adapter for the table described by `spec`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, spec: &TableSpec) -> Self {
        Self {
            store,
            table: spec.name.clone(),
            indexes: spec.indexes.iter().map(|index| index.name.clone()).collect(),
            _entity: PhantomData,
        }
    }

    /// Returns the table name this adapter is bound to.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    fn require_index(&self, index: &str) -> MobitrackResult<()> {
        if self.indexes.iter().any(|name| name == index) {
            return Ok(());
        }
        Err(MobitrackError::store(format!(
            "index `{}` is not mapped on table `{}`",
            index, self.table
        )))
    }

    /// Inserts or overwrites an item.
    pub async fn put(&self, item: &T) -> MobitrackResult<()> {
        debug!(table = %self.table, id = %item.id(), "put item");
        let document = serde_json::to_value(item)?;
        self.store.put_item(&self.table, document).await
    }

    /// Fetches an item by primary key.
    pub async fn get(&self, id: &str) -> MobitrackResult<Option<T>> {
        match self.store.get_item(&self.table, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Equality lookup on a unique secondary index.
    pub async fn get_by_index(&self, index: &str, value: &str) -> MobitrackResult<Option<T>> {
        self.require_index(index)?;
        match self.store.get_by_index(&self.table, index, value).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Fetches one page of an index partition query.
    pub async fn query_page(
        &self,
        index: &str,
        value: &str,
        start_key: Option<&str>,
        limit: usize,
    ) -> MobitrackResult<Page<T>> {
        self.require_index(index)?;
        let raw = self
            .store
            .query_index(&self.table, index, value, start_key, limit)
            .await?;
        let items = raw
            .items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Page::new(items, raw.last_key))
    }

    /// Builds a lazy page cursor over an index partition query.
    pub fn query(
        &self,
        index: &str,
        value: &str,
        page_size: usize,
    ) -> MobitrackResult<QueryPages<T>> {
        self.require_index(index)?;
        Ok(QueryPages::new(self.clone(), index, value, page_size))
    }

    /// Overwrites an existing item; fails if the key is not stored.
    pub async fn update(&self, item: &T) -> MobitrackResult<()> {
        debug!(table = %self.table, id = %item.id(), "update item");
        let document = serde_json::to_value(item)?;
        self.store.update_item(&self.table, document).await
    }

    /// Deletes an item by primary key. Absent keys are ignored.
    pub async fn delete(&self, id: &str) -> MobitrackResult<()> {
        self.store.delete_item(&self.table, id).await
    }
}
