//! In-memory document store.

use super::{Document, DocumentPage, DocumentStore, TableSpec};
use async_trait::async_trait;
use mobitrack_core::{MobitrackError, MobitrackResult};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// In-process [`DocumentStore`] backed by ordered maps.
///
/// Items are held per table in a `BTreeMap`, so index queries come back in
/// primary-key order with deterministic continuation keys. Per-operation
/// atomicity comes from the interior lock; nothing is coordinated across
/// operations, matching what a managed store would offer.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, TableState>>,
}

struct TableState {
    spec: TableSpec,
    items: BTreeMap<String, Document>,
}

impl MemoryStore {
    /// Creates an empty store with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn primary_key(spec: &TableSpec, item: &Document) -> MobitrackResult<String> {
        item.get(&spec.key_attribute)
            .and_then(Document::as_str)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                MobitrackError::store(format!(
                    "item is missing key attribute `{}`",
                    spec.key_attribute
                ))
            })
    }

    fn index_attribute(state: &TableState, index: &str) -> MobitrackResult<String> {
        state
            .spec
            .indexes
            .iter()
            .find(|candidate| candidate.name == index)
            .map(|candidate| candidate.key_attribute.clone())
            .ok_or_else(|| {
                MobitrackError::store(format!(
                    "index `{}` does not exist on table `{}`",
                    index, state.spec.name
                ))
            })
    }

    fn attribute_matches(item: &Document, attribute: &str, value: &str) -> bool {
        item.get(attribute).and_then(Document::as_str) == Some(value)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_table(&self, spec: TableSpec) -> MobitrackResult<()> {
        debug!(table = %spec.name, "creating table");
        let mut tables = self.tables.write();
        tables.insert(
            spec.name.clone(),
            TableState {
                spec,
                items: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn drop_table(&self, table: &str) -> MobitrackResult<()> {
        debug!(table, "dropping table");
        self.tables.write().remove(table);
        Ok(())
    }

    async fn put_item(&self, table: &str, item: Document) -> MobitrackResult<()> {
        let mut tables = self.tables.write();
        let state = tables
            .get_mut(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        let key = Self::primary_key(&state.spec, &item)?;
        state.items.insert(key, item);
        Ok(())
    }

    async fn get_item(&self, table: &str, key: &str) -> MobitrackResult<Option<Document>> {
        let tables = self.tables.read();
        let state = tables
            .get(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        Ok(state.items.get(key).cloned())
    }

    async fn update_item(&self, table: &str, item: Document) -> MobitrackResult<()> {
        let mut tables = self.tables.write();
        let state = tables
            .get_mut(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        let key = Self::primary_key(&state.spec, &item)?;
        if !state.items.contains_key(&key) {
            return Err(MobitrackError::not_found("item", key));
        }
        state.items.insert(key, item);
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: &str) -> MobitrackResult<()> {
        let mut tables = self.tables.write();
        let state = tables
            .get_mut(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        state.items.remove(key);
        Ok(())
    }

    async fn get_by_index(
        &self,
        table: &str,
        index: &str,
        value: &str,
    ) -> MobitrackResult<Option<Document>> {
        let tables = self.tables.read();
        let state = tables
            .get(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        let attribute = Self::index_attribute(state, index)?;
        Ok(state
            .items
            .values()
            .find(|item| Self::attribute_matches(item, &attribute, value))
            .cloned())
    }

    async fn query_index(
        &self,
        table: &str,
        index: &str,
        value: &str,
        start_key: Option<&str>,
        limit: usize,
    ) -> MobitrackResult<DocumentPage> {
        // A zero limit would never make progress.
        let limit = limit.max(1);

        let tables = self.tables.read();
        let state = tables
            .get(table)
            .ok_or_else(|| MobitrackError::store(format!("table `{table}` does not exist")))?;
        let attribute = Self::index_attribute(state, index)?;

        let mut selected: Vec<(&String, &Document)> = Vec::new();
        let mut truncated = false;
        for (key, item) in &state.items {
            if !Self::attribute_matches(item, &attribute, value) {
                continue;
            }
            if let Some(start) = start_key {
                if key.as_str() <= start {
                    continue;
                }
            }
            if selected.len() < limit {
                selected.push((key, item));
            } else {
                truncated = true;
                break;
            }
        }

        let last_key = if truncated {
            selected.last().map(|(key, _)| (*key).clone())
        } else {
            None
        };
        Ok(DocumentPage {
            items: selected.into_iter().map(|(_, item)| item.clone()).collect(),
            last_key,
        })
    }
}
