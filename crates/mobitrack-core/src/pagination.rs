//! Pagination types for list operations.
//!
//! Partition-key queries against the store return results a page at a time,
//! each page carrying an opaque continuation key for the next one.

use serde::{Deserialize, Serialize};

/// One page of query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in index order.
    pub items: Vec<T>,
    /// Continuation key for the next page, absent on the final page.
    pub last_key: Option<String>,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, last_key: Option<String>) -> Self {
        Self { items, last_key }
    }

    /// Creates an empty final page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if a further page can be fetched.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.last_key.is_some()
    }

    /// Maps the page items to a different type, keeping the cursor.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            last_key: self.last_key,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
