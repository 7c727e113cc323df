//! Lazy page cursor over index partition queries.

use crate::generic::GenericDao;
use futures::Stream;
use mobitrack_core::{Entity, MobitrackResult, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Lazy, restartable sequence of result pages.
///
/// The first call to [`next_page`] always yields a page, even when nothing
/// matches: callers observe one empty page rather than an empty sequence.
/// Further pages follow while the store hands back a continuation key.
///
/// [`next_page`]: QueryPages::next_page
#[derive(Debug, Clone)]
pub struct QueryPages<T> {
    dao: GenericDao<T>,
    index: String,
    value: String,
    page_size: usize,
    cursor: Option<String>,
    started: bool,
}

impl<T> QueryPages<T>
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub(crate) fn new(
        dao: GenericDao<T>,
        index: impl Into<String>,
        value: impl Into<String>,
        page_size: usize,
    ) -> Self {
        Self {
            dao,
            index: index.into(),
            value: value.into(),
            page_size,
            cursor: None,
            started: false,
        }
    }

    /// Returns true if another page can be fetched.
    ///
    /// True before the first fetch regardless of the result size.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.started || self.cursor.is_some()
    }

    /// Fetches the next page, or `None` once the sequence is exhausted.
    pub async fn next_page(&mut self) -> MobitrackResult<Option<Page<T>>> {
        if self.started && self.cursor.is_none() {
            return Ok(None);
        }
        let page = self
            .dao
            .query_page(
                &self.index,
                &self.value,
                self.cursor.as_deref(),
                self.page_size,
            )
            .await?;
        self.started = true;
        self.cursor = page.last_key.clone();
        Ok(Some(page))
    }

    /// Rewinds the cursor to the start of the sequence.
    pub fn restart(&mut self) {
        self.started = false;
        self.cursor = None;
    }

    /// Drains the remaining pages into one flat item list.
    pub async fn collect_items(mut self) -> MobitrackResult<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.items);
        }
        Ok(items)
    }

    /// Adapts the cursor into a stream of pages.
    pub fn into_stream(self) -> impl Stream<Item = MobitrackResult<Page<T>>> {
        futures::stream::try_unfold(self, |mut pages| async move {
            let page = pages.next_page().await?;
            Ok(page.map(|page| (page, pages)))
        })
    }
}
