//! Playlist-wide duration aggregation.
//!
//! Pages are fetched strictly in order, since each one carries the token for
//! the next. Durations of the items within a page are resolved with up to
//! `concurrency` lookups in flight and summed as they complete.

use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::catalog::{Catalog, PageCursor};
use crate::{ElapsedTime, Page, PlaylistId, PlaylistStats, Result};

/// Default number of concurrent duration lookups per page.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Drives a [`Catalog`] across every page of a playlist.
#[derive(Debug, Clone)]
pub struct Aggregator<C> {
    catalog: C,
    concurrency: usize,
}

impl<C: Catalog> Aggregator<C> {
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Set the number of duration lookups in flight per page. `1` resolves
    /// items one after another.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Count every item of the playlist and sum their durations.
    ///
    /// The first failing fetch or lookup aborts the whole run; no partial
    /// statistics are returned.
    pub async fn aggregate(&self, playlist: &PlaylistId) -> Result<PlaylistStats> {
        let mut stats = PlaylistStats::default();
        let mut cursor = PageCursor::Start;
        let mut pages = 0u32;

        while let Some(page) = cursor.next_page(&self.catalog, playlist).await? {
            pages += 1;

            stats.count += page.len() as u64;
            let page_total = self.resolve_page(&page).await?;
            stats.total += page_total;

            debug!(
                "Page {pages} of {playlist}: {} items, {page_total}; running total {} items, {}",
                page.len(),
                stats.count,
                stats.total
            );
        }

        info!(
            "Aggregated {playlist}: {} items over {pages} pages, total {}",
            stats.count, stats.total
        );

        Ok(stats)
    }

    async fn resolve_page(&self, page: &Page) -> Result<ElapsedTime> {
        stream::iter(&page.items)
            .map(|video| self.catalog.resolve_duration(video))
            .buffer_unordered(self.concurrency)
            .try_fold(ElapsedTime::ZERO, |acc, d| async move { Ok(acc + d) })
            .await
    }
}
