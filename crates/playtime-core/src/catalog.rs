//! The seam between playlist aggregation and a remote catalog.

use std::future::Future;

use crate::{ElapsedTime, Page, PlaylistId, Result, VideoId};

/// Read-only access to playlist membership and video durations.
pub trait Catalog: Send + Sync {
    /// Fetch one page of playlist items. `page_token` is `None` for the first
    /// page and otherwise the previous page's token, verbatim.
    fn fetch_page(
        &self,
        playlist: &PlaylistId,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<Page>> + Send;

    /// Look up the duration of a single video.
    fn resolve_duration(&self, video: &VideoId) -> impl Future<Output = Result<ElapsedTime>> + Send;

    /// Enumerate every item of a playlist, following continuation tokens
    /// until the catalog reports the last page.
    fn list_items(&self, playlist: &PlaylistId) -> impl Future<Output = Result<Vec<VideoId>>> + Send {
        async move {
            let mut items = Vec::new();
            let mut cursor = PageCursor::Start;
            while let Some(page) = cursor.next_page(self, playlist).await? {
                items.extend(page.items);
            }
            Ok(items)
        }
    }
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn fetch_page(
        &self,
        playlist: &PlaylistId,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<Page>> + Send {
        (**self).fetch_page(playlist, page_token)
    }

    fn resolve_duration(&self, video: &VideoId) -> impl Future<Output = Result<ElapsedTime>> + Send {
        (**self).resolve_duration(video)
    }
}

/// Pagination state. A cursor moves from `Start` through any number of
/// `Next` states and ends in `Done` once a page carries no token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageCursor {
    #[default]
    Start,
    Next(String),
    Done,
}

impl PageCursor {
    /// Token for the next fetch. `None` both before the first page and
    /// after the last one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Next(token) => Some(token),
            Self::Start | Self::Done => None,
        }
    }

    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Move past `page`.
    pub fn advance(&mut self, page: &Page) {
        *self = match page.next_token() {
            Some(token) => Self::Next(token.to_string()),
            None => Self::Done,
        };
    }

    /// Fetch the page this cursor points at and move past it. Returns
    /// `None` once the last page has been consumed.
    pub async fn next_page<C>(&mut self, catalog: &C, playlist: &PlaylistId) -> Result<Option<Page>>
    where
        C: Catalog + ?Sized,
    {
        if self.is_done() {
            return Ok(None);
        }
        let page = catalog.fetch_page(playlist, self.token()).await?;
        self.advance(&page);
        Ok(Some(page))
    }
}
