//! Cursor pagination over [`Paginated`] responses.
//!
//! Both helpers fetch pages one at a time, in order, and stop when a page
//! comes back without a cursor or without items. The first error ends the
//! loop and is returned unchanged.

use std::future::Future;

use catalogsync_client::CatalogResult;
use catalogsync_types::Paginated;
use tracing::debug;

/// Fetches every page and returns all items in page order.
///
/// `fetch` receives `None` for the first page and the previous page's cursor
/// afterwards.
pub async fn collect_all<P, F, Fut>(mut fetch: F) -> CatalogResult<Vec<P::Item>>
where
    P: Paginated,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = CatalogResult<P>>,
{
    let mut all = Vec::new();
    let mut cursor = None;
    let mut page_number = 0usize;

    loop {
        page_number += 1;
        let (items, next) = fetch(cursor.take()).await?.into_parts();
        debug!(page = page_number, items = items.len(), more = next.is_some(), "fetched page");

        let exhausted = items.is_empty();
        all.extend(items);

        match next {
            Some(token) if !exhausted => cursor = Some(token),
            _ => break,
        }
    }

    Ok(all)
}

/// Fetches pages until an item satisfies `predicate` and returns it.
///
/// No page after the one holding the match is requested.
pub async fn find_first<P, F, Fut, Pred>(
    mut fetch: F,
    mut predicate: Pred,
) -> CatalogResult<Option<P::Item>>
where
    P: Paginated,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = CatalogResult<P>>,
    Pred: FnMut(&P::Item) -> bool,
{
    let mut cursor = None;
    let mut page_number = 0usize;

    loop {
        page_number += 1;
        let (items, next) = fetch(cursor.take()).await?.into_parts();
        debug!(page = page_number, items = items.len(), more = next.is_some(), "scanning page");

        if items.is_empty() {
            return Ok(None);
        }
        if let Some(found) = items.into_iter().find(|item| predicate(item)) {
            return Ok(Some(found));
        }

        match next {
            Some(token) => cursor = Some(token),
            None => return Ok(None),
        }
    }
}
