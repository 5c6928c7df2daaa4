//! Cursor ("bookmark") pagination.
//!
//! List endpoints return a [`Page`]: a bounded batch of items plus an opaque
//! bookmark. A present bookmark is passed back verbatim on the next call; an
//! absent one means the sequence is exhausted. [`Paginator`] wraps that loop
//! as a lazy item sequence.
//!
//! There is no stable-total-count guarantee across pages: the underlying
//! collection may change between calls. That weak consistency is a property
//! of the API, not something the client papers over.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;

/// Standard query options for list-style calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    /// Cursor from the previous page's [`Page::bookmark`]. Omit to start a
    /// fresh traversal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,

    /// Maximum number of items per page. The server applies its own default
    /// and cap when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListOptions {
    /// Creates options that resume a traversal from `bookmark`.
    pub fn with_bookmark(bookmark: impl Into<String>) -> Self {
        Self {
            bookmark: Some(bookmark.into()),
            page_size: None,
        }
    }
}

/// One page of a list-style response: `{"items": [...], "bookmark": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,

    /// Opaque cursor for the next page. Absent (or empty, on some endpoints)
    /// when no further pages exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
}

impl<T> Page<T> {
    /// The cursor to request the next page with, normalized so that an
    /// empty-string bookmark reads as "no further pages".
    pub fn next_bookmark(&self) -> Option<&str> {
        self.bookmark.as_deref().filter(|b| !b.is_empty())
    }
}

/// A lazy, restartable traversal over a paginated collection.
///
/// The paginator owns a fetch closure mapping a bookmark (`None` for the
/// first page) to a future that resolves to a [`Page`]. Pages are fetched
/// only when previously returned items are exhausted; each bookmark is passed
/// back exactly once and never revisited. Dropping the paginator and creating
/// a new one restarts the traversal from the beginning.
///
/// # Examples
///
/// ```no_run
/// use pinterest_api::{Client, Paginator};
/// use pinterest_api::resources::ListBoardsOpts;
///
/// # async fn example() -> Result<(), pinterest_api::Error> {
/// let client = Client::new("token")?;
/// let boards = client.boards();
///
/// let mut paginator = Paginator::new(move |bookmark| {
///     let boards = boards.clone();
///     async move {
///         boards
///             .list(ListBoardsOpts {
///                 bookmark,
///                 page_size: Some(25),
///                 privacy: None,
///             })
///             .await
///     }
/// });
///
/// while let Some(board) = paginator.try_next().await? {
///     println!("{:?}", board.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Paginator<T, F, Fut>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    fetch: F,
    cursor: Option<String>,
    buffer: VecDeque<T>,
    exhausted: bool,
    started: bool,
}

impl<T, F, Fut> Paginator<T, F, Fut>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    /// Creates a paginator that starts a fresh traversal (no bookmark).
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cursor: None,
            buffer: VecDeque::new(),
            exhausted: false,
            started: false,
        }
    }

    /// Yields the next item, fetching the next page only when the current
    /// one is drained. Returns `Ok(None)` once the collection is exhausted.
    ///
    /// A fetch error is returned as-is and does not consume the pending
    /// cursor, so the same call can be retried by the caller.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted || (self.started && self.cursor.is_none()) {
                return Ok(None);
            }

            let page = (self.fetch)(self.cursor.clone()).await?;
            self.started = true;
            self.cursor = page.next_bookmark().map(str::to_string);
            if self.cursor.is_none() {
                self.exhausted = true;
            }
            self.buffer.extend(page.items);

            if self.buffer.is_empty() && self.exhausted {
                return Ok(None);
            }
        }
    }

    /// Drains the remaining items into a `Vec`.
    ///
    /// Fetches every remaining page; prefer [`try_next`](Self::try_next) for
    /// large collections.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while let Some(item) = self.try_next().await? {
            all.push(item);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn page(items: &[u32], bookmark: Option<&str>) -> Page<u32> {
        Page {
            items: items.to_vec(),
            bookmark: bookmark.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn walks_pages_in_order_and_terminates() {
        let requested = RefCell::new(Vec::new());

        let mut paginator = Paginator::new(|bookmark| {
            requested.borrow_mut().push(bookmark.clone());
            let page = match bookmark.as_deref() {
                None => page(&[1, 2], Some("b1")),
                Some("b1") => page(&[3], Some("b2")),
                Some("b2") => page(&[4, 5], None),
                other => panic!("unexpected bookmark {:?}", other),
            };
            async move { Ok(page) }
        });

        let mut seen = Vec::new();
        while let Some(item) = paginator.try_next().await.unwrap() {
            seen.push(item);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);

        // Exhausted paginators stay exhausted without refetching.
        assert!(paginator.try_next().await.unwrap().is_none());
        drop(paginator);

        // Each cursor was used exactly once, in order.
        assert_eq!(
            requested.into_inner(),
            vec![None, Some("b1".to_string()), Some("b2".to_string())]
        );
    }

    #[tokio::test]
    async fn pages_are_fetched_lazily() {
        let fetches = RefCell::new(0);

        let mut paginator = Paginator::new(|bookmark| {
            *fetches.borrow_mut() += 1;
            let page = match bookmark.as_deref() {
                None => page(&[1, 2], Some("b1")),
                _ => page(&[3], None),
            };
            async move { Ok(page) }
        });

        assert_eq!(paginator.try_next().await.unwrap(), Some(1));
        assert_eq!(paginator.try_next().await.unwrap(), Some(2));
        // Both items came from one fetch; the second page is still unfetched.
        assert_eq!(*fetches.borrow(), 1);

        assert_eq!(paginator.try_next().await.unwrap(), Some(3));
        assert_eq!(*fetches.borrow(), 2);
    }

    #[tokio::test]
    async fn empty_string_bookmark_means_done() {
        let mut paginator = Paginator::new(|bookmark| {
            assert!(bookmark.is_none(), "must not refetch on empty bookmark");
            async move { Ok(page(&[7], Some(""))) }
        });

        assert_eq!(paginator.try_next().await.unwrap(), Some(7));
        assert_eq!(paginator.try_next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn skips_empty_intermediate_pages() {
        let mut paginator = Paginator::new(|bookmark| {
            let page = match bookmark.as_deref() {
                None => page(&[], Some("b1")),
                _ => page(&[9], None),
            };
            async move { Ok(page) }
        });

        assert_eq!(paginator.try_next().await.unwrap(), Some(9));
        assert_eq!(paginator.try_next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn collect_all_drains_every_page() {
        let paginator = Paginator::new(|bookmark| {
            let page = match bookmark.as_deref() {
                None => page(&[1], Some("next")),
                _ => page(&[2], None),
            };
            async move { Ok(page) }
        });

        assert_eq!(paginator.collect_all().await.unwrap(), vec![1, 2]);
    }

    #[test]
    fn page_normalizes_empty_bookmark() {
        assert_eq!(page(&[], Some("")).next_bookmark(), None);
        assert_eq!(page(&[], Some("tok")).next_bookmark(), Some("tok"));
        assert_eq!(page(&[], None).next_bookmark(), None);
    }

    #[test]
    fn page_decodes_absent_bookmark() {
        let decoded: Page<u32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(decoded.items, vec![1, 2]);
        assert_eq!(decoded.bookmark, None);
    }
}
