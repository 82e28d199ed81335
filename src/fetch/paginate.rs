//! Cursor-based pagination
//!
//! [`collect`] keeps requesting pages while the API hands back a cursor and
//! the caller's cap is not yet reached. A failed fetch stops the loop and
//! keeps what was gathered so far; [`CollectOutcome`] records why the loop
//! ended so callers can tell a partial result from a complete one.

use super::fetcher::FetchError;
use super::payload::Payload;
use std::future::Future;

/// Why a collection loop stopped
#[derive(Debug)]
pub enum CollectOutcome {
    /// The cap was reached; later pages were not requested
    CapReached,
    /// The last page carried no cursor
    Exhausted,
    /// A page came back as an API error document
    ApiError(String),
    /// A page could not be fetched at all
    FetchFailed(FetchError),
}

/// Items gathered by [`collect`] and how the loop ended
#[derive(Debug)]
pub struct Collected<T> {
    pub items: Vec<T>,
    pub outcome: CollectOutcome,
    /// Number of pages actually fetched
    pub pages: u32,
}

impl<T> Collected<T> {
    /// Returns true if the loop ended naturally (cap or end of results)
    pub fn is_complete(&self) -> bool {
        matches!(
            self.outcome,
            CollectOutcome::CapReached | CollectOutcome::Exhausted
        )
    }
}

/// Collects up to `cap` items across cursor-paginated responses
///
/// # Loop
///
/// 1. Fetch a page with the current cursor (`None` on the first call)
/// 2. Append the page's items; stop once `cap` is reached (truncating)
/// 3. Read the next cursor; stop when there is none
///
/// A `cap` of zero returns immediately without fetching.
///
/// # Arguments
///
/// * `fetch_page` - Issues one request for the given cursor
/// * `extract_items` - Maps a page to its items
/// * `extract_cursor` - Reads the continuation cursor from a page
/// * `cap` - Maximum number of items to return
pub async fn collect<T, F, Fut, E, C>(
    mut fetch_page: F,
    extract_items: E,
    extract_cursor: C,
    cap: usize,
) -> Collected<T>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Payload, FetchError>>,
    E: Fn(&Payload) -> Vec<T>,
    C: Fn(&Payload) -> Option<String>,
{
    let mut items = Vec::new();
    let mut pages = 0;
    let mut cursor = None;

    if cap == 0 {
        return Collected {
            items,
            outcome: CollectOutcome::CapReached,
            pages,
        };
    }

    let outcome = loop {
        let payload = match fetch_page(cursor.take()).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Stopping pagination after {} pages: {}", pages, e);
                break CollectOutcome::FetchFailed(e);
            }
        };
        pages += 1;

        if let Some(message) = payload.api_error() {
            tracing::warn!("API error on page {}: {}", pages, message);
            break CollectOutcome::ApiError(message);
        }

        items.extend(extract_items(&payload));
        if items.len() >= cap {
            items.truncate(cap);
            break CollectOutcome::CapReached;
        }

        match extract_cursor(&payload) {
            Some(next) => cursor = Some(next),
            None => break CollectOutcome::Exhausted,
        }
    };

    tracing::debug!(
        "Collected {} items over {} pages ({:?})",
        items.len(),
        pages,
        outcome
    );

    Collected {
        items,
        outcome,
        pages,
    }
}
