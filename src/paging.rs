//! Pagination and fan-out helpers for assembling track lists from the TIDAL API.
//!
//! The wrapped vendor client caps single calls at 50 items, so larger track
//! lists have to be assembled from pages somewhere. Two helpers cover the
//! patterns the tools need:
//!
//! - [`fetch_all_items`] walks a paged source sequentially, accumulating up to
//!   an optional cap and stopping on end-of-data or a failed page. A source
//!   that takes its whole limit up front and ignores offsets is declared with
//!   [`PageConfig::single_request`] and gets exactly one fetch.
//! - [`fan_out_collect`] issues one request per seed id concurrently and merges
//!   the results in completion order, optionally de-duplicating by item id.
//!
//! Both prefer partial results over total failure: a page or seed that fails is
//! logged and absorbed, never propagated. The only error either helper returns
//! is a caller-input error (an empty seed list), reported before any work starts.

use std::collections::HashSet;
use std::future::Future;
use std::hash::Hash;

use anyhow::Result;
use tokio::task::JoinSet;

/// Largest single-request size the wrapped vendor client accepts.
pub const MAX_REQUEST_LIMIT: i32 = 50;

/// Page size used when walking a paginated source.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Clamp a requested limit into `[1, max]`.
///
/// Applied before every paginated or fanned-out fetch so an oversized (or
/// nonsensical) caller value never reaches the backing service.
pub fn bound_limit(limit: i32, max: i32) -> i32 {
    if limit < 1 {
        1
    } else if limit > max {
        max
    } else {
        limit
    }
}

/// How [`fetch_all_items`] should walk a paged source.
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Stop once this many items have been accumulated. `None` fetches all
    /// available items.
    pub max_items: Option<usize>,
    /// Number of items requested per page.
    pub page_size: usize,
    /// Whether the source honors a nonzero offset. Sources that only serve
    /// their first page get exactly one fetch.
    pub offset_supported: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            max_items: None,
            page_size: DEFAULT_PAGE_SIZE,
            offset_supported: true,
        }
    }
}

impl PageConfig {
    /// Fetch every available item.
    pub fn all() -> Self {
        Self::default()
    }

    /// Fetch at most `max` items.
    pub fn up_to(max: usize) -> Self {
        Self {
            max_items: Some(max),
            ..Self::default()
        }
    }

    /// One request carrying the whole cap, for sources that take the full
    /// limit up front and do not honor an offset.
    pub fn single_request(max: usize) -> Self {
        Self {
            max_items: Some(max),
            page_size: max.max(1),
            offset_supported: false,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Mark the source as unable to honor an offset.
    pub fn without_offset(mut self) -> Self {
        self.offset_supported = false;
        self
    }
}

/// Fetch all items from a paginated source, or up to a caller-specified cap.
///
/// `fetch_page` is called with `(limit, offset)` and returns one page of items.
/// Pages are fetched strictly in sequence since each offset depends on how many
/// items the previous page actually returned. Iteration stops when:
///
/// - the cap is reached,
/// - the source returns an empty page,
/// - the source returns a short page (fewer items than requested),
/// - the offset would be nonzero but the source does not support offsets, or
/// - a fetch fails, in which case everything accumulated so far is returned
///   and the failure is logged rather than surfaced.
///
/// A cap of zero returns an empty list without calling `fetch_page` at all.
pub async fn fetch_all_items<T, F, Fut>(mut fetch_page: F, config: PageConfig) -> Vec<T>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let page_size = config.page_size.max(1);
    let mut all_items: Vec<T> = Vec::new();
    let mut offset = 0usize;

    loop {
        let batch_size = match config.max_items {
            Some(max) => {
                let remaining = max.saturating_sub(all_items.len());
                if remaining == 0 {
                    break;
                }
                remaining.min(page_size)
            }
            None => page_size,
        };

        if offset > 0 && !config.offset_supported {
            break;
        }

        match fetch_page(batch_size, offset).await {
            Ok(items) => {
                if items.is_empty() {
                    break;
                }
                let received = items.len();
                all_items.extend(items);
                if received < batch_size {
                    // Short page means the source is exhausted.
                    break;
                }
                offset += received;
            }
            Err(e) => {
                tracing::warn!(
                    "Pagination stopped at offset {} with {} item(s) accumulated: {}",
                    offset,
                    all_items.len(),
                    e
                );
                break;
            }
        }
    }

    all_items
}

/// Fetch items for several independent seed ids concurrently and merge the
/// results into one list.
///
/// One task is spawned per seed and results are consumed as tasks complete, so
/// the output order is completion order, not seed order. When `dedupe` is true,
/// an item whose `item_key` has already been seen in this batch is dropped;
/// the seen-set is only ever touched by the merging loop, never by the tasks.
///
/// A seed whose fetch fails (or whose task panics) contributes nothing and is
/// logged; a single bad seed never aborts the batch. The only error returned
/// is an empty seed list, which is rejected before any task is spawned.
pub async fn fan_out_collect<S, T, K, F, Fut, KF>(
    seeds: Vec<S>,
    fetch_for_seed: F,
    dedupe: bool,
    item_key: KF,
) -> Result<Vec<T>>
where
    S: std::fmt::Display,
    T: Send + 'static,
    K: Eq + Hash,
    F: Fn(S) -> Fut,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
    KF: Fn(&T) -> K,
{
    if seeds.is_empty() {
        anyhow::bail!("At least one seed id is required");
    }

    let mut tasks = JoinSet::new();
    for seed in seeds {
        let label = seed.to_string();
        let fut = fetch_for_seed(seed);
        tasks.spawn(async move {
            match fut.await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Dropping results for seed {}: {}", label, e);
                    Vec::new()
                }
            }
        });
    }

    let mut seen: HashSet<K> = HashSet::new();
    let mut merged: Vec<T> = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        let items = match joined {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Fan-out task failed to complete: {}", e);
                continue;
            }
        };

        for item in items {
            if dedupe && !seen.insert(item_key(&item)) {
                continue;
            }
            merged.push(item);
        }
    }

    Ok(merged)
}
