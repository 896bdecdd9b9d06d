use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use mcp_tidal::paging::{bound_limit, fetch_all_items, PageConfig, MAX_REQUEST_LIMIT};

/// One page of a fake source holding `total` items numbered from zero.
fn page(total: usize, limit: usize, offset: usize) -> Vec<usize> {
    let end = total.min(offset + limit);
    if offset >= end {
        Vec::new()
    } else {
        (offset..end).collect()
    }
}

#[tokio::test]
async fn aggregator_respects_cap_exactly() {
    let items = fetch_all_items(
        |limit, offset| async move { Ok(page(250, limit, offset)) },
        PageConfig::up_to(120),
    )
    .await;

    assert_eq!(items.len(), 120);
    assert_eq!(items, (0..120).collect::<Vec<_>>());
}

#[tokio::test]
async fn aggregator_cap_larger_than_source_returns_everything() {
    let items = fetch_all_items(
        |limit, offset| async move { Ok(page(30, limit, offset)) },
        PageConfig::up_to(500),
    )
    .await;

    assert_eq!(items, (0..30).collect::<Vec<_>>());
}

#[tokio::test]
async fn aggregator_uncapped_terminates_on_short_page() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    // 3 full pages of 100 followed by a short page of 40.
    let items = fetch_all_items(
        move |limit, offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(page(340, limit, offset))
            }
        },
        PageConfig::all(),
    )
    .await;

    assert_eq!(items.len(), 340);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn aggregator_stops_on_empty_page() {
    let items: Vec<usize> =
        fetch_all_items(|_limit, _offset| async move { Ok(Vec::new()) }, PageConfig::all()).await;

    assert_eq!(items, Vec::<usize>::new());
}

#[tokio::test]
async fn aggregator_zero_cap_never_calls_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let items = fetch_all_items(
        move |limit, offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(page(100, limit, offset))
            }
        },
        PageConfig::up_to(0),
    )
    .await;

    assert_eq!(items, Vec::<usize>::new());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn aggregator_absorbs_failure_and_keeps_partial_result() {
    // First page succeeds, every later page fails.
    let items = fetch_all_items(
        |limit, offset| async move {
            if offset == 0 {
                Ok(page(1000, limit, offset))
            } else {
                anyhow::bail!("connection reset")
            }
        },
        PageConfig::up_to(300),
    )
    .await;

    assert_eq!(items, (0..100).collect::<Vec<_>>());
}

#[tokio::test]
async fn aggregator_offset_unsupported_fetches_first_page_only() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let items = fetch_all_items(
        move |limit, offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                // A source that ignores offsets would error past page one;
                // the capability flag stops the walk before that happens.
                assert_eq!(offset, 0);
                Ok(page(1000, limit, offset))
            }
        },
        PageConfig::up_to(350).without_offset(),
    )
    .await;

    assert_eq!(items, (0..100).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn aggregator_single_request_source_terminates_without_duplicates() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    // Models the backing track routes: the whole limit goes out in one
    // request and any offset is ignored, so the source always serves from
    // the start of its data. Walking it as an offset-honoring source would
    // refetch the same items forever.
    let items = fetch_all_items(
        move |limit, _offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(page(150, limit, 0))
            }
        },
        PageConfig::single_request(100),
    )
    .await;

    assert_eq!(items, (0..100).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn aggregator_single_request_with_zero_cap_never_calls_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let items = fetch_all_items(
        move |limit, _offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(page(150, limit, 0))
            }
        },
        PageConfig::single_request(0),
    )
    .await;

    assert_eq!(items, Vec::<usize>::new());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn aggregator_honors_custom_page_size() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let items = fetch_all_items(
        move |limit, offset| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                assert!(limit <= 25);
                Ok(page(60, limit, offset))
            }
        },
        PageConfig::all().page_size(25),
    )
    .await;

    assert_eq!(items.len(), 60);
    // 25 + 25 + 10 (short page terminates).
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn bound_limit_clamps_into_range() {
    assert_eq!(bound_limit(0, MAX_REQUEST_LIMIT), 1);
    assert_eq!(bound_limit(-5, MAX_REQUEST_LIMIT), 1);
    assert_eq!(bound_limit(1000, MAX_REQUEST_LIMIT), 50);
    assert_eq!(bound_limit(25, MAX_REQUEST_LIMIT), 25);
    assert_eq!(bound_limit(50, MAX_REQUEST_LIMIT), 50);
    assert_eq!(bound_limit(10, 5), 5);
}
