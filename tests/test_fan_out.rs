use std::collections::HashSet;

use pretty_assertions::assert_eq;

use mcp_tidal::paging::fan_out_collect;

#[derive(Debug, Clone, PartialEq)]
struct Rec {
    id: u32,
    seed: String,
}

fn recs(seed: &str, ids: &[u32]) -> Vec<Rec> {
    ids.iter()
        .map(|&id| Rec {
            id,
            seed: seed.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn fan_out_merges_and_dedupes_overlapping_seeds() {
    let merged = fan_out_collect(
        vec!["A".to_string(), "B".to_string()],
        |seed: String| async move {
            match seed.as_str() {
                "A" => Ok(recs("A", &[1, 2, 3])),
                _ => Ok(recs("B", &[2, 3, 4])),
            }
        },
        true,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    // Each id appears exactly once regardless of which seed won the race.
    assert_eq!(merged.len(), 4);
    let ids: HashSet<u32> = merged.iter().map(|r| r.id).collect();
    assert_eq!(ids, HashSet::from([1, 2, 3, 4]));
}

#[tokio::test]
async fn fan_out_without_dedupe_keeps_overlap() {
    let merged = fan_out_collect(
        vec!["A".to_string(), "B".to_string()],
        |seed: String| async move {
            match seed.as_str() {
                "A" => Ok(recs("A", &[1, 2, 3])),
                _ => Ok(recs("B", &[2, 3, 4])),
            }
        },
        false,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    assert_eq!(merged.len(), 6);
}

#[tokio::test]
async fn fan_out_failed_seed_does_not_abort_the_batch() {
    let merged = fan_out_collect(
        vec!["A".to_string(), "B".to_string()],
        |seed: String| async move {
            match seed.as_str() {
                "A" => Ok(recs("A", &[1, 2, 3])),
                _ => anyhow::bail!("track {} not found", seed),
            }
        },
        true,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    assert_eq!(merged, recs("A", &[1, 2, 3]));
}

#[tokio::test]
async fn fan_out_all_seeds_failing_yields_empty_batch() {
    let merged = fan_out_collect(
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        |seed: String| async move { Err::<Vec<Rec>, _>(anyhow::anyhow!("no radio for {}", seed)) },
        true,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    assert!(merged.is_empty());
}

#[tokio::test]
async fn fan_out_rejects_empty_seed_list_before_spawning() {
    let result = fan_out_collect(
        Vec::<String>::new(),
        |_seed: String| async move { Ok(Vec::<Rec>::new()) },
        true,
        |rec: &Rec| rec.id,
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn fan_out_single_seed_preserves_item_order() {
    let merged = fan_out_collect(
        vec!["A".to_string()],
        |_seed: String| async move { Ok(recs("A", &[9, 7, 8, 1])) },
        true,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    let ids: Vec<u32> = merged.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 7, 8, 1]);
}

#[tokio::test]
async fn fan_out_dedupes_within_a_single_seed() {
    let merged = fan_out_collect(
        vec!["A".to_string()],
        |_seed: String| async move { Ok(recs("A", &[5, 5, 6, 5])) },
        true,
        |rec: &Rec| rec.id,
    )
    .await
    .unwrap();

    let ids: Vec<u32> = merged.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 6]);
}
