use quadra_core::{Polynomial, Var};
use quadra_graph::{build_graph, VarPair};
use quadra_reduce::RankingIndex;

fn pair(a: u64, b: u64) -> VarPair {
    VarPair::new(Var::from_raw(a), Var::from_raw(b))
}

#[test]
fn empty_index_signals_exhaustion() {
    let index = RankingIndex::new();
    let err = index.select(1.0).unwrap_err();
    assert_eq!(err.info().code, "empty-index");
    assert!(!err.is_input());
}

#[test]
fn pairs_below_two_are_never_tracked() {
    let mut index = RankingIndex::new();
    index.upsert(pair(0, 1), 1);
    index.upsert(pair(0, 2), 0);
    assert!(index.is_empty());
    assert_eq!(index.bucket_count(), 0);
}

#[test]
fn first_inserted_pair_wins_within_a_bucket() {
    let mut index = RankingIndex::new();
    index.upsert(pair(3, 4), 2);
    index.upsert(pair(0, 1), 2);
    assert_eq!(index.select(0.0).unwrap(), pair(3, 4));

    index.upsert(pair(3, 4), 3);
    assert_eq!(index.select(0.0).unwrap(), pair(0, 1));
    assert_eq!(index.select(1.0).unwrap(), pair(3, 4));

    index.upsert(pair(3, 4), 2);
    assert_eq!(index.bucket_count(), 1);
    assert_eq!(index.select(1.0).unwrap(), pair(0, 1));
    let buckets: Vec<_> = index.buckets().collect();
    assert_eq!(buckets, vec![(2, vec![pair(0, 1), pair(3, 4)])]);
}

#[test]
fn empty_buckets_are_removed_eagerly() {
    let mut index = RankingIndex::new();
    index.upsert(pair(0, 1), 5);
    index.upsert(pair(1, 2), 2);
    assert_eq!(index.bucket_count(), 2);
    index.upsert(pair(0, 1), 1);
    assert_eq!(index.bucket_count(), 1);
    assert_eq!(index.multiplicity(pair(0, 1)), None);
    assert_eq!(index.multiplicity(pair(1, 2)), Some(2));
    index.upsert(pair(1, 2), 0);
    assert!(index.select(0.5).is_err());
}

#[test]
fn quantile_interpolates_by_bucket_rank() {
    let mut index = RankingIndex::new();
    index.upsert(pair(0, 1), 2);
    index.upsert(pair(0, 2), 3);
    index.upsert(pair(0, 3), 10);
    index.upsert(pair(0, 4), 50);
    assert_eq!(index.select(0.0).unwrap(), pair(0, 1));
    assert_eq!(index.select(0.33).unwrap(), pair(0, 1));
    assert_eq!(index.select(0.34).unwrap(), pair(0, 2));
    assert_eq!(index.select(0.7).unwrap(), pair(0, 3));
    assert_eq!(index.select(1.0).unwrap(), pair(0, 4));
}

#[test]
fn built_from_graph_multiplicities() {
    let poly = Polynomial::from_terms(vec![
        (vec![0, 1, 2], 1.0),
        (vec![0, 1, 3], 1.0),
        (vec![0, 1, 4], 1.0),
        (vec![2, 3, 5], 1.0),
        (vec![2, 3, 6], 1.0),
    ])
    .unwrap();
    let (_, graph) = build_graph(&poly);
    let index = RankingIndex::from_graph(&graph);
    assert_eq!(index.len(), 2);
    assert_eq!(index.multiplicity(pair(0, 1)), Some(3));
    assert_eq!(index.multiplicity(pair(2, 3)), Some(2));
    assert_eq!(index.select(0.0).unwrap(), pair(2, 3));
    assert_eq!(index.select(1.0).unwrap(), pair(0, 1));
}
