// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests for the search loop.

mod common;

use common::{aggregate, merge};
use persistence_search::search::{search, search_range, search_with, SearchAggregate};
use persistence_search::{CombinationGenerator, PersistenceEngine, SearchConfig};

/// Known `size;max_steps;n_max;total` lines.
const KNOWN: [&str; 8] = [
    "1;2;7;7",
    "2;4;1;25",
    "3;5;2;59",
    "4;6;1;120",
    "5;7;1;216",
    "6;7;11;357",
    "8;9;6;819",
    "10;10;3;1606",
];

#[test]
fn test_known_results() {
    for expected in KNOWN {
        let size: usize = expected.split(';').next().unwrap().parse().unwrap();
        assert_eq!(search(size).unwrap().to_string(), expected);
    }
}

#[test]
fn test_search_is_idempotent() {
    let first = search(6).unwrap();
    let second = search(6).unwrap();
    assert!(first.same_outcome(&second));
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_evicting_caches_give_identical_results() {
    let config = SearchConfig {
        chunk_cache_capacity: 4,
        short_cache_capacity: 1,
        ..SearchConfig::default()
    };
    for size in [5, 8, 12] {
        let default = search(size).unwrap();
        let tiny = search_with(size, &config).unwrap();
        assert!(default.same_outcome(&tiny), "size {}", size);
    }
}

#[test]
fn test_witnesses_reach_maximum() {
    let config = SearchConfig {
        witness_limit: 100,
        ..SearchConfig::default()
    };
    let report = search_with(6, &config).unwrap();
    assert_eq!(report.witnesses.len() as u64, report.n_max);

    let mut engine = PersistenceEngine::new();
    for witness in &report.witnesses {
        let product: u128 = witness.bytes().map(|b| u128::from(b - b'0')).product();
        assert_eq!(engine.persistence(product, 1), report.max_steps, "{}", witness);
    }
}

#[test]
fn test_smallest_persistence_eleven_is_found() {
    let config = SearchConfig {
        witness_limit: 1,
        ..SearchConfig::default()
    };
    let report = search_with(15, &config).unwrap();
    assert_eq!(report.to_string(), "15;11;5;5796");
    assert_eq!(report.witnesses, ["277777788888899"]);
}

#[test]
fn test_split_workers_merge_to_single_pass() {
    let size = 6;
    let single = search(size).unwrap();

    // Worker A covers 2xxxxx, worker B starts at 346666.
    let split = vec![3, 3, 3, 3, 2, 1];
    let mut engine_a = PersistenceEngine::new();
    let mut engine_b = PersistenceEngine::new();
    let a = aggregate(
        CombinationGenerator::new(size)
            .unwrap()
            .take_while(|c| c.indices() != split.as_slice()),
        &mut engine_a,
    );
    let b = aggregate(
        CombinationGenerator::starting_at(split.clone()).unwrap(),
        &mut engine_b,
    );

    let merged = merge(a, b);
    assert_eq!(
        merged,
        SearchAggregate {
            max_steps: single.max_steps,
            count_at_max: single.n_max,
            total: single.total,
        }
    );
}

#[test]
fn test_range_matches_individual_searches() {
    let results = search_range(1..=4, &SearchConfig::default()).unwrap();
    assert_eq!(results.len(), 4);
    for (report, expected) in results.iter().zip(KNOWN) {
        assert_eq!(report.to_string(), expected);
    }
}
