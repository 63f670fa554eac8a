// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use persistence_search::search::SearchAggregate;
use persistence_search::{Combination, CombinationGenerator, PersistenceEngine};

/// Every combination of `length` digits, as digit strings.
pub fn strings(length: usize) -> Vec<String> {
    CombinationGenerator::new(length)
        .unwrap()
        .map(|c| c.to_string())
        .collect()
}

/// Fold a stream of combinations the same way the search loop does.
///
/// Used to check that independently seeded workers merge back to the
/// single-pass result.
pub fn aggregate<I>(combinations: I, engine: &mut PersistenceEngine) -> SearchAggregate
where
    I: IntoIterator<Item = Combination>,
{
    let mut aggregate = SearchAggregate::new();
    for combination in combinations {
        aggregate.record(engine.persistence(combination.product(), 1));
    }
    aggregate
}

/// Merge two partial aggregates: global maximum, counts summed.
pub fn merge(a: SearchAggregate, b: SearchAggregate) -> SearchAggregate {
    use std::cmp::Ordering;
    let (max_steps, count_at_max) = match a.max_steps.cmp(&b.max_steps) {
        Ordering::Greater => (a.max_steps, a.count_at_max),
        Ordering::Less => (b.max_steps, b.count_at_max),
        Ordering::Equal => (a.max_steps, a.count_at_max + b.count_at_max),
    };
    SearchAggregate {
        max_steps,
        count_at_max,
        total: a.total + b.total,
    }
}
