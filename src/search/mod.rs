// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the maximum persistence among combinations of one length.
//!
//! The loop pulls every combination from a [`CombinationGenerator`], feeds the
//! product of its digits to a [`PersistenceEngine`], and folds the step count
//! into a [`SearchAggregate`]. Each search owns a fresh engine, so nothing
//! carries over between searches.
//!
//! # Example
//!
//! ```
//! use persistence_search::search::search;
//!
//! let report = search(1).unwrap();
//! assert_eq!(report.to_string(), "1;2;7;7");
//! ```

pub mod results;

pub use results::{search_range, SearchResults};

use crate::digits::{CHUNK_CACHE_CAPACITY, SHORT_CACHE_CAPACITY};
use crate::error::SearchError;
use crate::generator::{digits_of, product_of, CombinationGenerator};
use crate::persistence::PersistenceEngine;
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runtime settings of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Capacity of the 4-digit chunk memo table.
    pub chunk_cache_capacity: usize,
    /// Capacity of the leading-digits memo table.
    pub short_cache_capacity: usize,
    /// How many combinations reaching the maximum to keep as strings.
    pub witness_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            chunk_cache_capacity: CHUNK_CACHE_CAPACITY,
            short_cache_capacity: SHORT_CACHE_CAPACITY,
            witness_limit: 0,
        }
    }
}

/// Running maximum, how many combinations reach it, and how many were seen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchAggregate {
    pub max_steps: u32,
    pub count_at_max: u64,
    pub total: u64,
}

impl SearchAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one step count. Returns how it compares to the previous maximum.
    pub fn record(&mut self, steps: u32) -> Ordering {
        let ordering = steps.cmp(&self.max_steps);
        match ordering {
            Ordering::Greater => {
                self.max_steps = steps;
                self.count_at_max = 1;
            }
            Ordering::Equal => self.count_at_max += 1,
            Ordering::Less => {}
        }
        self.total += 1;
        ordering
    }
}

/// Final result of the search for one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub size: usize,
    pub max_steps: u32,
    /// Number of combinations reaching `max_steps`.
    pub n_max: u64,
    /// Number of combinations examined.
    pub total: u64,
    pub elapsed: Duration,
    /// Up to `witness_limit` combinations reaching `max_steps`, in generation order.
    pub witnesses: Vec<String>,
}

impl SearchReport {
    /// Whether two reports agree on everything but timing.
    pub fn same_outcome(&self, other: &SearchReport) -> bool {
        self.size == other.size
            && self.max_steps == other.max_steps
            && self.n_max == other.n_max
            && self.total == other.total
            && self.witnesses == other.witnesses
    }
}

/// `size;max_steps;n_max;total`
impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{}",
            self.size, self.max_steps, self.n_max, self.total
        )
    }
}

/// Search all combinations of `size` digits with the default settings.
pub fn search(size: usize) -> Result<SearchReport, SearchError> {
    search_with(size, &SearchConfig::default())
}

/// Search all combinations of `size` digits.
pub fn search_with(size: usize, config: &SearchConfig) -> Result<SearchReport, SearchError> {
    let mut generator = CombinationGenerator::new(size)?;
    let mut engine =
        PersistenceEngine::with_capacities(config.chunk_cache_capacity, config.short_cache_capacity);
    let mut aggregate = SearchAggregate::new();
    let mut witnesses = Vec::new();

    info!(size, "starting search");
    let start = Instant::now();

    while let Some(indices) = generator.next_indices() {
        let steps = engine.persistence(product_of(indices), 1);
        match aggregate.record(steps) {
            Ordering::Greater => {
                witnesses.clear();
                if config.witness_limit > 0 {
                    witnesses.push(witness(indices));
                }
            }
            Ordering::Equal if witnesses.len() < config.witness_limit => {
                witnesses.push(witness(indices));
            }
            _ => {}
        }
    }

    let elapsed = start.elapsed();
    debug!(size, statistics = %engine.statistics(), "memo tables");
    info!(
        size,
        max_steps = aggregate.max_steps,
        n_max = aggregate.count_at_max,
        total = aggregate.total,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );

    Ok(SearchReport {
        size,
        max_steps: aggregate.max_steps,
        n_max: aggregate.count_at_max,
        total: aggregate.total,
        elapsed,
        witnesses,
    })
}

fn witness(indices: &[u8]) -> String {
    digits_of(indices).map(|d| char::from(b'0' + d)).collect()
}
