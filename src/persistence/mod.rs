// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multiplicative persistence with a memoized digit product.
//!
//! The digit product of a large number is computed four digits at a time,
//! from the least significant end:
//!
//! ```text
//! 277777788888899  ->  277 | 7777 | 8888 | 8899
//!                      short  chunk  chunk  chunk
//! ```
//!
//! Each 4-digit chunk is looked up in a memo table (at most 10000 distinct
//! chunks exist), and the leading 1-4 digits in a second, smaller table.
//! As soon as the running product reaches 0 the remaining chunks are skipped.
//!
//! # Example
//!
//! ```
//! use persistence_search::persistence::PersistenceEngine;
//!
//! let mut engine = PersistenceEngine::new();
//! assert_eq!(engine.digit_product(999), 729);
//! // 277777788888899 is the smallest number of persistence 11.
//! assert_eq!(engine.persistence(277_777_788_888_899, 0), 11);
//! ```

pub mod cache;
pub mod statistics;

pub use cache::BoundedCache;
pub use statistics::{Counters, Statistics};

use crate::digits::{CHUNK_CACHE_CAPACITY, SHORT_CACHE_CAPACITY};

/// Numbers are split into chunks of this many digits.
pub const CHUNK_DIGITS: u32 = 4;

const CHUNK: u128 = 10u128.pow(CHUNK_DIGITS);

/// Computes digit products and persistence, memoizing per-chunk products.
#[derive(Debug, Clone)]
pub struct PersistenceEngine {
    /// Products of 4-digit chunks, zero digits included (0042 -> 0).
    chunks: BoundedCache<u16, u32>,
    /// Products of the leading digits, which have no leading zeros.
    short: BoundedCache<u16, u32>,
    statistics: Statistics,
}

impl PersistenceEngine {
    /// Engine with the default memo capacities.
    pub fn new() -> Self {
        Self::with_capacities(CHUNK_CACHE_CAPACITY, SHORT_CACHE_CAPACITY)
    }

    /// Engine with explicit memo capacities. A capacity of 0 disables that
    /// table; results are unaffected.
    pub fn with_capacities(chunk_capacity: usize, short_capacity: usize) -> Self {
        Self {
            chunks: BoundedCache::new(chunk_capacity),
            short: BoundedCache::new(short_capacity),
            statistics: Statistics::new(),
        }
    }

    /// Memo table hit and miss counters.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Product of the decimal digits of `n` (0 if any digit is 0).
    pub fn digit_product(&mut self, n: u128) -> u128 {
        let mut rest = n;
        let mut product: u128 = 1;
        while rest >= CHUNK {
            let high = rest / CHUNK;
            let chunk = (rest - high * CHUNK) as u16;
            product *= u128::from(self.chunk_product(chunk));
            if product == 0 {
                return 0;
            }
            rest = high;
        }
        product * u128::from(self.short_product(rest as u16))
    }

    /// Number of digit-product reductions needed to reach a single digit,
    /// added to `steps`.
    ///
    /// The counter is incremented before each reduction, including the one
    /// that produces the final digit, so `persistence(0, 1)` is 2. The search
    /// passes the product of a combination's digits with `steps = 1`,
    /// counting that first multiplication as a step.
    pub fn persistence(&mut self, n: u128, steps: u32) -> u32 {
        let mut steps = steps;
        let mut current = n;
        loop {
            steps += 1;
            let product = self.digit_product(current);
            if product < 10 {
                return steps;
            }
            current = product;
        }
    }

    fn chunk_product(&mut self, chunk: u16) -> u32 {
        if let Some(&product) = self.chunks.get(&chunk) {
            self.statistics.increment_counter(Counters::ChunkHits);
            return product;
        }
        self.statistics.increment_counter(Counters::ChunkMisses);
        let product = chunk_digit_product(chunk);
        self.chunks.insert(chunk, product);
        product
    }

    fn short_product(&mut self, n: u16) -> u32 {
        if let Some(&product) = self.short.get(&n) {
            self.statistics.increment_counter(Counters::ShortHits);
            return product;
        }
        self.statistics.increment_counter(Counters::ShortMisses);
        let product = short_digit_product(n);
        self.short.insert(n, product);
        product
    }
}

impl Default for PersistenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Product of exactly four digits, counting leading zeros.
fn chunk_digit_product(n: u16) -> u32 {
    let n = u32::from(n);
    (n / 1000 % 10) * (n / 100 % 10) * (n / 10 % 10) * (n % 10)
}

/// Product of the digits of a number below 10000, without leading zeros.
fn short_digit_product(n: u16) -> u32 {
    let n = u32::from(n);
    if n < 10 {
        n
    } else if n < 100 {
        (n / 10) * (n % 10)
    } else if n < 1000 {
        (n / 100) * (n / 10 % 10) * (n % 10)
    } else {
        (n / 1000 % 10) * (n / 100 % 10) * (n / 10 % 10) * (n % 10)
    }
}

/// Product of the decimal digits of `n`, without any memoization.
pub fn digit_product_uncached(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut rest = n;
    let mut product = 1;
    while rest > 0 {
        product *= rest % 10;
        if product == 0 {
            return 0;
        }
        rest /= 10;
    }
    product
}
