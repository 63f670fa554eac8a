// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Hit and miss counters for the two digit-product memo tables. They are
//! owned by the engine and only describe performance: results never depend
//! on them.

use std::fmt;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    ChunkHits,
    ChunkMisses,
    ShortHits,
    ShortMisses,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total lookups in both memo tables.
    pub fn lookups(&self) -> u64 {
        self.stats.iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let statistics = Statistics::new();
        assert_eq!(statistics.lookups(), 0);
        assert_eq!(statistics.get(Counters::ChunkHits), 0);
    }

    #[test]
    fn test_increment_and_display() {
        let mut statistics = Statistics::new();
        statistics.increment_counter(Counters::ShortMisses);
        statistics.increment_counter(Counters::ShortHits);
        statistics.increment_counter(Counters::ShortHits);

        assert_eq!(statistics.get(Counters::ShortHits), 2);
        assert_eq!(statistics.lookups(), 3);
        assert_eq!(
            statistics.to_string(),
            "ChunkHits=0 ChunkMisses=0 ShortHits=2 ShortMisses=1"
        );
    }
}
