// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered, duplicate-free generator of interesting digit combinations.
//!
//! The interesting combinations of length N are:
//!
//! ```text
//! 2[6-9]{N-1}
//! 3[4,6-9][6-9]{N-2}
//! [4,6-9][6-9]{N-1}
//! ```
//!
//! Each combination is an array of indices into the alphabet, i.e. a numeral
//! in base 7, stored lowest position first. Digits never decrease from the
//! most significant end, so every multiset of digits appears exactly once.
//! From length 3 on, prefixes such as 22 (same product as 4), 23 (6),
//! 24 (8) or 33 (9) are skipped, since a shorter number already covers them.
//!
//! # Example
//!
//! ```
//! use persistence_search::generator::CombinationGenerator;
//!
//! let numbers: Vec<String> = CombinationGenerator::new(4)
//!     .unwrap()
//!     .take(5)
//!     .map(|c| c.to_string())
//!     .collect();
//! assert_eq!(numbers, ["2666", "2667", "2668", "2669", "2677"]);
//! ```

pub mod combination;
pub mod overrides;

pub use combination::{digits_of, product_of, value_of, Combination};

use crate::digits::{BASE, MAX_INDEX, MAX_LENGTH};
use crate::error::SearchError;
use std::iter::FusedIterator;

/// Index held by every position but the highest in the initial state (digit 6).
const SEED_INDEX: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// The current indices have not been handed out yet.
    Fresh,
    /// The current indices have been handed out.
    Running,
    Exhausted,
}

/// Lazy, single-pass enumeration of the combinations of one length.
#[derive(Debug, Clone)]
pub struct CombinationGenerator {
    indices: Vec<u8>,
    cursor: Cursor,
}

impl CombinationGenerator {
    /// Create a generator starting at the smallest combination of `length`
    /// digits (2666... for length > 1, 2 for length 1).
    pub fn new(length: usize) -> Result<Self, SearchError> {
        check_length(length)?;
        let mut indices = vec![SEED_INDEX; length];
        indices[length - 1] = 0;
        Ok(Self {
            indices,
            cursor: Cursor::Fresh,
        })
    }

    /// Create a generator whose first combination is `indices`.
    ///
    /// The indices are taken as given: seeding with a state the normal
    /// enumeration never visits yields that state first, then continues with
    /// the regular advancement rule.
    pub fn starting_at(indices: Vec<u8>) -> Result<Self, SearchError> {
        check_length(indices.len())?;
        if let Some((position, &index)) = indices.iter().enumerate().find(|&(_, &i)| i >= BASE) {
            return Err(SearchError::InvalidIndex {
                position,
                index,
                base: BASE,
            });
        }
        Ok(Self {
            indices,
            cursor: Cursor::Fresh,
        })
    }

    /// Number of digits of every generated combination.
    pub fn length(&self) -> usize {
        self.indices.len()
    }

    /// Move to the next combination and borrow its indices.
    ///
    /// Returns `None` once the enumeration is exhausted, and keeps doing so.
    pub fn next_indices(&mut self) -> Option<&[u8]> {
        match self.cursor {
            Cursor::Fresh => self.cursor = Cursor::Running,
            Cursor::Running => {
                if !self.advance() {
                    self.cursor = Cursor::Exhausted;
                }
            }
            Cursor::Exhausted => {}
        }
        match self.cursor {
            Cursor::Exhausted => None,
            _ => Some(self.indices.as_slice()),
        }
    }

    /// Advance the indices in place. Returns false when there is no next
    /// combination, leaving the indices untouched.
    ///
    /// Carry propagates upward from position 0 until a position can be
    /// incremented (or an override rewrites the suffix there); every position
    /// below it is then reset to its upper neighbour's value.
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        let mut k = 0;
        let top = loop {
            if self.indices[k] < MAX_INDEX {
                self.indices[k] += 1;
                break k;
            }
            if k + 1 == n {
                return false;
            }
            if let Some(post) = overrides::transition(&self.indices[k..]) {
                self.indices[k..].copy_from_slice(post);
                break k;
            }
            k += 1;
        };
        for j in (0..top).rev() {
            self.indices[j] = self.indices[j + 1];
        }
        true
    }
}

impl Iterator for CombinationGenerator {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        self.next_indices().map(Combination::from_indices)
    }
}

impl FusedIterator for CombinationGenerator {}

fn check_length(length: usize) -> Result<(), SearchError> {
    if length == 0 || length > MAX_LENGTH {
        return Err(SearchError::InvalidLength {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}
