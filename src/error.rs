// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for constructing generators and searches.

use thiserror::Error;

/// Errors raised when a search or generator is set up with bad input.
///
/// Once constructed, neither the generator nor the persistence engine can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Requested length is zero or too long for the digit product to fit a `u128`.
    #[error("length {length} is out of range (expected 1..={max})")]
    InvalidLength { length: usize, max: usize },

    /// A seed index array contains a value outside the alphabet.
    #[error("index {index} at position {position} is not below base {base}")]
    InvalidIndex { position: usize, index: u8, base: u8 },
}
