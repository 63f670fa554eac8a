// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the digit alphabet.
//!
//! Only the digits {2,3,4,6,7,8,9} can appear in an interesting number:
//! - A 0 collapses the product to 0 at the first step.
//! - A 1 does not change the product, so it only makes the number longer.
//! - A 5 only matters together with odd digits, and is excluded.
//!
//! Numbers are handled as arrays of indices into [`ALPHABET`], i.e. as
//! numerals in base [`BASE`].

/// The permitted digits, sorted ascending.
pub const ALPHABET: [u8; 7] = [2, 3, 4, 6, 7, 8, 9];

/// Arithmetic base of the index arrays (the size of the alphabet).
pub const BASE: u8 = ALPHABET.len() as u8;

/// Highest index value a position can take.
pub const MAX_INDEX: u8 = BASE - 1;

/// Longest supported length.
///
/// The digit product of a length-N combination is at most 9^N, and
/// 9^40 is the largest power of 9 that fits in a `u128`.
pub const MAX_LENGTH: usize = 40;

/// Capacity of the memo table for 4-digit chunks.
///
/// Chunks are always below 10000, so at this size the table never evicts.
pub const CHUNK_CACHE_CAPACITY: usize = 10_000;

/// Capacity of the memo table for the leading 1-4 digits.
pub const SHORT_CACHE_CAPACITY: usize = 1_000;

/// Translate an alphabet index to its digit.
#[inline]
pub fn digit(index: u8) -> u8 {
    ALPHABET[index as usize]
}
