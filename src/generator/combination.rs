// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Translation of index arrays into digits, integers and products.
//!
//! Index arrays are stored lowest position first. For example, 266699 is
//! represented as:
//!
//! ```text
//! indices = [6, 6, 3, 3, 3, 0]
//! digits  =  9  9  6  6  6  2   (read right to left: 266699)
//! ```

use crate::digits::digit;
use std::fmt;

/// Digits of an index array, most significant first.
pub fn digits_of(indices: &[u8]) -> impl Iterator<Item = u8> + '_ {
    indices.iter().rev().map(|&i| digit(i))
}

/// The integer an index array represents, or `None` past 38 digits.
pub fn value_of(indices: &[u8]) -> Option<u128> {
    digits_of(indices).try_fold(0u128, |acc, d| acc.checked_mul(10)?.checked_add(u128::from(d)))
}

/// Plain product of the translated digits.
pub fn product_of(indices: &[u8]) -> u128 {
    indices.iter().map(|&i| u128::from(digit(i))).product()
}

/// An owned snapshot of one generated combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    indices: Vec<u8>,
}

impl Combination {
    pub(crate) fn from_indices(indices: &[u8]) -> Self {
        Self {
            indices: indices.to_vec(),
        }
    }

    /// Index array, lowest position first.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Digits, most significant first.
    pub fn digits(&self) -> Vec<u8> {
        digits_of(&self.indices).collect()
    }

    /// The integer this combination spells, if it fits a `u128`.
    pub fn value(&self) -> Option<u128> {
        value_of(&self.indices)
    }

    pub fn product(&self) -> u128 {
        product_of(&self.indices)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in digits_of(&self.indices) {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
