// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the maximum multiplicative persistence among integers of a
//! given length.
//!
//! The multiplicative persistence of a number is how many times its digits
//! must be multiplied together before a single digit remains:
//! 39 → 27 → 14 → 4 has persistence 3.
//!
//! See <https://www.youtube.com/watch?v=Wim9WJeDTHQ> for the background.
//!
//! # Architecture
//!
//! Two components, the first feeding the second:
//!
//! - [`generator`]: enumerates, in increasing order, every interesting
//!   combination of a given length over the digits {2,3,4,6,7,8,9}. Digit
//!   order never matters for the product, so each multiset of digits is
//!   produced once, as its smallest arrangement.
//! - [`persistence`]: computes digit products four digits at a time through
//!   two bounded LRU memo tables, and counts the reductions.
//!
//! [`search`] ties them together: for one length it reports the maximum
//! persistence, how many combinations reach it, and how many were examined.
//!
//! # Example
//!
//! ```
//! use persistence_search::search;
//!
//! let report = search::search(4).unwrap();
//! assert_eq!(report.to_string(), "4;6;1;120");
//! ```

pub mod digits;
pub mod error;
pub mod generator;
pub mod persistence;
pub mod search;

// Re-export commonly used types
pub use error::SearchError;
pub use generator::{Combination, CombinationGenerator};
pub use persistence::PersistenceEngine;
pub use search::{SearchConfig, SearchReport};
