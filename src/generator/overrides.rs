// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explicit transition overrides for the combination generator.
//!
//! The general advancement rule resets each lower position to the value of
//! its upper neighbour. Because the alphabet has a gap (no 5), that rule
//! cannot reach the first number of the "3" family from the last number of
//! the "2" family: after 2999... the next interesting number is 3466...,
//! as 33... is the same product as 9... and 32... the same as 6....
//!
//! Each override is keyed by the width of the suffix being advanced (the
//! top positions of the index array) and the exact pre-state of that suffix.
//! Positions are listed lowest first, as stored in the index array.

/// A forced transition for a saturated suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOverride {
    /// Pre-state of the suffix, lowest position first.
    pub from: &'static [u8],
    /// Post-state written in place of the suffix.
    pub to: &'static [u8],
}

impl TransitionOverride {
    /// Width of the suffix this override applies to.
    pub const fn width(&self) -> usize {
        self.from.len()
    }
}

/// All overrides, consulted in order.
///
/// `[6,6,0]` reads as "299" and `[3,2,1]` as "346".
pub const OVERRIDES: &[TransitionOverride] = &[TransitionOverride {
    from: &[6, 6, 0],
    to: &[3, 2, 1],
}];

/// Find the override whose pre-state equals `suffix`, if any.
pub fn transition(suffix: &[u8]) -> Option<&'static [u8]> {
    OVERRIDES
        .iter()
        .find(|o| o.width() == suffix.len() && o.from == suffix)
        .map(|o| o.to)
}
