// ============================================================================
// Rounding Mode
// Closed set of rounding strategies applied at a fractional-digit cutoff
// ============================================================================

use crate::numeric::{NumStrError, NumStrResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding strategy selector.
///
/// The "round to" digit is the last retained digit; the "round from" digits
/// are everything discarded after it. Most modes only differ in how they
/// resolve a tie, i.e. a discarded remainder of exactly one half unit.
///
/// ```text
///            HalfUpWithNegNums  HalfDownWithNegNums  HalfAwayFromZero  HalfTowardsZero
///   7.5              8                  7                   8                 7
///  -7.5             -7                 -8                  -8                -7
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Uninitialized selector. Always rejected by the rounding engine.
    None,

    /// Drop the discarded digits without adjusting the retained ones
    NoRounding,

    /// Ties resolve toward positive infinity
    /// - 7.5 -> 8, -7.5 -> -7
    HalfUpWithNegNums,

    /// Ties resolve toward negative infinity
    /// - 7.5 -> 7, -7.5 -> -8
    HalfDownWithNegNums,

    /// Ties resolve away from zero regardless of sign
    /// - 7.5 -> 8, -7.5 -> -8
    #[default]
    HalfAwayFromZero,

    /// Ties resolve toward zero regardless of sign
    /// - 7.5 -> 7, -7.5 -> -7
    HalfTowardsZero,

    /// Banker's rounding: ties resolve to an even retained digit
    /// - 7.5 -> 8, 6.5 -> 6
    HalfToEven,

    /// Ties resolve to an odd retained digit
    /// - 7.5 -> 7, 6.5 -> 7
    HalfToOdd,

    /// Ties resolve by a coin flip (see [`crate::interfaces::TieBreaker`])
    Randomly,

    /// Always toward negative infinity
    /// - 2.9 -> 2, -2.5 -> -3
    Floor,

    /// Always toward positive infinity
    /// - 2.4 -> 3, -2.7 -> -2
    Ceiling,

    /// Drop the discarded digits; the retained digit never changes
    Truncate,
}

impl RoundingMode {
    /// Every mode in code order.
    pub const ALL: [RoundingMode; 12] = [
        RoundingMode::None,
        RoundingMode::NoRounding,
        RoundingMode::HalfUpWithNegNums,
        RoundingMode::HalfDownWithNegNums,
        RoundingMode::HalfAwayFromZero,
        RoundingMode::HalfTowardsZero,
        RoundingMode::HalfToEven,
        RoundingMode::HalfToOdd,
        RoundingMode::Randomly,
        RoundingMode::Floor,
        RoundingMode::Ceiling,
        RoundingMode::Truncate,
    ];

    /// Stable integer code (0 for `None` through 11 for `Truncate`).
    pub const fn code(self) -> i32 {
        match self {
            RoundingMode::None => 0,
            RoundingMode::NoRounding => 1,
            RoundingMode::HalfUpWithNegNums => 2,
            RoundingMode::HalfDownWithNegNums => 3,
            RoundingMode::HalfAwayFromZero => 4,
            RoundingMode::HalfTowardsZero => 5,
            RoundingMode::HalfToEven => 6,
            RoundingMode::HalfToOdd => 7,
            RoundingMode::Randomly => 8,
            RoundingMode::Floor => 9,
            RoundingMode::Ceiling => 10,
            RoundingMode::Truncate => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::None => "None",
            RoundingMode::NoRounding => "NoRounding",
            RoundingMode::HalfUpWithNegNums => "HalfUpWithNegNums",
            RoundingMode::HalfDownWithNegNums => "HalfDownWithNegNums",
            RoundingMode::HalfAwayFromZero => "HalfAwayFromZero",
            RoundingMode::HalfTowardsZero => "HalfTowardsZero",
            RoundingMode::HalfToEven => "HalfToEven",
            RoundingMode::HalfToOdd => "HalfToOdd",
            RoundingMode::Randomly => "Randomly",
            RoundingMode::Floor => "Floor",
            RoundingMode::Ceiling => "Ceiling",
            RoundingMode::Truncate => "Truncate",
        }
    }

    /// False only for the uninitialized `None` selector.
    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, RoundingMode::None)
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = NumStrError;

    fn try_from(code: i32) -> NumStrResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(NumStrError::InvalidRoundingMode)
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = NumStrError;

    /// Case-insensitive match on the mode name, e.g. `"halftoeven"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or(NumStrError::InvalidRoundingMode)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
