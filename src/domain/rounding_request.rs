// ============================================================================
// Rounding Request
// Mode and fractional-digit cutoff for a single rounding call
// ============================================================================

use super::rounding_mode::RoundingMode;
use crate::numeric::{NumStrError, NumStrResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single rounding instruction.
///
/// `target_fractional_digits` is signed so that callers handing over an
/// externally supplied count get `InvalidRoundingTarget` back instead of a
/// silent wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundingRequest {
    pub mode: RoundingMode,
    pub target_fractional_digits: i32,
}

impl RoundingRequest {
    pub fn new(mode: RoundingMode, target_fractional_digits: i32) -> Self {
        Self {
            mode,
            target_fractional_digits,
        }
    }

    /// Check mode and target, returning the target as a digit count.
    ///
    /// # Errors
    /// - `InvalidRoundingTarget` if the target is negative
    /// - `InvalidRoundingMode` if the mode is `None`
    pub fn validate(&self) -> NumStrResult<usize> {
        let target = usize::try_from(self.target_fractional_digits)
            .map_err(|_| NumStrError::InvalidRoundingTarget)?;

        if !self.mode.is_valid() {
            return Err(NumStrError::InvalidRoundingMode);
        }

        Ok(target)
    }
}

impl Default for RoundingRequest {
    fn default() -> Self {
        Self::new(RoundingMode::default(), 2)
    }
}
