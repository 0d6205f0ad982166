// ============================================================================
// Rounding Engine
// Applies a rounding mode at a fractional-digit cutoff
// ============================================================================

use crate::domain::{RoundingMode, RoundingRequest};
use crate::interfaces::{RandomTieBreaker, TieBreaker};
use crate::numeric::{DecimalValue, NumStrResult};

/// Discarded fractional digits measured against half a unit at the cutoff.
///
/// Ordered so that `>= Half` reads as "at least half".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Remainder {
    Zero,
    BelowHalf,
    Half,
    AboveHalf,
}

impl Remainder {
    fn classify(discarded: &[u8]) -> Self {
        let Some((&first, rest)) = discarded.split_first() else {
            return Remainder::Zero;
        };
        let rest_nonzero = rest.iter().any(|&b| b != b'0');

        match first {
            b'0' if !rest_nonzero => Remainder::Zero,
            b'5' if !rest_nonzero => Remainder::Half,
            b'5'..=b'9' => Remainder::AboveHalf,
            _ => Remainder::BelowHalf,
        }
    }
}

/// Rounding engine with a pluggable tie breaker for `Randomly`.
///
/// # Example
/// ```
/// use numstr_kernel::prelude::*;
///
/// let engine = RoundingEngine::new();
/// let value = parse_native("9.95").unwrap();
/// let rounded = engine
///     .round(&value, RoundingRequest::new(RoundingMode::HalfAwayFromZero, 1))
///     .unwrap();
/// assert_eq!(format_native(&rounded), "10.0");
/// ```
pub struct RoundingEngine {
    tie_breaker: Box<dyn TieBreaker>,
}

impl RoundingEngine {
    /// Engine that breaks `Randomly` ties with a fair coin
    pub fn new() -> Self {
        Self {
            tie_breaker: Box::new(RandomTieBreaker),
        }
    }

    pub fn with_tie_breaker(tie_breaker: Box<dyn TieBreaker>) -> Self {
        Self { tie_breaker }
    }

    /// Round a copy of `value`.
    ///
    /// # Errors
    /// - `InvalidRoundingTarget` if the target is negative
    /// - `InvalidRoundingMode` if the mode is `None`
    pub fn round(&self, value: &DecimalValue, request: RoundingRequest) -> NumStrResult<DecimalValue> {
        let mut result = value.clone();
        self.round_in_place(&mut result, request)?;
        Ok(result)
    }

    /// Round `value` in place. On error `value` is left untouched.
    ///
    /// Afterwards the value has exactly `target_fractional_digits` fractional
    /// digits: shorter values are right-padded with zeros, longer ones are
    /// cut and the last retained digit adjusted per mode, carrying into the
    /// integer digits when needed.
    pub fn round_in_place(&self, value: &mut DecimalValue, request: RoundingRequest) -> NumStrResult<()> {
        let target = request.validate()?;

        if target >= value.fractional_len() {
            value.fractional_digits.resize(target, b'0');
            return Ok(());
        }

        let remainder = Remainder::classify(&value.fractional_digits[target..]);
        let increment = self.should_increment(value, request.mode, target, remainder);

        tracing::debug!(
            "rounding {} to {} digits with {}: remainder {:?}, increment {}",
            value,
            target,
            request.mode,
            remainder,
            increment
        );

        value.fractional_digits.truncate(target);
        if increment {
            increment_magnitude(value);
        }
        value.normalize_sign();

        Ok(())
    }

    /// Decide whether the retained digits grow by one unit in magnitude.
    fn should_increment(
        &self,
        value: &DecimalValue,
        mode: RoundingMode,
        target: usize,
        remainder: Remainder,
    ) -> bool {
        let negative = value.is_negative();
        let above = remainder == Remainder::AboveHalf;
        let tie = remainder == Remainder::Half;

        match mode {
            RoundingMode::None | RoundingMode::NoRounding | RoundingMode::Truncate => false,
            RoundingMode::HalfAwayFromZero => remainder >= Remainder::Half,
            RoundingMode::HalfTowardsZero => above,
            RoundingMode::HalfUpWithNegNums => above || (tie && !negative),
            RoundingMode::HalfDownWithNegNums => above || (tie && negative),
            RoundingMode::HalfToEven => above || (tie && last_retained_is_odd(value, target)),
            RoundingMode::HalfToOdd => above || (tie && !last_retained_is_odd(value, target)),
            RoundingMode::Randomly => {
                above || (tie && {
                    let away = self.tie_breaker.round_away_from_zero();
                    tracing::trace!("tie broken by {}: away = {}", self.tie_breaker.name(), away);
                    away
                })
            },
            RoundingMode::Floor => remainder != Remainder::Zero && negative,
            RoundingMode::Ceiling => remainder != Remainder::Zero && !negative,
        }
    }
}

impl Default for RoundingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parity of the digit at the cutoff: the last kept fractional digit, or the
/// last integer digit when rounding to a whole number.
fn last_retained_is_odd(value: &DecimalValue, target: usize) -> bool {
    let digit = if target > 0 {
        value.fractional_digits[target - 1]
    } else {
        value.integer_digits.last().copied().unwrap_or(b'0')
    };
    (digit - b'0') % 2 == 1
}

/// Add one unit at the last retained position, carrying leftwards.
fn increment_magnitude(value: &mut DecimalValue) {
    for digit in value
        .fractional_digits
        .iter_mut()
        .rev()
        .chain(value.integer_digits.iter_mut().rev())
    {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }

    // Carry out of the most significant digit
    value.integer_digits.insert(0, b'1');
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Round a copy of `value` with the default engine.
pub fn round(value: &DecimalValue, request: RoundingRequest) -> NumStrResult<DecimalValue> {
    RoundingEngine::new().round(value, request)
}

impl DecimalValue {
    /// Round in place with the default engine. On error the value is unchanged.
    pub fn round(&mut self, mode: RoundingMode, target_fractional_digits: i32) -> NumStrResult<()> {
        RoundingEngine::new().round_in_place(
            self,
            RoundingRequest::new(mode, target_fractional_digits),
        )
    }

    /// Rounded copy with the default engine.
    pub fn rounded(&self, mode: RoundingMode, target_fractional_digits: i32) -> NumStrResult<Self> {
        round(self, RoundingRequest::new(mode, target_fractional_digits))
    }
}
