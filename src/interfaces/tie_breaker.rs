// ============================================================================
// Tie Breaker Interface
// Decides exact-half ties for the Randomly rounding mode
// ============================================================================

use rand::Rng;

/// Source of tie-break decisions for [`crate::domain::RoundingMode::Randomly`].
///
/// Only consulted when the discarded remainder is exactly one half unit.
/// Returning `true` rounds the retained digits away from zero.
pub trait TieBreaker: Send + Sync {
    /// Decide a single tie
    fn round_away_from_zero(&self) -> bool;

    /// Name for logging
    fn name(&self) -> &str;
}

/// Fair coin drawn from the thread-local RNG (unseeded, each call independent)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTieBreaker;

impl TieBreaker for RandomTieBreaker {
    fn round_away_from_zero(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always gives the same answer; makes Randomly deterministic in tests
#[derive(Debug, Clone, Copy)]
pub struct FixedTieBreaker(pub bool);

impl TieBreaker for FixedTieBreaker {
    fn round_away_from_zero(&self) -> bool {
        self.0
    }

    fn name(&self) -> &str {
        if self.0 {
            "fixed-away"
        } else {
            "fixed-toward"
        }
    }
}
