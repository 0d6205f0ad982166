// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod tie_breaker;

pub use tie_breaker::{FixedTieBreaker, RandomTieBreaker, TieBreaker};
