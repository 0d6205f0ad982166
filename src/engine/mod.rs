// ============================================================================
// Engine Module
// Contains the rounding engine and the number string processing service
// ============================================================================

mod rounding;

pub mod processor;

pub use processor::{create_from_convention, NumStrProcessor, NumStrProcessorBuilder};
pub use rounding::{round, RoundingEngine};
