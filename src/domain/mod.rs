// ============================================================================
// Domain Models Module
// Contains rounding selectors, locale conventions and currency symbols
// ============================================================================

pub mod config;
pub mod rounding_mode;
pub mod rounding_request;

pub use config::{
    CurrencyPosition, CurrencySignPosition, CurrencySymbol, IntegerGrouping, NegativeSignStyle,
    NumberConvention, DEFAULT_GROUPING_CHARS,
};
pub use rounding_mode::RoundingMode;
pub use rounding_request::RoundingRequest;
