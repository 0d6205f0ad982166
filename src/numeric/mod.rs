// ============================================================================
// Numeric Module
// Decimal value kernel: parsing, formatting and error types
// ============================================================================
//
// This module provides:
// - DecimalValue: sign + integer digits + fractional digits
// - parse_native / parse_dirty / parse_with_convention: string -> DecimalValue
// - format_native / format_with_convention: DecimalValue -> string
// - NumStrError: Error types for every kernel operation
//
// Design principles:
// - Digits stay as ASCII digits end to end, no floating point anywhere
// - All fallible operations return Result (no panics)
// - Values are plain owned data, cloned when duplication is needed

mod decimal_value;
mod errors;
mod formatter;
mod parser;

pub use decimal_value::{DecimalValue, NumberSign, NumericValueType};
pub use errors::{NumStrError, NumStrResult};
pub use formatter::{format_native, format_with_convention};
pub use parser::{parse_dirty, parse_native, parse_with_convention};
