// ============================================================================
// Number String Kernel Library
// Decimal number strings: tolerant parsing, mode-driven rounding, formatting
// ============================================================================

//! # Number String Kernel
//!
//! Parse, round and format signed decimal numbers held as digit strings.
//!
//! ## Features
//!
//! - **Native parsing** of strict `[-]digits[.digits]` strings
//! - **Dirty parsing** of locale-formatted or noisy text (grouping
//!   separators, currency marks, trailing minus, parentheses)
//! - **Eleven rounding modes** including sign-aware half rounding, banker's
//!   rounding, floor/ceiling and random tie breaking
//! - **Exact digits**: no floating point, carries grow the integer part
//! - **Locale conventions** (US, German, French, Indian, custom) for both
//!   directions, with thousands, Indian or Chinese digit grouping and an
//!   optional currency symbol
//! - **Conversions** to and from `i64`, `u64`, `f64` and `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use numstr_kernel::prelude::*;
//!
//! // Parse a German-formatted amount
//! let mut value = parse_dirty("1.123.456,785 €", ",").unwrap();
//!
//! // Round to cents, ties to even
//! value.round(RoundingMode::HalfToEven, 2).unwrap();
//!
//! assert_eq!(format_native(&value), "1123456.78");
//! assert_eq!(
//!     format_with_convention(&value, &NumberConvention::us()),
//!     "1,123,456.78"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CurrencyPosition, CurrencySignPosition, CurrencySymbol, IntegerGrouping, NegativeSignStyle,
        NumberConvention, RoundingMode, RoundingRequest,
    };
    pub use crate::engine::{
        create_from_convention, round, NumStrProcessor, NumStrProcessorBuilder, RoundingEngine,
    };
    pub use crate::interfaces::{FixedTieBreaker, RandomTieBreaker, TieBreaker};
    pub use crate::numeric::{
        format_native, format_with_convention, parse_dirty, parse_native, parse_with_convention,
        DecimalValue, NumStrError, NumStrResult, NumberSign, NumericValueType,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn round_native(input: &str, mode: RoundingMode, target: i32) -> String {
        let value = parse_native(input).unwrap();
        let rounded = round(&value, RoundingRequest::new(mode, target)).unwrap();
        format_native(&rounded)
    }

    #[test]
    fn test_end_to_end_flow() {
        let value = parse_dirty("  USD (12,345.6789) ", ".").unwrap();
        assert!(value.is_negative());

        let rounded = round(
            &value,
            RoundingRequest::new(RoundingMode::HalfAwayFromZero, 2),
        )
        .unwrap();
        assert_eq!(format_native(&rounded), "-12345.68");

        // Original value is untouched by the pure entry point
        assert_eq!(format_native(&value), "-12345.6789");
    }

    #[test]
    fn test_sign_aware_ties() {
        assert_eq!(round_native("7.5", RoundingMode::HalfUpWithNegNums, 0), "8");
        assert_eq!(round_native("-7.5", RoundingMode::HalfUpWithNegNums, 0), "-7");
        assert_eq!(round_native("7.5", RoundingMode::HalfDownWithNegNums, 0), "7");
        assert_eq!(round_native("-7.5", RoundingMode::HalfDownWithNegNums, 0), "-8");
    }

    #[test]
    fn test_directional_boundaries() {
        assert_eq!(round_native("2.9", RoundingMode::Floor, 0), "2");
        assert_eq!(round_native("-2.9", RoundingMode::Ceiling, 0), "-2");
    }

    #[test]
    fn test_bankers_rounding() {
        assert_eq!(round_native("6.5", RoundingMode::HalfToEven, 0), "6");
        assert_eq!(round_native("-6.5", RoundingMode::HalfToEven, 0), "-6");
    }

    #[test]
    fn test_dirty_european_amount() {
        let value = parse_dirty("1.123.456,78 €", ",").unwrap();
        assert_eq!(value.integer_string(), "1123456");
        assert_eq!(value.fractional_string(), "78");
        assert!(!value.is_negative());
        assert_eq!(value.sign(), NumberSign::Positive);
    }

    #[test]
    fn test_native_normalization_round_trip() {
        let cases = [
            ("0", "0"),
            ("-0", "0"),
            ("007", "7"),
            ("-00.50", "-0.50"),
            ("123.4500", "123.4500"),
            ("-0.000", "0.000"),
        ];
        for (input, normalized) in cases {
            assert_eq!(format_native(&parse_native(input).unwrap()), normalized);
        }
    }

    #[test]
    fn test_carry_grows_integer_part() {
        assert_eq!(round_native("9.95", RoundingMode::HalfAwayFromZero, 1), "10.0");
        assert_eq!(round_native("-9.5", RoundingMode::HalfAwayFromZero, 0), "-10");
    }

    #[test]
    fn test_rounding_error_reporting() {
        let value = parse_native("1.25").unwrap();
        assert_eq!(
            round(&value, RoundingRequest::new(RoundingMode::HalfToEven, -3)),
            Err(NumStrError::InvalidRoundingTarget)
        );
        assert_eq!(
            round(&value, RoundingRequest::new(RoundingMode::None, 1)),
            Err(NumStrError::InvalidRoundingMode)
        );
    }

    #[test]
    fn test_dirty_text_with_ranges_and_dates() {
        assert_eq!(format_native(&parse_dirty("10 - 20", ".").unwrap()), "10");
        assert_eq!(format_native(&parse_dirty("2023-10-19", ".").unwrap()), "2023");
        assert_eq!(format_native(&parse_dirty("A-5 units", ".").unwrap()), "5");
        assert_eq!(format_native(&parse_dirty("1.234,56- €", ",").unwrap()), "-1234.56");
    }

    #[test]
    fn test_localized_currency_output() {
        let convention = NumberConvention::german()
            .with_currency(CurrencySymbol::trailing(" €").outside_sign());
        let processor = NumStrProcessorBuilder::new()
            .with_convention(convention)
            .rounding(RoundingMode::HalfAwayFromZero, 2)
            .build()
            .unwrap();

        assert_eq!(processor.process_localized("1.234,565 €").unwrap(), "1.234,57 €");
        assert_eq!(processor.process_localized("-1234,565").unwrap(), "1.234,57- €");

        let india = NumberConvention::india().with_currency(CurrencySymbol::leading("₹"));
        let value = parse_native("-12345678.9").unwrap();
        assert_eq!(format_with_convention(&value, &india), "-₹1,23,45,678.9");
    }

    #[test]
    fn test_float_bridge() {
        let value = DecimalValue::from_f64(2.675).unwrap();
        assert_eq!(format_native(&value), "2.675");
        let rounded = round(&value, RoundingRequest::new(RoundingMode::HalfAwayFromZero, 2)).unwrap();
        assert_eq!(rounded.to_f64(), Ok(2.68));
        assert_eq!(DecimalValue::from_f64(f64::NAN), Err(NumStrError::NonFiniteFloat));
    }

    #[test]
    fn test_mode_selection_by_name() {
        let mode: RoundingMode = "halfdownwithnegnums".parse().unwrap();
        assert_eq!(round_native("-7.5", mode, 0), "-8");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let value = parse_native("-12.50").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-12.50\"");
        let back: DecimalValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let request = RoundingRequest::new(RoundingMode::HalfToOdd, 3);
        let json = serde_json::to_string(&request).unwrap();
        let back: RoundingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);

        assert!(serde_json::from_str::<DecimalValue>("\"1,5\"").is_err());
    }

    fn native_number() -> impl Strategy<Value = String> {
        "-?[0-9]{1,20}(\\.[0-9]{1,20})?"
    }

    proptest! {
        #[test]
        fn prop_native_round_trip(s in native_number()) {
            let value = parse_native(&s).unwrap();
            let text = format_native(&value);
            prop_assert_eq!(parse_native(&text).unwrap(), value);
            // Formatting never introduces anything outside the native grammar
            prop_assert!(text.bytes().all(|b| b.is_ascii_digit() || b == b'-' || b == b'.'));
        }

        #[test]
        fn prop_convention_round_trip(s in native_number()) {
            let value = parse_native(&s).unwrap();
            for conv in [NumberConvention::us(), NumberConvention::german(), NumberConvention::french()] {
                let text = format_with_convention(&value, &conv);
                prop_assert_eq!(parse_with_convention(&text, &conv).unwrap(), value.clone());
            }
        }
    }

    quickcheck! {
        fn qc_integer_round_trip(n: i64) -> bool {
            let value = DecimalValue::from_i64(n);
            parse_native(&format_native(&value)) == Ok(value.clone()) && value.to_i64() == Ok(n)
        }
    }
}
