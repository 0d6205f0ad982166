// ============================================================================
// Basic Usage Example
// ============================================================================

use numstr_kernel::prelude::*;

fn main() {
    // Run with `--features logging` to see rounding decisions
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number String Kernel Example ===\n");

    // Parse a few dirty inputs in different conventions
    println!("Parsing dirty number strings...");
    let inputs = [
        ("1.123.456,785 €", ","),
        ("$ (2,500.125)", "."),
        ("Total: -0.0049 BTC", "."),
        ("12 345,5-", ","),
    ];

    let mut values = Vec::new();
    for (raw, separator) in inputs {
        match parse_dirty(raw, separator) {
            Ok(value) => {
                println!("  {:<22} -> {}", format!("{:?}", raw), value);
                values.push(value);
            },
            Err(err) => println!("  {:<22} -> error: {}", format!("{:?}", raw), err),
        }
    }

    // Round every value under each mode
    println!("\n=== Rounding to 2 fractional digits ===");
    let modes = [
        RoundingMode::HalfAwayFromZero,
        RoundingMode::HalfUpWithNegNums,
        RoundingMode::HalfDownWithNegNums,
        RoundingMode::HalfToEven,
        RoundingMode::Floor,
        RoundingMode::Ceiling,
        RoundingMode::Truncate,
    ];

    let engine = RoundingEngine::new();
    for value in &values {
        println!("\n{}", value);
        for mode in modes {
            let request = RoundingRequest::new(mode, 2);
            match engine.round(value, request) {
                Ok(rounded) => println!("  {:<20} {}", mode, format_native(&rounded)),
                Err(err) => println!("  {:<20} error: {}", mode, err),
            }
        }
    }

    // String in, rounded string out
    println!("\n=== Processor ===");
    let processor = match NumStrProcessorBuilder::new()
        .german()
        .rounding(RoundingMode::HalfAwayFromZero, 1)
        .build()
    {
        Ok(processor) => processor,
        Err(err) => {
            println!("could not build processor: {}", err);
            return;
        },
    };

    for raw in ["9,95", "1.234.567,849-", "keine Angabe"] {
        match processor.process_localized(raw) {
            Ok(text) => println!("  {:<18} -> {}", raw, text),
            Err(err) => println!("  {:<18} -> error: {}", raw, err),
        }
    }

    // Grouping styles and currency symbols on output
    println!("\n=== Localized output ===");
    let amount = DecimalValue::from_i64(-1_234_567_890);
    let conventions = [
        ("us $", NumberConvention::us().with_currency(CurrencySymbol::leading("$"))),
        (
            "german €",
            NumberConvention::german().with_currency(CurrencySymbol::trailing(" €").outside_sign()),
        ),
        ("india ₹", NumberConvention::india().with_currency(CurrencySymbol::leading("₹"))),
        (
            "chinese",
            NumberConvention::us().with_integer_grouping(IntegerGrouping::ChineseNumbering),
        ),
    ];
    for (name, convention) in &conventions {
        println!("  {:<10} {}", name, format_with_convention(&amount, convention));
    }
}
