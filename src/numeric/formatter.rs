// ============================================================================
// Number String Formatting
// Native and locale-convention rendering of decimal values
// ============================================================================

use super::decimal_value::DecimalValue;
use crate::domain::config::{
    CurrencyPosition, CurrencySignPosition, CurrencySymbol, NegativeSignStyle, NumberConvention,
};

/// Render as a native number string: `[-]int[.frac]`.
///
/// The fractional part is omitted when there are no fractional digits and the
/// sign is omitted for non-negative values. `parse_native` reads the result
/// back to an equal value.
#[inline]
pub fn format_native(value: &DecimalValue) -> String {
    value.to_string()
}

/// Render under a locale convention: grouped integer digits, the
/// convention's decimal separator, its negative sign style and its currency
/// symbol.
///
/// ```
/// use numstr_kernel::domain::{CurrencySymbol, NumberConvention};
/// use numstr_kernel::numeric::{format_with_convention, parse_native};
///
/// let v = parse_native("-1234567.5").unwrap();
/// assert_eq!(format_with_convention(&v, &NumberConvention::us()), "-1,234,567.5");
/// assert_eq!(format_with_convention(&v, &NumberConvention::german()), "1.234.567,5-");
///
/// let euro = NumberConvention::german().with_currency(CurrencySymbol::trailing(" €").outside_sign());
/// assert_eq!(format_with_convention(&v, &euro), "1.234.567,5- €");
/// ```
pub fn format_with_convention(value: &DecimalValue, convention: &NumberConvention) -> String {
    let digits = value.integer_digits();
    let mut body = String::with_capacity(digits.len() * 2 + value.fractional_len() + 8);

    for (idx, &b) in digits.iter().enumerate() {
        if let Some(sep) = convention.grouping_separator {
            if idx > 0 && convention.integer_grouping.is_boundary(digits.len() - idx) {
                body.push(sep);
            }
        }
        body.push(b as char);
    }

    if value.fractional_len() > 0 {
        body.push_str(&convention.decimal_separator);
        body.extend(value.fractional_digits().iter().map(|&b| b as char));
    }

    let Some(currency) = &convention.currency else {
        return apply_sign(body, value.is_negative(), convention.negative_style);
    };

    match currency.sign_position {
        CurrencySignPosition::InsideSign => apply_sign(
            with_symbol(body, currency),
            value.is_negative(),
            convention.negative_style,
        ),
        CurrencySignPosition::OutsideSign => with_symbol(
            apply_sign(body, value.is_negative(), convention.negative_style),
            currency,
        ),
    }
}

fn apply_sign(body: String, is_negative: bool, style: NegativeSignStyle) -> String {
    if !is_negative {
        return body;
    }

    match style {
        NegativeSignStyle::LeadingMinus => format!("-{}", body),
        NegativeSignStyle::TrailingMinus => format!("{}-", body),
        NegativeSignStyle::Parentheses => format!("({})", body),
    }
}

fn with_symbol(body: String, currency: &CurrencySymbol) -> String {
    match currency.position {
        CurrencyPosition::Leading => format!("{}{}", currency.symbol, body),
        CurrencyPosition::Trailing => format!("{}{}", body, currency.symbol),
    }
}
