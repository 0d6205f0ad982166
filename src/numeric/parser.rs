// ============================================================================
// Number String Parsing
// Native (strict) and dirty (locale-formatted, noisy) number strings
// ============================================================================

use super::decimal_value::{DecimalValue, DigitBuf};
use super::errors::{NumStrError, NumStrResult};
use crate::domain::config::NumberConvention;

/// Parse a native number string: `[-]digits[.digits]`.
///
/// Redundant leading integer zeros are dropped and `-0` reads as `0`;
/// fractional digits are kept exactly as written.
///
/// # Errors
/// - `EmptyInput` for `""`
/// - `MalformedNumberString` for anything outside the grammar, including
///   surrounding whitespace, a `+` sign, `.5` and `5.`
///
/// # Examples
/// - "123" -> 123
/// - "-0012.50" -> -12.50
/// - "-0.000" -> 0.000
pub fn parse_native(s: &str) -> NumStrResult<DecimalValue> {
    if s.is_empty() {
        return Err(NumStrError::EmptyInput);
    }

    let (is_negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_str, frac_str) = match body.split_once('.') {
        Some((int_str, frac_str)) => (int_str, Some(frac_str)),
        None => (body, None),
    };

    let is_digit_run = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    if !is_digit_run(int_str) || !frac_str.map_or(true, is_digit_run) {
        tracing::trace!("rejected native number string: {:?}", s);
        return Err(NumStrError::MalformedNumberString);
    }

    Ok(DecimalValue::from_ascii_parts(
        is_negative,
        int_str.as_bytes(),
        frac_str.unwrap_or_default().as_bytes(),
    ))
}

/// Parse a dirty number string using `decimal_separator` as radix point.
///
/// Grouping separators, currency marks, labels and surrounding whitespace are
/// skipped. A leading `-`, a trailing `-` or enclosing parentheses mark the
/// value negative.
///
/// # Errors
/// - `EmptyInput` if nothing but whitespace is given
/// - `InvalidSeparator` if `decimal_separator` is empty or contains digits
/// - `NoNumericContent` if no digit is found
///
/// # Example
/// ```
/// use numstr_kernel::numeric::parse_dirty;
///
/// let v = parse_dirty("1.123.456,78 €", ",").unwrap();
/// assert_eq!(v.integer_string(), "1123456");
/// assert_eq!(v.fractional_string(), "78");
/// assert!(!v.is_negative());
/// ```
pub fn parse_dirty(s: &str, decimal_separator: &str) -> NumStrResult<DecimalValue> {
    if s.trim().is_empty() {
        return Err(NumStrError::EmptyInput);
    }

    if decimal_separator.is_empty() || decimal_separator.chars().any(|c| c.is_ascii_digit()) {
        return Err(NumStrError::InvalidSeparator);
    }

    extract(s, &NumberConvention::new(decimal_separator))
}

/// Parse a dirty number string under a locale convention.
///
/// # Errors
/// As [`parse_dirty`], plus `InvalidConfiguration` if the convention fails
/// [`NumberConvention::validate`].
///
/// The convention's currency symbol, if any, is removed before extraction so
/// that symbols made of letters do not cancel a sign next to them.
pub fn parse_with_convention(s: &str, convention: &NumberConvention) -> NumStrResult<DecimalValue> {
    if s.trim().is_empty() {
        return Err(NumStrError::EmptyInput);
    }

    if let Err(reason) = convention.validate() {
        tracing::debug!("number convention rejected: {}", reason);
        return Err(NumStrError::InvalidConfiguration);
    }

    match &convention.currency {
        Some(currency) => extract(&s.replace(currency.trimmed(), ""), convention),
        None => extract(s, convention),
    }
}

// ============================================================================
// Dirty Extraction
// ============================================================================

/// Scan state for a dirty number string.
#[derive(Default)]
struct Extraction {
    integer: DigitBuf,
    fractional: DigitBuf,
    leading_minus: bool,
    open_paren: bool,
}

fn starts_with_digit(s: &str) -> bool {
    s.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// A `-` after the number is a sign when nothing alphanumeric follows it
/// (`1.234,56- €`), or when it is attached to the digits and followed by a
/// word rather than more digits (`12,50- EUR`). Ranges and dates
/// (`10 - 20`, `2023-10-19`) do not qualify.
fn is_trailing_minus(trailing: &str) -> bool {
    let Some((before, after)) = trailing.split_once('-') else {
        return false;
    };

    if !after.chars().any(char::is_alphanumeric) {
        return true;
    }

    before.is_empty()
        && after.starts_with(char::is_whitespace)
        && !starts_with_digit(after.trim_start())
}

fn extract(raw: &str, convention: &NumberConvention) -> NumStrResult<DecimalValue> {
    let text = raw.trim();
    let separator = convention.decimal_separator.as_str();
    let mut scan = Extraction::default();

    // Leading noise: find where the numeric body starts
    let mut start = None;
    let mut prev: Option<char> = None;
    for (idx, c) in text.char_indices() {
        let rest = &text[idx..];
        if c.is_ascii_digit()
            || (rest.starts_with(separator) && starts_with_digit(&rest[separator.len()..]))
        {
            start = Some(idx);
            break;
        }

        match c {
            // A hyphen inside a word ("A-5") is not a sign
            '-' => scan.leading_minus = !prev.is_some_and(char::is_alphanumeric),
            '(' => scan.open_paren = true,
            // A sign only counts if no word sits between it and the digits
            c if c.is_alphanumeric() => {
                scan.leading_minus = false;
                scan.open_paren = false;
            },
            _ => {},
        }
        prev = Some(c);
    }

    let Some(start) = start else {
        tracing::debug!("no numeric content in dirty number string: {:?}", raw);
        return Err(NumStrError::NoNumericContent);
    };

    // Numeric body: digits, grouping characters and one decimal separator
    let mut pos = start;
    let mut in_fraction = false;
    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];

        if c.is_ascii_digit() {
            if in_fraction {
                scan.fractional.push(c as u8);
            } else {
                scan.integer.push(c as u8);
            }
            pos += 1;
            continue;
        }

        if in_fraction {
            break;
        }

        if rest.starts_with(separator) && starts_with_digit(&rest[separator.len()..]) {
            in_fraction = true;
            pos += separator.len();
            continue;
        }

        let after = &rest[c.len_utf8()..];
        if !scan.integer.is_empty() && convention.is_grouping_char(c) && starts_with_digit(after) {
            pos += c.len_utf8();
            continue;
        }

        break;
    }

    // Trailing noise: trailing minus or closing parenthesis
    let trailing = &text[pos..];
    let trailing_minus = is_trailing_minus(trailing);
    let closed_paren = scan.open_paren && trailing.contains(')');
    let is_negative = scan.leading_minus || trailing_minus || closed_paren;

    if scan.integer.is_empty() && scan.fractional.is_empty() {
        return Err(NumStrError::NoNumericContent);
    }

    let value = DecimalValue::from_ascii_parts(is_negative, &scan.integer, &scan.fractional);
    tracing::trace!("extracted {} from {:?}", value, raw);
    Ok(value)
}
