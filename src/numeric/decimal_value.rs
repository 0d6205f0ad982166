// ============================================================================
// Decimal Value Kernel
// Signed decimal number held as integer and fractional digit sequences
// ============================================================================

use super::errors::{NumStrError, NumStrResult};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage for ASCII digit sequences.
///
/// Most number strings seen by the text-field collaborators fit inline.
pub(crate) type DigitBuf = SmallVec<[u8; 24]>;

/// Sign classification of a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberSign {
    Negative,
    Zero,
    Positive,
}

/// Whether a value carries fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericValueType {
    /// No fractional digits
    Integer,
    /// One or more fractional digits (even if they are all zero)
    FloatingPoint,
}

/// Signed decimal number stored as ASCII digit sequences.
///
/// The integer and fractional parts are kept separately, most-significant
/// digit first, and the sign lives in its own flag. Trailing fractional zeros
/// are significant: `1.50` and `1.5` compare unequal because they carry a
/// different number of fractional digits.
///
/// Invariants:
/// - both digit sequences contain only `b'0'..=b'9'`
/// - the integer sequence is never empty (`0.5` stores `"0"`)
/// - zero is never negative
///
/// # Example
/// ```
/// use numstr_kernel::numeric::DecimalValue;
///
/// let v: DecimalValue = "-12.340".parse().unwrap();
/// assert_eq!(v.integer_string(), "12");
/// assert_eq!(v.fractional_string(), "340");
/// assert!(v.is_negative());
/// assert_eq!(v.to_string(), "-12.340");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DecimalValue {
    pub(crate) integer_digits: DigitBuf,
    pub(crate) fractional_digits: DigitBuf,
    pub(crate) is_negative: bool,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero with no fractional digits.
    pub fn zero() -> Self {
        let mut integer_digits = DigitBuf::new();
        integer_digits.push(b'0');
        Self {
            integer_digits,
            fractional_digits: DigitBuf::new(),
            is_negative: false,
        }
    }

    /// Build a value from a sign flag and two digit strings.
    ///
    /// An empty `integer` is read as `"0"`. Redundant leading integer zeros
    /// are dropped and a zero value is forced non-negative.
    ///
    /// # Errors
    /// Returns `MalformedNumberString` if either string contains a character
    /// other than `'0'..='9'`.
    pub fn from_digits(is_negative: bool, integer: &str, fractional: &str) -> NumStrResult<Self> {
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fractional) {
            return Err(NumStrError::MalformedNumberString);
        }

        Ok(Self::from_ascii_parts(
            is_negative,
            integer.as_bytes(),
            fractional.as_bytes(),
        ))
    }

    /// Shared digit builder for every parse path. Callers guarantee ASCII digits.
    pub(crate) fn from_ascii_parts(is_negative: bool, integer: &[u8], fractional: &[u8]) -> Self {
        let first_significant = integer
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(integer.len());

        let mut integer_digits: DigitBuf = integer[first_significant..].iter().copied().collect();
        if integer_digits.is_empty() {
            integer_digits.push(b'0');
        }

        let mut value = Self {
            integer_digits,
            fractional_digits: fractional.iter().copied().collect(),
            is_negative,
        };
        value.normalize_sign();
        value
    }

    /// Create from a signed integer.
    pub fn from_i64(value: i64) -> Self {
        let digits = value.unsigned_abs().to_string();
        Self::from_ascii_parts(value < 0, digits.as_bytes(), &[])
    }

    /// Create from an unsigned integer.
    pub fn from_u64(value: u64) -> Self {
        let digits = value.to_string();
        Self::from_ascii_parts(false, digits.as_bytes(), &[])
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer digits as ASCII bytes, most-significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    /// Fractional digits as ASCII bytes, most-significant first.
    #[inline]
    pub fn fractional_digits(&self) -> &[u8] {
        &self.fractional_digits
    }

    /// Integer digits as an owned string.
    pub fn integer_string(&self) -> String {
        self.integer_digits.iter().map(|&b| b as char).collect()
    }

    /// Fractional digits as an owned string (empty for whole numbers).
    pub fn fractional_string(&self) -> String {
        self.fractional_digits.iter().map(|&b| b as char).collect()
    }

    #[inline]
    pub fn integer_len(&self) -> usize {
        self.integer_digits.len()
    }

    #[inline]
    pub fn fractional_len(&self) -> usize {
        self.fractional_digits.len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integer_digits
            .iter()
            .chain(self.fractional_digits.iter())
            .all(|&b| b == b'0')
    }

    pub fn sign(&self) -> NumberSign {
        if self.is_zero() {
            NumberSign::Zero
        } else if self.is_negative {
            NumberSign::Negative
        } else {
            NumberSign::Positive
        }
    }

    pub fn numeric_value_type(&self) -> NumericValueType {
        if self.fractional_digits.is_empty() {
            NumericValueType::Integer
        } else {
            NumericValueType::FloatingPoint
        }
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        let mut result = self.clone();
        result.is_negative = false;
        result
    }

    /// Strip redundant leading integer zeros and trailing fractional zeros.
    ///
    /// `000123.4500` becomes `123.45`, `7.000` becomes `7`.
    pub fn rationalize(&mut self) {
        while self.fractional_digits.last() == Some(&b'0') {
            self.fractional_digits.pop();
        }

        let leading_zeros = self
            .integer_digits
            .iter()
            .take_while(|&&b| b == b'0')
            .count();
        let keep_from = leading_zeros.min(self.integer_digits.len().saturating_sub(1));
        if keep_from > 0 {
            self.integer_digits.drain(..keep_from);
        }
        if self.integer_digits.is_empty() {
            self.integer_digits.push(b'0');
        }

        self.normalize_sign();
    }

    /// Zero is conventionally non-negative.
    #[inline]
    pub(crate) fn normalize_sign(&mut self) {
        if self.is_negative && self.is_zero() {
            self.is_negative = false;
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for DecimalValue {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl std::str::FromStr for DecimalValue {
    type Err = NumStrError;

    /// Parse a native number string, see [`crate::numeric::parse_native`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse_native(s)
    }
}

impl TryFrom<String> for DecimalValue {
    type Error = NumStrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        super::parser::parse_native(&value)
    }
}

impl From<DecimalValue> for String {
    fn from(value: DecimalValue) -> Self {
        value.to_string()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        if self.is_negative {
            f.write_char('-')?;
        }
        for &b in &self.integer_digits {
            f.write_char(b as char)?;
        }
        if !self.fractional_digits.is_empty() {
            f.write_char('.')?;
            for &b in &self.fractional_digits {
                f.write_char(b as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({})", self)
    }
}

// ============================================================================
// Conversion to/from rust_decimal, integers and floats
// ============================================================================

impl DecimalValue {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than the 96-bit mantissa or
    /// 28 fractional digits rust_decimal can hold.
    pub fn to_decimal(&self) -> NumStrResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.to_string()).map_err(|_| NumStrError::Overflow)
    }

    /// Convert from rust_decimal::Decimal, keeping its scale as the number of
    /// fractional digits.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumStrResult<Self> {
        super::parser::parse_native(&d.to_string())
    }

    /// Convert from an f64 using its shortest round-trip decimal form.
    ///
    /// `2.0` yields `2` with no fractional digits and `-0.0` yields zero.
    ///
    /// # Errors
    /// Returns `NonFiniteFloat` for NaN and the infinities.
    pub fn from_f64(f: f64) -> NumStrResult<Self> {
        if !f.is_finite() {
            return Err(NumStrError::NonFiniteFloat);
        }
        // f64 Display never uses exponent notation
        super::parser::parse_native(&f.to_string())
    }

    /// Nearest f64 to this value.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude is beyond the f64 range.
    pub fn to_f64(&self) -> NumStrResult<f64> {
        let f: f64 = self.to_string().parse().map_err(|_| NumStrError::Overflow)?;
        if f.is_finite() {
            Ok(f)
        } else {
            Err(NumStrError::Overflow)
        }
    }

    /// Integer part as i64, fractional digits truncated.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part is outside the i64 range.
    pub fn to_i64(&self) -> NumStrResult<i64> {
        let mut result: i64 = 0;
        for &b in &self.integer_digits {
            let digit = i64::from(b - b'0');
            result = result.checked_mul(10).ok_or(NumStrError::Overflow)?;
            // Accumulate on the negative side so i64::MIN stays reachable
            result = if self.is_negative {
                result.checked_sub(digit)
            } else {
                result.checked_add(digit)
            }
            .ok_or(NumStrError::Overflow)?;
        }
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let z = DecimalValue::zero();
        assert_eq!(z.integer_string(), "0");
        assert_eq!(z.fractional_len(), 0);
        assert!(!z.is_negative());
        assert!(z.is_zero());
        assert_eq!(z.sign(), NumberSign::Zero);
        assert_eq!(DecimalValue::default(), z);
    }

    #[test]
    fn test_from_digits() {
        let v = DecimalValue::from_digits(true, "00123", "450").unwrap();
        assert_eq!(v.integer_string(), "123");
        assert_eq!(v.fractional_string(), "450");
        assert!(v.is_negative());
        assert_eq!(v.sign(), NumberSign::Negative);

        let empty_int = DecimalValue::from_digits(false, "", "5").unwrap();
        assert_eq!(empty_int.to_string(), "0.5");
    }

    #[test]
    fn test_from_digits_invalid() {
        assert_eq!(
            DecimalValue::from_digits(false, "12a", ""),
            Err(NumStrError::MalformedNumberString)
        );
        assert_eq!(
            DecimalValue::from_digits(false, "1", "-5"),
            Err(NumStrError::MalformedNumberString)
        );
    }

    #[test]
    fn test_negative_zero_is_positive() {
        let v = DecimalValue::from_digits(true, "0", "000").unwrap();
        assert!(!v.is_negative());
        assert_eq!(v.to_string(), "0.000");
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(DecimalValue::from_i64(-42).to_string(), "-42");
        assert_eq!(DecimalValue::from_i64(0).to_string(), "0");
        assert_eq!(
            DecimalValue::from_i64(i64::MIN).to_string(),
            "-9223372036854775808"
        );
        assert_eq!(
            DecimalValue::from(u64::MAX).to_string(),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_numeric_value_type() {
        let int_val = DecimalValue::from_i64(5);
        assert_eq!(int_val.numeric_value_type(), NumericValueType::Integer);

        let float_val = DecimalValue::from_digits(false, "5", "0").unwrap();
        assert_eq!(float_val.numeric_value_type(), NumericValueType::FloatingPoint);
    }

    #[test]
    fn test_rationalize() {
        let mut v = DecimalValue::from_digits(false, "123", "4500").unwrap();
        v.rationalize();
        assert_eq!(v.to_string(), "123.45");

        let mut whole = DecimalValue::from_digits(true, "7", "000").unwrap();
        whole.rationalize();
        assert_eq!(whole.to_string(), "-7");

        let mut zero = DecimalValue::from_digits(false, "0", "00").unwrap();
        zero.rationalize();
        assert_eq!(zero, DecimalValue::zero());
    }

    #[test]
    fn test_abs() {
        let v = DecimalValue::from_i64(-100);
        assert_eq!(v.abs().to_string(), "100");
        assert_eq!(v.abs().abs(), v.abs());
    }

    #[test]
    fn test_display_and_debug() {
        let v = DecimalValue::from_digits(true, "0", "001").unwrap();
        assert_eq!(v.to_string(), "-0.001");
        assert_eq!(format!("{:?}", v), "DecimalValue(-0.001)");
    }

    #[test]
    fn test_to_i64() {
        let v = DecimalValue::from_digits(true, "123", "99").unwrap();
        assert_eq!(v.to_i64(), Ok(-123));

        assert_eq!(DecimalValue::from_i64(i64::MIN).to_i64(), Ok(i64::MIN));
        assert_eq!(DecimalValue::from_i64(i64::MAX).to_i64(), Ok(i64::MAX));
        assert_eq!(
            DecimalValue::from(u64::MAX).to_i64(),
            Err(NumStrError::Overflow)
        );
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let v = DecimalValue::from_digits(false, "123", "450").unwrap();
        let d = v.to_decimal().unwrap();
        assert_eq!(d, Decimal::new(123450, 3));
        assert_eq!(d.to_string(), "123.450");
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let v = DecimalValue::from_decimal(Decimal::new(-12345, 2)).unwrap();
        assert_eq!(v.integer_string(), "123");
        assert_eq!(v.fractional_string(), "45");
        assert!(v.is_negative());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(DecimalValue::from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(DecimalValue::from_f64(-2.5).unwrap().to_string(), "-2.5");
        assert_eq!(DecimalValue::from_f64(2.0).unwrap().to_string(), "2");
        assert_eq!(
            DecimalValue::from_f64(1e21).unwrap().to_string(),
            "1000000000000000000000"
        );
        assert_eq!(DecimalValue::from_f64(1e-7).unwrap().to_string(), "0.0000001");

        let neg_zero = DecimalValue::from_f64(-0.0).unwrap();
        assert!(neg_zero.is_zero());
        assert!(!neg_zero.is_negative());
    }

    #[test]
    fn test_from_f64_non_finite() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(DecimalValue::from_f64(f), Err(NumStrError::NonFiniteFloat));
        }
    }

    #[test]
    fn test_to_f64() {
        let v = DecimalValue::from_digits(true, "12", "345").unwrap();
        assert_eq!(v.to_f64(), Ok(-12.345));
        assert_eq!(DecimalValue::zero().to_f64(), Ok(0.0));

        for f in [0.1, 123.456, -1e-7, 9007199254740993.0, f64::MAX] {
            assert_eq!(DecimalValue::from_f64(f).unwrap().to_f64(), Ok(f));
        }

        let huge = DecimalValue::from_digits(false, &format!("1{}", "0".repeat(400)), "").unwrap();
        assert_eq!(huge.to_f64(), Err(NumStrError::Overflow));
    }

    #[test]
    fn test_to_decimal_overflow() {
        let too_long = DecimalValue::from_digits(false, "1", &"1".repeat(40)).unwrap();
        assert_eq!(too_long.to_decimal(), Err(NumStrError::Overflow));
    }
}
