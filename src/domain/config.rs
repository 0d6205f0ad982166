// ============================================================================
// Number Convention Configuration
// Locale conventions for decimal separators, digit grouping and negative signs
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Sign Style
// ============================================================================

/// How a negative value is marked when formatted with a convention.
///
/// Parsing accepts all three styles regardless of the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativeSignStyle {
    /// `-1,234.56` (US, France)
    LeadingMinus,

    /// `1.234,56-` (Germany)
    TrailingMinus,

    /// `(1,234.56)` (US accounting)
    Parentheses,
}

// ============================================================================
// Integer Grouping
// ============================================================================

/// How integer digits are split into groups when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegerGrouping {
    /// `6789000000000000`
    None,

    /// `6,789,000,000,000,000`
    #[default]
    Thousands,

    /// `6,78,90,00,00,00,00,000`: three digits, then pairs
    IndiaNumbering,

    /// `6789,0000,0000,0000`: groups of four
    ChineseNumbering,

    /// Fixed group width
    Uniform(usize),
}

impl IntegerGrouping {
    /// True if a separator goes in front of the digit that has
    /// `digits_to_right` digits after it (counting itself).
    #[inline]
    pub(crate) fn is_boundary(self, digits_to_right: usize) -> bool {
        match self {
            IntegerGrouping::None => false,
            IntegerGrouping::Thousands => digits_to_right % 3 == 0,
            IntegerGrouping::IndiaNumbering => {
                digits_to_right == 3 || (digits_to_right > 3 && (digits_to_right - 3) % 2 == 0)
            },
            IntegerGrouping::ChineseNumbering => digits_to_right % 4 == 0,
            IntegerGrouping::Uniform(size) => size > 0 && digits_to_right % size == 0,
        }
    }
}

// ============================================================================
// Currency Symbol
// ============================================================================

/// Side of the number a currency symbol is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyPosition {
    /// `$1,234.56`
    Leading,
    /// `1.234,56 €`
    Trailing,
}

/// Where a currency symbol sits relative to the negative sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencySignPosition {
    /// `-$1,234.56`, `($1,234.56)`, `1.234,56 €-`
    #[default]
    InsideSign,
    /// `$-1,234.56`, `$(1,234.56)`, `1.234,56- €`
    OutsideSign,
}

/// Currency symbol rendered by localized formatting.
///
/// The symbol text is emitted verbatim, so any spacing between it and the
/// digits is part of the symbol (`" €"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencySymbol {
    pub symbol: String,
    pub position: CurrencyPosition,
    pub sign_position: CurrencySignPosition,
}

impl CurrencySymbol {
    /// Symbol written before the digits, inside the negative sign
    pub fn leading(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            position: CurrencyPosition::Leading,
            sign_position: CurrencySignPosition::InsideSign,
        }
    }

    /// Symbol written after the digits, inside the negative sign
    pub fn trailing(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            position: CurrencyPosition::Trailing,
            sign_position: CurrencySignPosition::InsideSign,
        }
    }

    /// Builder method: Place the symbol outside the negative sign
    pub fn outside_sign(mut self) -> Self {
        self.sign_position = CurrencySignPosition::OutsideSign;
        self
    }

    /// Symbol text without surrounding spacing
    #[inline]
    pub(crate) fn trimmed(&self) -> &str {
        self.symbol.trim()
    }
}

// ============================================================================
// Complete Number Convention
// ============================================================================

/// Characters skipped as grouping separators when nothing else is configured.
pub const DEFAULT_GROUPING_CHARS: [char; 7] = [',', '.', '\'', '_', ' ', '\u{00A0}', '\u{202F}'];

/// Locale convention used to read dirty number strings and to render
/// localized ones.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberConvention {
    /// Radix point between integer and fractional digits (e.g. "." or ",")
    pub decimal_separator: String,

    /// Characters skipped inside the integer digits while parsing
    pub accepted_grouping: Vec<char>,

    /// Separator inserted between digit groups when formatting.
    /// None disables grouping on output.
    pub grouping_separator: Option<char>,

    /// Grouping pattern for integer digits when formatting
    pub integer_grouping: IntegerGrouping,

    /// Negative marker used when formatting
    pub negative_style: NegativeSignStyle,

    /// Currency symbol added when formatting, stripped when parsing
    pub currency: Option<CurrencySymbol>,
}

impl NumberConvention {
    /// Create a convention from a decimal separator.
    ///
    /// Grouping characters default to [`DEFAULT_GROUPING_CHARS`] minus any
    /// character used by the decimal separator. No output grouping, leading
    /// minus.
    pub fn new(decimal_separator: impl Into<String>) -> Self {
        let decimal_separator = decimal_separator.into();
        let accepted_grouping = DEFAULT_GROUPING_CHARS
            .iter()
            .copied()
            .filter(|c| !decimal_separator.contains(*c))
            .collect();

        Self {
            decimal_separator,
            accepted_grouping,
            grouping_separator: None,
            integer_grouping: IntegerGrouping::Thousands,
            negative_style: NegativeSignStyle::LeadingMinus,
            currency: None,
        }
    }

    /// Builder method: Set output grouping separator (also accepted on parse)
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        if !self.accepted_grouping.contains(&separator) {
            self.accepted_grouping.push(separator);
        }
        self
    }

    /// Builder method: Set a fixed number of digits per group
    pub fn with_group_size(self, size: usize) -> Self {
        self.with_integer_grouping(IntegerGrouping::Uniform(size))
    }

    /// Builder method: Set the integer grouping pattern
    pub fn with_integer_grouping(mut self, grouping: IntegerGrouping) -> Self {
        self.integer_grouping = grouping;
        self
    }

    /// Builder method: Render a currency symbol on output
    pub fn with_currency(mut self, currency: CurrencySymbol) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Builder method: Set negative sign style for output
    pub fn with_negative_style(mut self, style: NegativeSignStyle) -> Self {
        self.negative_style = style;
        self
    }

    /// Builder method: Replace the grouping characters accepted on parse
    pub fn with_accepted_grouping(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.accepted_grouping = chars.into_iter().collect();
        self
    }

    /// True if `c` may appear between integer digits as a group separator.
    #[inline]
    pub(crate) fn is_grouping_char(&self, c: char) -> bool {
        self.accepted_grouping.contains(&c)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_separator.is_empty() {
            return Err("Decimal separator cannot be empty".to_string());
        }

        if self.decimal_separator.chars().any(|c| c.is_ascii_digit()) {
            return Err("Decimal separator cannot contain digits".to_string());
        }

        if self.integer_grouping == IntegerGrouping::Uniform(0) {
            return Err("Group size must be positive".to_string());
        }

        for c in &self.accepted_grouping {
            if c.is_ascii_digit() {
                return Err(format!("Grouping character '{}' cannot be a digit", c));
            }
            if self.decimal_separator.contains(*c) {
                return Err(format!(
                    "Grouping character '{}' collides with the decimal separator",
                    c
                ));
            }
        }

        if let Some(sep) = self.grouping_separator {
            if sep.is_ascii_digit() || self.decimal_separator.contains(sep) {
                return Err(format!("Grouping separator '{}' is not usable", sep));
            }
        }

        if let Some(currency) = &self.currency {
            let symbol = currency.trimmed();
            if symbol.is_empty() {
                return Err("Currency symbol cannot be empty".to_string());
            }
            if symbol.chars().any(|c| c.is_ascii_digit() || matches!(c, '-' | '(' | ')')) {
                return Err(format!(
                    "Currency symbol '{}' cannot contain digits or sign characters",
                    symbol
                ));
            }
        }

        Ok(())
    }
}

impl Default for NumberConvention {
    fn default() -> Self {
        Self::us()
    }
}

// ============================================================================
// Preset Conventions (Factory Methods)
// ============================================================================

impl NumberConvention {
    /// US convention
    /// - Decimal point: '.'
    /// - Grouping: ',' in groups of three
    /// - Negative: leading minus (parentheses accepted on parse)
    pub fn us() -> Self {
        Self::new(".")
            .with_accepted_grouping([',', ' ', '\u{00A0}'])
            .with_grouping_separator(',')
    }

    /// German convention
    /// - Decimal separator: ','
    /// - Grouping: '.' in groups of three
    /// - Negative: trailing minus
    pub fn german() -> Self {
        Self::new(",")
            .with_accepted_grouping(['.', ' ', '\u{00A0}'])
            .with_grouping_separator('.')
            .with_negative_style(NegativeSignStyle::TrailingMinus)
    }

    /// French convention
    /// - Decimal separator: ','
    /// - Grouping: space (plain, no-break or narrow no-break)
    /// - Negative: leading minus
    pub fn french() -> Self {
        Self::new(",")
            .with_accepted_grouping([' ', '\u{00A0}', '\u{202F}'])
            .with_grouping_separator(' ')
    }

    /// Indian convention
    /// - Decimal point: '.'
    /// - Grouping: ',' as three digits, then pairs (`12,34,567.89`)
    /// - Negative: leading minus
    pub fn india() -> Self {
        Self::us().with_integer_grouping(IntegerGrouping::IndiaNumbering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_creation() {
        let conv = NumberConvention::new(",");
        assert_eq!(conv.decimal_separator, ",");
        assert!(!conv.accepted_grouping.contains(&','));
        assert!(conv.accepted_grouping.contains(&'.'));
        assert_eq!(conv.grouping_separator, None);
        assert!(conv.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let conv = NumberConvention::new(".")
            .with_grouping_separator('\'')
            .with_group_size(4)
            .with_negative_style(NegativeSignStyle::Parentheses);

        assert_eq!(conv.grouping_separator, Some('\''));
        assert_eq!(conv.integer_grouping, IntegerGrouping::Uniform(4));
        assert_eq!(conv.negative_style, NegativeSignStyle::Parentheses);
        assert!(conv.is_grouping_char('\''));
    }

    #[test]
    fn test_validation() {
        assert!(NumberConvention::new("").validate().is_err());
        assert!(NumberConvention::new("1").validate().is_err());
        assert!(NumberConvention::new(".").with_group_size(0).validate().is_err());

        let colliding = NumberConvention::new(".").with_accepted_grouping(['.']);
        assert!(colliding.validate().is_err());

        for bad in ["", "  ", "US$1", "-", "(€)"] {
            let conv = NumberConvention::us().with_currency(CurrencySymbol::leading(bad));
            assert!(conv.validate().is_err(), "symbol {:?}", bad);
        }
        let ok = NumberConvention::german().with_currency(CurrencySymbol::trailing(" €"));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_grouping_boundaries() {
        let boundaries = |g: IntegerGrouping| (1..=9).filter(|&d| g.is_boundary(d)).collect::<Vec<_>>();

        assert_eq!(boundaries(IntegerGrouping::None), Vec::<usize>::new());
        assert_eq!(boundaries(IntegerGrouping::Thousands), vec![3, 6, 9]);
        assert_eq!(boundaries(IntegerGrouping::IndiaNumbering), vec![3, 5, 7, 9]);
        assert_eq!(boundaries(IntegerGrouping::ChineseNumbering), vec![4, 8]);
        assert_eq!(boundaries(IntegerGrouping::Uniform(2)), vec![2, 4, 6, 8]);
        assert_eq!(boundaries(IntegerGrouping::Uniform(0)), Vec::<usize>::new());
        assert_eq!(IntegerGrouping::default(), IntegerGrouping::Thousands);
    }

    #[test]
    fn test_currency_symbol_builders() {
        let dollar = CurrencySymbol::leading("$");
        assert_eq!(dollar.position, CurrencyPosition::Leading);
        assert_eq!(dollar.sign_position, CurrencySignPosition::InsideSign);

        let euro = CurrencySymbol::trailing(" €").outside_sign();
        assert_eq!(euro.position, CurrencyPosition::Trailing);
        assert_eq!(euro.sign_position, CurrencySignPosition::OutsideSign);
        assert_eq!(euro.trimmed(), "€");
    }

    #[test]
    fn test_preset_conventions() {
        let us = NumberConvention::us();
        assert_eq!(us.decimal_separator, ".");
        assert_eq!(us.grouping_separator, Some(','));
        assert!(us.validate().is_ok());

        let de = NumberConvention::german();
        assert_eq!(de.decimal_separator, ",");
        assert!(matches!(de.negative_style, NegativeSignStyle::TrailingMinus));
        assert!(de.validate().is_ok());

        let fr = NumberConvention::french();
        assert_eq!(fr.grouping_separator, Some(' '));
        assert!(fr.validate().is_ok());

        let india = NumberConvention::india();
        assert_eq!(india.integer_grouping, IntegerGrouping::IndiaNumbering);
        assert!(india.currency.is_none());
        assert!(india.validate().is_ok());
    }
}
