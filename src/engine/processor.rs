// ============================================================================
// Number String Processor
// "String in, rounded string out" service for text-field collaborators
// ============================================================================

use crate::domain::{NumberConvention, RoundingMode, RoundingRequest};
use crate::engine::RoundingEngine;
use crate::interfaces::TieBreaker;
use crate::numeric::{
    format_with_convention, parse_with_convention, DecimalValue, NumStrError, NumStrResult,
};

/// Parses dirty input under a convention, optionally rounds it, and renders
/// the result.
pub struct NumStrProcessor {
    convention: NumberConvention,
    rounding: Option<RoundingRequest>,
    engine: RoundingEngine,
}

impl NumStrProcessor {
    /// Parse and round, returning the value
    pub fn process_value(&self, input: &str) -> NumStrResult<DecimalValue> {
        let mut value = parse_with_convention(input, &self.convention)?;
        if let Some(request) = self.rounding {
            self.engine.round_in_place(&mut value, request)?;
        }
        Ok(value)
    }

    /// Parse and round, returning a native number string
    pub fn process(&self, input: &str) -> NumStrResult<String> {
        self.process_value(input).map(|v| v.to_string())
    }

    /// Parse and round, returning a string formatted under the convention
    pub fn process_localized(&self, input: &str) -> NumStrResult<String> {
        self.process_value(input)
            .map(|v| format_with_convention(&v, &self.convention))
    }

    pub fn convention(&self) -> &NumberConvention {
        &self.convention
    }

    pub fn rounding(&self) -> Option<RoundingRequest> {
        self.rounding
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a processor from a convention and an optional rounding request
///
/// # Errors
/// - `InvalidConfiguration` if the convention fails validation
/// - `InvalidRoundingTarget` / `InvalidRoundingMode` for a bad request
///
/// # Example
/// ```
/// use numstr_kernel::prelude::*;
/// use numstr_kernel::engine::processor::create_from_convention;
///
/// let processor = create_from_convention(
///     NumberConvention::german(),
///     Some(RoundingRequest::new(RoundingMode::HalfToEven, 1)),
/// )
/// .unwrap();
/// assert_eq!(processor.process("1.234,25 €").unwrap(), "1234.2");
/// ```
pub fn create_from_convention(
    convention: NumberConvention,
    rounding: Option<RoundingRequest>,
) -> NumStrResult<NumStrProcessor> {
    NumStrProcessor::build_parts(convention, rounding, RoundingEngine::new())
}

impl NumStrProcessor {
    fn build_parts(
        convention: NumberConvention,
        rounding: Option<RoundingRequest>,
        engine: RoundingEngine,
    ) -> NumStrResult<Self> {
        // Validate configuration first
        if let Err(reason) = convention.validate() {
            tracing::debug!("processor convention rejected: {}", reason);
            return Err(NumStrError::InvalidConfiguration);
        }

        if let Some(request) = rounding {
            request.validate()?;
        }

        Ok(Self {
            convention,
            rounding,
            engine,
        })
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for number string processors with fluent API
///
/// # Example
/// ```
/// use numstr_kernel::prelude::*;
///
/// let processor = NumStrProcessorBuilder::new()
///     .us()
///     .rounding(RoundingMode::HalfAwayFromZero, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(processor.process("$1,234.565").unwrap(), "1234.57");
/// assert_eq!(processor.process_localized("(1,234.565)").unwrap(), "-1,234.57");
/// ```
pub struct NumStrProcessorBuilder {
    convention: NumberConvention,
    rounding: Option<RoundingRequest>,
    tie_breaker: Option<Box<dyn TieBreaker>>,
}

impl NumStrProcessorBuilder {
    /// Create a new builder with the US convention and no rounding
    pub fn new() -> Self {
        Self {
            convention: NumberConvention::us(),
            rounding: None,
            tie_breaker: None,
        }
    }

    // ========================================================================
    // Convention Configuration
    // ========================================================================

    pub fn with_convention(mut self, convention: NumberConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn us(self) -> Self {
        self.with_convention(NumberConvention::us())
    }

    pub fn german(self) -> Self {
        self.with_convention(NumberConvention::german())
    }

    pub fn french(self) -> Self {
        self.with_convention(NumberConvention::french())
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    /// Round every processed value to `target_fractional_digits`
    pub fn rounding(mut self, mode: RoundingMode, target_fractional_digits: i32) -> Self {
        self.rounding = Some(RoundingRequest::new(mode, target_fractional_digits));
        self
    }

    /// Leave values at their parsed precision
    pub fn no_rounding(mut self) -> Self {
        self.rounding = None;
        self
    }

    /// Tie breaker for the Randomly mode
    pub fn with_tie_breaker(mut self, tie_breaker: Box<dyn TieBreaker>) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    pub fn build(self) -> NumStrResult<NumStrProcessor> {
        let engine = match self.tie_breaker {
            Some(tie_breaker) => RoundingEngine::with_tie_breaker(tie_breaker),
            None => RoundingEngine::new(),
        };
        NumStrProcessor::build_parts(self.convention, self.rounding, engine)
    }

    /// Get the convention without building (for inspection)
    pub fn get_convention(&self) -> &NumberConvention {
        &self.convention
    }
}

impl Default for NumStrProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
