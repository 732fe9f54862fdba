// ============================================================================
// Numeric Module
// Decimal splitting and error types shared by the formatters
// ============================================================================
//
// This module provides:
// - DecimalParts: sign / integer / fractional digits of a decimal input
// - CurrencyParts: units and subunits after two-place rounding
// - SpellError: Error types for spelling operations
//
// Inputs are rust_decimal::Decimal so fractional digits are read exactly
// as written, never through a binary float.

mod errors;
mod parts;

pub use errors::{SpellError, SpellResult};
pub use parts::{CurrencyParts, DecimalParts, SUBUNITS_PER_UNIT};
