// ============================================================================
// Decimal Parts
// Splits decimal inputs into the pieces the formatters read aloud
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of subunits per currency unit
pub const SUBUNITS_PER_UNIT: u128 = 100;

/// A decimal value split into sign, integer part and fractional digits.
///
/// The fractional digits are kept as text so that leading zeros survive
/// (`1.05` has the digits `"05"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    pub negative: bool,
    pub integer: u128,
    pub fraction: Option<String>,
}

impl DecimalParts {
    /// Split a decimal after stripping trailing zeros.
    ///
    /// # Example
    /// ```
    /// use numwords_rw::numeric::DecimalParts;
    /// use rust_decimal::Decimal;
    ///
    /// let parts = DecimalParts::split(Decimal::new(-1705, 2)); // -17.05
    /// assert!(parts.negative);
    /// assert_eq!(parts.integer, 17);
    /// assert_eq!(parts.fraction.as_deref(), Some("05"));
    /// ```
    pub fn split(value: Decimal) -> Self {
        let normalized = value.normalize();
        let scale = normalized.scale();
        let mantissa = normalized.mantissa().unsigned_abs();
        let divisor = 10u128.pow(scale);

        let integer = mantissa / divisor;
        let remainder = mantissa % divisor;

        let fraction = if remainder == 0 {
            None
        } else {
            Some(format!("{:0>width$}", remainder, width = scale as usize))
        };

        Self {
            negative: mantissa != 0 && normalized.is_sign_negative(),
            integer,
            fraction,
        }
    }

    /// The integer value, if the input had no fractional part.
    pub fn as_integer(&self) -> Option<u128> {
        match self.fraction {
            None => Some(self.integer),
            Some(_) => None,
        }
    }
}

/// A currency amount rounded to whole subunits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyParts {
    pub negative: bool,
    pub units: u128,
    pub subunits: u128,
}

impl CurrencyParts {
    /// Round half away from zero to two decimal places and split.
    pub fn split(amount: Decimal) -> Self {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let mantissa = rounded.mantissa().unsigned_abs();
        // round_dp leaves at most two decimal places
        let total = mantissa * 10u128.pow(2 - rounded.scale().min(2));

        Self {
            negative: mantissa != 0 && rounded.is_sign_negative(),
            units: total / SUBUNITS_PER_UNIT,
            subunits: total % SUBUNITS_PER_UNIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_integer() {
        let parts = DecimalParts::split(Decimal::from(4196));
        assert!(!parts.negative);
        assert_eq!(parts.integer, 4196);
        assert_eq!(parts.fraction, None);
        assert_eq!(parts.as_integer(), Some(4196));
    }

    #[test]
    fn test_split_fraction() {
        let parts = DecimalParts::split(Decimal::new(1742, 2));
        assert_eq!(parts.integer, 17);
        assert_eq!(parts.fraction.as_deref(), Some("42"));
        assert_eq!(parts.as_integer(), None);
    }

    #[test]
    fn test_split_strips_trailing_zeros() {
        let parts = DecimalParts::split(Decimal::new(550, 2)); // 5.50
        assert_eq!(parts.integer, 5);
        assert_eq!(parts.fraction.as_deref(), Some("5"));

        let whole = DecimalParts::split(Decimal::new(300, 2)); // 3.00
        assert_eq!(whole.as_integer(), Some(3));
    }

    #[test]
    fn test_split_keeps_leading_zeros() {
        let parts = DecimalParts::split(Decimal::new(1005, 3)); // 1.005
        assert_eq!(parts.fraction.as_deref(), Some("005"));
    }

    #[test]
    fn test_split_negative_and_zero() {
        let neg = DecimalParts::split(Decimal::new(-25, 1));
        assert!(neg.negative);
        assert_eq!(neg.integer, 2);

        let zero = DecimalParts::split(-Decimal::ZERO);
        assert!(!zero.negative);
        assert_eq!(zero.as_integer(), Some(0));
    }

    #[test]
    fn test_currency_split() {
        let parts = CurrencyParts::split(Decimal::new(1226, 2));
        assert_eq!(parts.units, 12);
        assert_eq!(parts.subunits, 26);

        let whole = CurrencyParts::split(Decimal::from(100));
        assert_eq!(whole.units, 100);
        assert_eq!(whole.subunits, 0);
    }

    #[test]
    fn test_currency_split_rounds_half_up() {
        let up = CurrencyParts::split(Decimal::new(5, 3)); // 0.005
        assert_eq!(up.units, 0);
        assert_eq!(up.subunits, 1);

        let carry = CurrencyParts::split(Decimal::new(19999, 4)); // 1.9999
        assert_eq!(carry.units, 2);
        assert_eq!(carry.subunits, 0);

        let neg = CurrencyParts::split(Decimal::new(-2015, 3)); // -2.015
        assert!(neg.negative);
        assert_eq!(neg.units, 2);
        assert_eq!(neg.subunits, 2);
    }
}
