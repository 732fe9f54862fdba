// ============================================================================
// Ordinal Formatter
// Ranking readings built on the cardinal reading
// ============================================================================

use crate::engine::speller::NumberSpeller;
use crate::numeric::{DecimalParts, SpellError, SpellResult};
use rust_decimal::Decimal;

impl NumberSpeller {
    /// Ordinal reading of a positive integer.
    ///
    /// Irregular forms come from the ordinal exception table (keyed by the
    /// cardinal text). Other values take the ordinal marker, elided before
    /// a vowel: `uwa makumyabiri`, `uw' ijana`.
    ///
    /// # Errors
    /// Returns `DomainValidation` for zero, negative or fractional values.
    pub fn to_ordinal(&self, value: impl Into<Decimal>) -> SpellResult<String> {
        let value = self.verify_ordinal(value.into())?;
        let cardinal = self.to_cardinal_int(value)?;

        if let Some(irregular) = self.config.ordinal_exceptions.get(&cardinal) {
            return Ok(irregular.clone());
        }

        let stem = if value == 1 {
            self.config.first_ordinal_stem.as_str()
        } else {
            cardinal.as_str()
        };

        Ok(self.config.ordinal_marker.prefix(stem))
    }

    /// Ordinal marker followed by the decimal digits: `uwa 21`.
    ///
    /// # Errors
    /// Returns `DomainValidation` for zero, negative or fractional values.
    pub fn to_ordinal_num(&self, value: impl Into<Decimal>) -> SpellResult<String> {
        let value = self.verify_ordinal(value.into())?;
        Ok(format!("{} {}", self.config.ordinal_marker.full, value))
    }

    fn verify_ordinal(&self, value: Decimal) -> SpellResult<u128> {
        let parts = DecimalParts::split(value);
        match parts.as_integer() {
            Some(integer) if integer > 0 && !parts.negative => Ok(integer),
            _ => {
                tracing::debug!(%value, "rejected ordinal input");
                Err(SpellError::DomainValidation { value })
            },
        }
    }
}
