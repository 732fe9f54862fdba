// ============================================================================
// Place-Value Decomposer
// Splits integers into one fragment per place value using the word table
// ============================================================================

use crate::domain::{Fragment, WordTable};
use crate::engine::merge::FragmentMerger;
use crate::interfaces::{Fragments, NumberDecomposer};
use crate::numeric::{SpellError, SpellResult};
use std::sync::Arc;

/// Round words from here up already mean "one of" their unit
const HUNDRED: u128 = 100;

/// Default decomposition engine.
///
/// For the largest table word `w <= n`, writes `n = m·w + r`, emits a
/// fragment for `m·w` and continues with `r`. The multiplier `m` is itself
/// decomposed and merged with `w`, so every emitted fragment carries the
/// exact value of its place and the fragments add up to `n`.
///
/// # Example
/// ```text
/// 2385 -> [kabiri n' igihumbi (2000), gatatu n' ijana (300),
///          mirongo inani (80), gatanu (5)]
/// ```
pub struct PlaceValueDecomposer {
    table: Arc<WordTable>,
    merger: FragmentMerger,
}

impl PlaceValueDecomposer {
    pub fn new(table: Arc<WordTable>, merger: FragmentMerger) -> Self {
        Self { table, merger }
    }

    fn push_places(&self, value: u128, out: &mut Fragments) -> SpellResult<()> {
        let (word_value, word) = self
            .table
            .floor(value)
            .ok_or(SpellError::IncompleteDecomposition { value })?;

        let (multiplier, remainder) = if value == 0 {
            (1, 0)
        } else {
            (value / word_value, value % word_value)
        };

        out.push(self.place(value, multiplier, Fragment::new(word, word_value))?);

        if remainder > 0 {
            self.push_places(remainder, out)?;
        }
        Ok(())
    }

    /// Fragment for `multiplier × word`.
    fn place(&self, value: u128, multiplier: u128, word: Fragment) -> SpellResult<Fragment> {
        if multiplier == 1 {
            if word.value() >= HUNDRED {
                return Ok(word);
            }
            // merged away by unit elision
            let unit = self
                .table
                .get(1)
                .ok_or(SpellError::IncompleteDecomposition { value })?;
            return Ok(self.merger.merge(Fragment::new(unit, 1), word));
        }

        // a word of one cannot shrink the value (no words between 1 and value)
        if multiplier >= value {
            return Err(SpellError::IncompleteDecomposition { value });
        }

        let expected = multiplier
            .checked_mul(word.value())
            .ok_or(SpellError::IncompleteDecomposition { value })?;

        let parts = self.decompose(multiplier)?;
        let multiplier = self
            .merger
            .fold(parts)
            .ok_or(SpellError::IncompleteDecomposition { value })?;

        // a multiplier above a sub-hundred word merges additively
        let place = self.merger.merge(multiplier, word);
        if place.value() != expected {
            tracing::debug!(value, place = %place, "word table cannot express place value");
            return Err(SpellError::IncompleteDecomposition { value });
        }
        Ok(place)
    }
}

impl NumberDecomposer for PlaceValueDecomposer {
    fn decompose(&self, value: u128) -> SpellResult<Fragments> {
        let limit = self.table.limit();
        if value >= limit {
            return Err(SpellError::UnsupportedMagnitude { value, limit });
        }

        let mut out = Fragments::new();
        self.push_places(value, &mut out)?;

        tracing::trace!(value, places = out.len(), "decomposed integer");
        Ok(out)
    }

    fn name(&self) -> &str {
        "PlaceValue"
    }
}
