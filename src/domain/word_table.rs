// ============================================================================
// Word Table
// Numeric value -> canonical numeral word, in three tiers
// ============================================================================

use super::config::LocaleConfig;
use super::scale::generate_scale_words;
use std::collections::BTreeMap;

/// Lookup table of numeral words.
///
/// Tiers:
/// - low: every value from zero upward (teens and exact tens included)
/// - mid: round tens, hundreds and thousands
/// - scale: generated powers of a thousand beyond the mid tier
///
/// Built once from a [`LocaleConfig`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    words: BTreeMap<u128, String>,
}

impl WordTable {
    /// Build the table from the vocabulary in `config`.
    ///
    /// # Errors
    /// Returns an error if the scale roots exceed the supported count.
    pub fn from_config(config: &LocaleConfig) -> Result<Self, String> {
        let mut words = BTreeMap::new();

        for (power, word) in generate_scale_words(&config.scale_roots, &config.scale_suffix)? {
            words.insert(power, word);
        }
        for (value, word) in &config.mid_words {
            words.insert(u128::from(*value), word.clone());
        }
        for (value, word) in config.low_words.iter().enumerate() {
            words.insert(value as u128, word.clone());
        }

        Ok(Self { words })
    }

    /// Word for exactly `value`, if the table has one.
    #[inline]
    pub fn get(&self, value: u128) -> Option<&str> {
        self.words.get(&value).map(String::as_str)
    }

    /// Largest entry not above `value`.
    pub fn floor(&self, value: u128) -> Option<(u128, &str)> {
        self.words
            .range(..=value)
            .next_back()
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// Highest entry in the table.
    pub fn highest(&self) -> Option<(u128, &str)> {
        self.words
            .last_key_value()
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// Exclusive upper bound on spellable integers: a thousand times the
    /// highest word.
    pub fn limit(&self) -> u128 {
        self.highest()
            .map(|(value, _)| value.saturating_mul(1000))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
