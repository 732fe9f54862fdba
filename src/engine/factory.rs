// ============================================================================
// Speller Factory
// Creates number spellers with proper configuration
// ============================================================================

use crate::domain::{CurrencyForm, LocaleConfig, YearConfig};
use crate::engine::NumberSpeller;
use crate::interfaces::NumberDecomposer;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number speller from configuration
///
/// # Arguments
/// * `config` - Locale vocabulary and wording rules
/// * `decomposer` - Replacement decomposition engine, or `None` for the
///   place-value default
///
/// # Returns
/// * `Result<NumberSpeller, String>` - Configured speller or the validation error
///
/// # Example
/// ```
/// use numwords_rw::prelude::*;
///
/// let speller = create_from_config(LocaleConfig::kinyarwanda(), None).unwrap();
/// assert_eq!(speller.decomposer_name(), "PlaceValue");
/// ```
pub fn create_from_config(
    config: LocaleConfig,
    decomposer: Option<Box<dyn NumberDecomposer>>,
) -> Result<NumberSpeller, String> {
    let speller = match decomposer {
        Some(decomposer) => NumberSpeller::with_decomposer(config, decomposer)?,
        None => NumberSpeller::new(config)?,
    };

    tracing::debug!(
        decomposer = speller.decomposer_name(),
        words = speller.word_table().len(),
        limit = %speller.limit(),
        "created number speller"
    );

    Ok(speller)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating number spellers with a fluent API
///
/// # Example
/// ```
/// use numwords_rw::prelude::*;
///
/// let speller = NumberSpellerBuilder::new()
///     .with_currency("KES", CurrencyForm::new(("ishiringi", "amashiringi"), ("senti", "amasenti")))
///     .with_negative_word("munsi ya zeru")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     speller.to_currency(2, "kes").unwrap(),
///     "amashiringi kabiri n' amasenti zeru"
/// );
/// ```
pub struct NumberSpellerBuilder {
    config: LocaleConfig,
    decomposer: Option<Box<dyn NumberDecomposer>>,
}

impl NumberSpellerBuilder {
    /// Create a builder starting from the Kinyarwanda vocabulary
    pub fn new() -> Self {
        Self::from_config(LocaleConfig::kinyarwanda())
    }

    /// Create a builder starting from an existing configuration
    pub fn from_config(config: LocaleConfig) -> Self {
        Self {
            config,
            decomposer: None,
        }
    }

    // ========================================================================
    // Vocabulary Configuration
    // ========================================================================

    /// Set the negation word
    pub fn with_negative_word(mut self, word: impl Into<String>) -> Self {
        self.config = self.config.with_negative_word(word);
        self
    }

    /// Set the decimal-point word
    pub fn with_decimal_word(mut self, word: impl Into<String>) -> Self {
        self.config = self.config.with_decimal_word(word);
        self
    }

    /// Register (or replace) a currency
    pub fn with_currency(mut self, code: impl Into<String>, form: CurrencyForm) -> Self {
        self.config = self.config.with_currency(code, form);
        self
    }

    /// Add an irregular ordinal keyed by cardinal text
    pub fn with_ordinal_exception(
        mut self,
        cardinal: impl Into<String>,
        ordinal: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_ordinal_exception(cardinal, ordinal);
        self
    }

    /// Replace the scale roots (largest first)
    pub fn with_scale_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_scale_roots(roots);
        self
    }

    /// Set the year fillers
    pub fn with_year(mut self, year: YearConfig) -> Self {
        self.config = self.config.with_year(year);
        self
    }

    // ========================================================================
    // Engine Configuration
    // ========================================================================

    /// Use a custom decomposition engine
    pub fn with_decomposer(mut self, decomposer: Box<dyn NumberDecomposer>) -> Self {
        self.decomposer = Some(decomposer);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the number speller
    pub fn build(self) -> Result<NumberSpeller, String> {
        create_from_config(self.config, self.decomposer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &LocaleConfig {
        &self.config
    }
}

impl Default for NumberSpellerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
