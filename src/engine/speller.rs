// ============================================================================
// Number Speller
// Public facade: cardinal reading plus dispatch to the other readings
// ============================================================================

use crate::domain::{LocaleConfig, WordTable};
use crate::engine::merge::FragmentMerger;
use crate::engine::place_value::PlaceValueDecomposer;
use crate::interfaces::NumberDecomposer;
use crate::numeric::{DecimalParts, SpellError, SpellResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Which reading of a number to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation<'a> {
    /// Counting form ("gatatu")
    Cardinal,
    /// Ranking form ("uwa gatatu")
    Ordinal,
    /// Ordinal marker with digits ("uwa 3")
    OrdinalNumeral,
    /// Year reading with an optional era suffix
    Year { suffix: Option<&'a str> },
    /// Money amount in the given currency
    Currency { code: &'a str },
}

/// Converts numbers into Kinyarwanda words.
///
/// All tables are built once at construction and only read afterwards, so a
/// speller can be shared between threads behind an `Arc`.
///
/// # Example
/// ```
/// use numwords_rw::prelude::*;
///
/// let speller = NumberSpeller::kinyarwanda();
/// assert_eq!(speller.to_cardinal(28).unwrap(), "makumyabiri n' umunani");
/// assert_eq!(speller.to_ordinal(100).unwrap(), "uw' ijana");
/// ```
pub struct NumberSpeller {
    pub(super) config: Arc<LocaleConfig>,
    pub(super) table: Arc<WordTable>,
    pub(super) merger: FragmentMerger,
    pub(super) decomposer: Box<dyn NumberDecomposer>,
}

impl NumberSpeller {
    /// Speller for `config` using the place-value decomposer.
    ///
    /// # Errors
    /// Returns the validation message if `config` is invalid.
    pub fn new(config: LocaleConfig) -> Result<Self, String> {
        config.validate()?;
        let table = Arc::new(WordTable::from_config(&config)?);
        let merger = FragmentMerger::new(config.conjunction.clone());
        let decomposer = Box::new(PlaceValueDecomposer::new(Arc::clone(&table), merger.clone()));

        Ok(Self {
            config: Arc::new(config),
            table,
            merger,
            decomposer,
        })
    }

    /// Speller for `config` with a caller-supplied decomposer.
    ///
    /// # Errors
    /// Returns the validation message if `config` is invalid.
    pub fn with_decomposer(
        config: LocaleConfig,
        decomposer: Box<dyn NumberDecomposer>,
    ) -> Result<Self, String> {
        let mut speller = Self::new(config)?;
        speller.decomposer = decomposer;
        Ok(speller)
    }

    /// Speller with the built-in Kinyarwanda vocabulary.
    pub fn kinyarwanda() -> Self {
        Self::new(LocaleConfig::kinyarwanda()).expect("built-in vocabulary is valid")
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn word_table(&self) -> &WordTable {
        &self.table
    }

    pub fn decomposer_name(&self) -> &str {
        self.decomposer.name()
    }

    /// Exclusive upper bound on the integer part of any input.
    pub fn limit(&self) -> u128 {
        self.table.limit()
    }

    // ========================================================================
    // Cardinal
    // ========================================================================

    /// Cardinal reading of a decimal value.
    ///
    /// A fractional part is read as its own cardinal after the decimal
    /// word; each leading zero of the fraction is read as the zero word.
    /// Negative values get the negation word in front.
    ///
    /// # Errors
    /// Returns `UnsupportedMagnitude` if the integer part is too large for
    /// the configured scale words.
    pub fn to_cardinal(&self, value: impl Into<Decimal>) -> SpellResult<String> {
        let parts = DecimalParts::split(value.into());

        let mut words = self.to_cardinal_int(parts.integer)?;
        if let Some(digits) = &parts.fraction {
            words = format!(
                "{} {} {}",
                words,
                self.config.decimal_word,
                self.fraction_words(digits)?
            );
        }
        if parts.negative {
            words = format!("{} {}", self.config.negative_word, words);
        }

        Ok(words)
    }

    /// Cardinal reading of a non-negative integer.
    ///
    /// Accepts magnitudes beyond the decimal range, up to [`limit`](Self::limit).
    pub fn to_cardinal_int(&self, value: u128) -> SpellResult<String> {
        let limit = self.limit();
        if value >= limit {
            tracing::debug!(value, limit, "integer exceeds the highest scale word");
            return Err(SpellError::UnsupportedMagnitude { value, limit });
        }

        let fragments = self.decomposer.decompose(value)?;
        let merged = self
            .merger
            .fold(fragments)
            .ok_or(SpellError::IncompleteDecomposition { value })?;

        Ok(merged.into_text())
    }

    fn fraction_words(&self, digits: &str) -> SpellResult<String> {
        let significant = digits.trim_start_matches('0');
        let zeros = digits.len() - significant.len();

        let mut words: Vec<String> = Vec::with_capacity(zeros + 1);
        for _ in 0..zeros {
            words.push(self.to_cardinal_int(0)?);
        }
        if !significant.is_empty() {
            // at most 28 digits, always fits
            let value: u128 = significant
                .parse()
                .map_err(|_| SpellError::IncompleteDecomposition { value: 0 })?;
            words.push(self.to_cardinal_int(value)?);
        }

        Ok(words.join(" "))
    }

    // ========================================================================
    // Dispatch and Casing
    // ========================================================================

    /// Produce the requested reading of `value`.
    ///
    /// # Example
    /// ```
    /// use numwords_rw::prelude::*;
    /// use rust_decimal::Decimal;
    ///
    /// let speller = NumberSpeller::kinyarwanda();
    /// let text = speller
    ///     .spell(Decimal::from(12), Representation::Currency { code: "RWF" })
    ///     .unwrap();
    /// assert_eq!(text, "amafaranga cumi na kabiri n' ibice zeru");
    /// ```
    pub fn spell(&self, value: Decimal, representation: Representation<'_>) -> SpellResult<String> {
        tracing::trace!(%value, ?representation, "spelling");

        match representation {
            Representation::Cardinal => self.to_cardinal(value),
            Representation::Ordinal => self.to_ordinal(value),
            Representation::OrdinalNumeral => self.to_ordinal_num(value),
            Representation::Year { suffix } => {
                let year = value.to_i64().filter(|_| value.fract().is_zero());
                match year {
                    Some(year) => self.to_year(year, suffix),
                    None => Err(SpellError::DomainValidation { value }),
                }
            },
            Representation::Currency { code } => self.to_currency(value, code),
        }
    }

    /// Capitalize every word of `text` except the configured exclusions.
    pub fn title(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                if self.config.title_exclusions.iter().any(|w| w == word) {
                    word.to_string()
                } else {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller() -> NumberSpeller {
        NumberSpeller::kinyarwanda()
    }

    fn card(value: i64) -> String {
        speller().to_cardinal(value).unwrap()
    }

    fn card_dec(mantissa: i64, scale: u32) -> String {
        speller().to_cardinal(Decimal::new(mantissa, scale)).unwrap()
    }

    #[test]
    fn test_basic_vocabulary() {
        assert_eq!(card(1), "rimwe");
        assert_eq!(card(2), "kabiri");
        assert_eq!(card(3), "gatatu");
        assert_eq!(card(11), "cumi na rimwe");
        assert_eq!(card(12), "cumi na kabiri");
        assert_eq!(card(16), "cumi na gatandatu");
        assert_eq!(card(20), "makumyabiri");
        assert_eq!(card(30), "mirongo itatu");
        assert_eq!(card(100), "ijana");
        assert_eq!(card(1000), "igihumbi");
        assert_eq!(card(1_000_000), "miriyoni");
    }

    #[test]
    fn test_tens_and_units() {
        assert_eq!(card(21), "makumyabiri na rimwe");
        assert_eq!(card(26), "makumyabiri na gatandatu");
        assert_eq!(card(28), "makumyabiri n' umunani");
        assert_eq!(card(31), "mirongo itatu na rimwe");
        assert_eq!(card(44), "mirongo ine na kane");
        assert_eq!(card(67), "mirongo itandatu na karindwi");
        assert_eq!(card(79), "mirongo irindwi n' icyenda");
        assert_eq!(card(89), "mirongo inani n' icyenda");
        assert_eq!(card(95), "mirongo icyenda na gatanu");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(card(101), "ijana na rimwe");
        assert_eq!(card(199), "ijana na mirongo icyenda n' icyenda");
        assert_eq!(card(203), "kabiri n' ijana na gatatu");
        assert_eq!(card(400), "kane n' ijana");
        assert_eq!(card(999), "icyenda n' ijana na mirongo icyenda n' icyenda");
    }

    #[test]
    fn test_thousands_and_scales() {
        assert_eq!(card(1001), "igihumbi na rimwe");
        assert_eq!(card(1097), "igihumbi na mirongo icyenda na karindwi");
        assert_eq!(card(1104), "igihumbi n' ijana na kane");
        assert_eq!(
            card(2385),
            "kabiri n' igihumbi na gatatu n' ijana na mirongo inani na gatanu"
        );
        assert_eq!(card(1_000_001), "miriyoni na rimwe");
        assert_eq!(card(4_000_000), "kane na miriyoni");
        assert_eq!(
            card(4_300_000),
            "kane na miriyoni na gatatu n' ijana n' igihumbi"
        );
        assert_eq!(card(10_000_000_000_000), "icumi na tiriyoni");
        assert_eq!(card(10_000_000_000_010), "icumi na tiriyoni n' icumi");
        assert_eq!(card(1_000_000_000_000_000_000), "kwintiliyoni");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(card_dec(55, 1), "gatanu n' ibice gatanu");
        assert_eq!(
            card_dec(1742, 2),
            "cumi na karindwi n' ibice mirongo ine na kabiri"
        );
        assert_eq!(
            card_dec(27312, 3),
            "makumyabiri na karindwi n' ibice gatatu n' ijana na cumi na kabiri"
        );
        assert_eq!(
            card_dec(30042, 2),
            "gatatu n' ijana n' ibice mirongo ine na kabiri"
        );
        assert_eq!(card_dec(105, 2), "rimwe n' ibice zeru gatanu");
        assert_eq!(card_dec(550, 2), card_dec(55, 1));
        assert_eq!(card_dec(300, 2), "gatatu");
    }

    #[test]
    fn test_negative() {
        assert_eq!(card(-3), "munsi ya zeru gatatu");
        assert_eq!(card_dec(-5, 1), "munsi ya zeru zeru n' ibice gatanu");
        assert_eq!(card(0), "zeru");
    }

    #[test]
    fn test_unsupported_magnitude() {
        let s = speller();
        let limit = 10u128.pow(36);
        assert!(s.to_cardinal_int(limit - 1).is_ok());
        assert_eq!(
            s.to_cardinal_int(limit),
            Err(SpellError::UnsupportedMagnitude { value: limit, limit })
        );

        let small = NumberSpeller::new(
            LocaleConfig::kinyarwanda().with_scale_roots(Vec::<String>::new()),
        )
        .unwrap();
        assert!(small.to_cardinal(999_999).is_ok());
        assert_eq!(
            small.to_cardinal(1_000_000),
            Err(SpellError::UnsupportedMagnitude {
                value: 1_000_000,
                limit: 1_000_000
            })
        );
    }

    #[test]
    fn test_spell_dispatch() {
        let s = speller();
        let seven = Decimal::from(7);
        assert_eq!(s.spell(seven, Representation::Cardinal).unwrap(), "karindwi");
        assert_eq!(s.spell(seven, Representation::Ordinal).unwrap(), "uwa karindwi");
        assert_eq!(s.spell(seven, Representation::OrdinalNumeral).unwrap(), "uwa 7");
        assert_eq!(
            s.spell(Decimal::from(1990), Representation::Year { suffix: None })
                .unwrap(),
            "cumi n'icyenda mirongo icyenda"
        );
        assert_eq!(
            s.spell(seven, Representation::Currency { code: "USD" }).unwrap(),
            "amadolari karindwi n' amasenti zeru"
        );
        assert!(matches!(
            s.spell(Decimal::new(19905, 1), Representation::Year { suffix: None }),
            Err(SpellError::DomainValidation { .. })
        ));
    }

    #[test]
    fn test_title() {
        let s = speller();
        assert_eq!(s.title("cumi na rimwe"), "Cumi na Rimwe");
        assert_eq!(
            s.title("gatanu n' ibice gatanu"),
            "Gatanu N' ibice Gatanu"
        );
        assert_eq!(s.title("munsi ya zeru gatatu"), "munsi ya Zeru Gatatu");
    }

    #[test]
    fn test_accessors() {
        let s = speller();
        assert_eq!(s.decomposer_name(), "PlaceValue");
        assert_eq!(s.limit(), 10u128.pow(36));
        assert_eq!(s.config().negative_word, "munsi ya zeru");
        assert_eq!(s.word_table().get(100), Some("ijana"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LocaleConfig::kinyarwanda().with_decimal_word("");
        assert!(NumberSpeller::new(config).is_err());
    }
}
