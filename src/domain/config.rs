// ============================================================================
// Locale Configuration
// Immutable vocabulary and wording rules for one target language
// ============================================================================

use super::currency::CurrencyForm;
use super::fragment::Connective;
use super::scale::MAX_SCALE_ROOTS;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Year Wording
// ============================================================================

/// Literal words used by the year reading.
///
/// The defaults are English fillers ("hundred", "oh-") and the "BC"
/// suffix rather than Kinyarwanda words. Override them once a native
/// speaker confirms the wording.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearConfig {
    /// Read in place of the last two digits when they are `00` (1900)
    pub round_century_word: String,
    /// Prefixed to the last digit when the last two digits are `01`-`09`
    pub leading_zero_prefix: String,
    /// Suffix for negative years when the caller gives none
    pub negative_suffix: String,
}

impl Default for YearConfig {
    fn default() -> Self {
        Self {
            round_century_word: "hundred".to_string(),
            leading_zero_prefix: "oh-".to_string(),
            negative_suffix: "BC".to_string(),
        }
    }
}

// ============================================================================
// Complete Locale Configuration
// ============================================================================

/// Everything a [`NumberSpeller`](crate::engine::NumberSpeller) needs to
/// know about the target language.
///
/// Constructed once and shared read-only; nothing mutates it after a
/// speller has been built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleConfig {
    /// Prefix for negative values ("munsi ya zeru")
    pub negative_word: String,

    /// Joins the integer and fractional readings ("n' ibice")
    pub decimal_word: String,

    /// Tokens left lowercase by title casing
    pub title_exclusions: Vec<String>,

    /// Joins two fragments ("na" / "n'")
    pub conjunction: Connective,

    /// Prefix for ordinals ("uwa" / "uw'")
    pub ordinal_marker: Connective,

    /// Irregular stem for the first ordinal ("mbere")
    pub first_ordinal_stem: String,

    /// Cardinal text -> irregular ordinal reading
    pub ordinal_exceptions: BTreeMap<String, String>,

    /// Upper-case currency code -> unit and subunit words
    pub currency_forms: BTreeMap<String, CurrencyForm>,

    /// Words for 0, 1, 2, ... in order (index == value)
    pub low_words: Vec<String>,

    /// Round values above the low tier: tens, hundred, thousand
    pub mid_words: Vec<(u64, String)>,

    /// Scale roots, largest magnitude first
    pub scale_roots: Vec<String>,

    /// Appended to every scale root ("iyoni")
    pub scale_suffix: String,

    /// Year reading fillers
    pub year: YearConfig,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl LocaleConfig {
    /// Kinyarwanda vocabulary.
    pub fn kinyarwanda() -> Self {
        let low_words = owned(&[
            "zeru",
            "rimwe",
            "kabiri",
            "gatatu",
            "kane",
            "gatanu",
            "gatandatu",
            "karindwi",
            "umunani",
            "icyenda",
            "icumi",
            "cumi na rimwe",
            "cumi na kabiri",
            "cumi na gatatu",
            "cumi na kane",
            "cumi na gatanu",
            "cumi na gatandatu",
            "cumi na karindwi",
            "cumi n'umunani",
            "cumi n'icyenda",
            "makumyabiri",
        ]);

        let mid_words = [
            (1000, "igihumbi"),
            (100, "ijana"),
            (90, "mirongo icyenda"),
            (80, "mirongo inani"),
            (70, "mirongo irindwi"),
            (60, "mirongo itandatu"),
            (50, "mirongo itanu"),
            (40, "mirongo ine"),
            (30, "mirongo itatu"),
        ]
        .iter()
        .map(|(value, word)| (*value, word.to_string()))
        .collect();

        let ordinal_exceptions = [
            ("rimwe", "uwa mbere"),
            ("kabiri", "uwa kabiri"),
            ("gatatu", "uwa gatatu"),
            ("kane", "uwa kane"),
            ("gatanu", "uwa gatanu"),
            ("gatandatu", "uwa gatandatu"),
            ("karindwi", "uwa karindwi"),
            ("umunani", "uwa munani"),
            ("icyenda", "uwa cyenda"),
            ("icumi", "uwa cumi"),
            ("cumi na rimwe", "uwa cumi na rimwe"),
            ("cumi na kabiri", "uwa cumi na kabiri"),
        ]
        .iter()
        .map(|(cardinal, ordinal)| (cardinal.to_string(), ordinal.to_string()))
        .collect();

        let currency_forms = [
            ("EUR", CurrencyForm::new(("iyero", "amayero"), ("igice", "ibice"))),
            ("USD", CurrencyForm::new(("idolari", "amadolari"), ("senti", "amasenti"))),
            ("RWF", CurrencyForm::new(("ifaranga", "amafaranga"), ("igice", "ibice"))),
        ]
        .into_iter()
        .map(|(code, form)| (code.to_string(), form))
        .collect();

        Self {
            negative_word: "munsi ya zeru".to_string(),
            decimal_word: "n' ibice".to_string(),
            title_exclusions: owned(&["na", "ibice", "munsi", "ya"]),
            conjunction: Connective::new("na", "n'"),
            ordinal_marker: Connective::new("uwa", "uw'"),
            first_ordinal_stem: "mbere".to_string(),
            ordinal_exceptions,
            currency_forms,
            low_words,
            mid_words,
            scale_roots: owned(&[
                "desil", "nonil", "okitil", "sepitil", "sekisitil", "kwintil", "kwadir", "tir",
                "bir", "mir",
            ]),
            scale_suffix: "iyoni".to_string(),
            year: YearConfig::default(),
        }
    }

    /// Builder method: Set the negation word
    pub fn with_negative_word(mut self, word: impl Into<String>) -> Self {
        self.negative_word = word.into();
        self
    }

    /// Builder method: Set the decimal-point word
    pub fn with_decimal_word(mut self, word: impl Into<String>) -> Self {
        self.decimal_word = word.into();
        self
    }

    /// Builder method: Replace the title-case exclusions
    pub fn with_title_exclusions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_exclusions = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Register (or replace) a currency
    pub fn with_currency(mut self, code: impl Into<String>, form: CurrencyForm) -> Self {
        self.currency_forms
            .insert(code.into().trim().to_ascii_uppercase(), form);
        self
    }

    /// Builder method: Add an irregular ordinal keyed by cardinal text
    pub fn with_ordinal_exception(
        mut self,
        cardinal: impl Into<String>,
        ordinal: impl Into<String>,
    ) -> Self {
        self.ordinal_exceptions.insert(cardinal.into(), ordinal.into());
        self
    }

    /// Builder method: Replace the scale roots (largest first)
    pub fn with_scale_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scale_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Set the scale suffix
    pub fn with_scale_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.scale_suffix = suffix.into();
        self
    }

    /// Builder method: Set the year fillers
    pub fn with_year(mut self, year: YearConfig) -> Self {
        self.year = year;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.negative_word.trim().is_empty() {
            return Err("Negative word cannot be empty".to_string());
        }
        if self.decimal_word.trim().is_empty() {
            return Err("Decimal word cannot be empty".to_string());
        }

        for (name, connective) in [
            ("Conjunction", &self.conjunction),
            ("Ordinal marker", &self.ordinal_marker),
        ] {
            if connective.full.is_empty() || connective.elided.is_empty() {
                return Err(format!("{} needs both a full and an elided form", name));
            }
        }

        if self.first_ordinal_stem.is_empty() {
            return Err("First ordinal stem cannot be empty".to_string());
        }

        // Zero through nine are needed for every multiplier and remainder
        if self.low_words.len() < 10 {
            return Err("Low words must cover at least zero through nine".to_string());
        }
        if self.low_words.iter().any(|w| w.is_empty()) {
            return Err("Low words cannot be empty".to_string());
        }

        let low_count = self.low_words.len() as u64;
        for (value, word) in &self.mid_words {
            if *value < low_count || *value >= 1_000_000 {
                return Err(format!(
                    "Mid word value {} must lie between the low tier and a million",
                    value
                ));
            }
            if word.is_empty() {
                return Err(format!("Mid word for {} cannot be empty", value));
            }
        }

        // Multipliers above a sub-hundred word would merge additively
        for tens in (10..100u64).step_by(10) {
            let covered = tens < low_count || self.mid_words.iter().any(|(v, _)| *v == tens);
            if !covered {
                return Err(format!(
                    "No word for {}: every multiple of ten below a hundred needs one",
                    tens
                ));
            }
        }

        if self.scale_roots.len() > MAX_SCALE_ROOTS {
            return Err(format!(
                "At most {} scale roots are supported",
                MAX_SCALE_ROOTS
            ));
        }
        if self.scale_roots.iter().any(|r| r.is_empty()) {
            return Err("Scale roots cannot be empty".to_string());
        }

        for code in self.currency_forms.keys() {
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(format!(
                    "Currency code {:?} must be upper-case ASCII letters",
                    code
                ));
            }
        }

        Ok(())
    }

    /// Load a configuration from JSON and validate it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::kinyarwanda()
    }
}
