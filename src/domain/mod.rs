// ============================================================================
// Domain Models Module
// Value objects, vocabulary tables and locale configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod fragment;
pub mod scale;
pub mod word_table;

pub use config::{LocaleConfig, YearConfig};
pub use currency::{CurrencyForm, CurrencyFormat, NounForms, SubunitStyle};
pub use fragment::{starts_with_vowel, Connective, Fragment, VOWELS};
pub use scale::{generate_scale_words, ScaleWords, MAX_SCALE_ROOTS};
pub use word_table::WordTable;
