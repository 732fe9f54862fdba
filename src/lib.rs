// ============================================================================
// Number Words Library
// Kinyarwanda number verbalization with a pluggable decomposition engine
// ============================================================================

//! # numwords-rw
//!
//! Converts numbers into Kinyarwanda words.
//!
//! ## Features
//!
//! - **Cardinal readings** of integers and exact decimals, with negation
//! - **Ordinal readings** with irregular stems and vowel elision
//! - **Year readings** split into two-digit halves
//! - **Currency readings** with singular/plural unit and subunit nouns
//! - **Pluggable decomposition** behind the [`NumberDecomposer`](interfaces::NumberDecomposer) trait
//! - **Immutable vocabulary**, so one speller can serve many threads
//!
//! ## Example
//!
//! ```rust
//! use numwords_rw::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let speller = NumberSpeller::kinyarwanda();
//!
//! assert_eq!(speller.to_cardinal(203).unwrap(), "kabiri n' ijana na gatatu");
//! assert_eq!(
//!     speller.to_cardinal(Decimal::new(1742, 2)).unwrap(),
//!     "cumi na karindwi n' ibice mirongo ine na kabiri"
//! );
//! assert_eq!(speller.to_ordinal(8).unwrap(), "uwa munani");
//! assert_eq!(speller.to_ordinal_num(21).unwrap(), "uwa 21");
//! assert_eq!(speller.to_year(1905, None).unwrap(), "cumi n'icyenda oh-gatanu");
//! assert_eq!(
//!     speller.to_currency(Decimal::new(100, 2), "EUR").unwrap(),
//!     "iyero rimwe n' ibice zeru"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Connective, CurrencyForm, CurrencyFormat, Fragment, LocaleConfig, NounForms, SubunitStyle,
        WordTable, YearConfig,
    };
    pub use crate::engine::{
        create_from_config, FragmentMerger, MergeRule, NumberSpeller, NumberSpellerBuilder,
        PlaceValueDecomposer, Representation,
    };
    pub use crate::interfaces::{Fragments, NumberDecomposer};
    pub use crate::numeric::{SpellError, SpellResult};
}
