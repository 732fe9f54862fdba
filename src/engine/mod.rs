// ============================================================================
// Engine Module
// Contains the number spelling business logic
// ============================================================================

mod currency;
mod merge;
mod ordinal;
mod place_value;
mod speller;
mod year;

pub mod factory;

pub use factory::{create_from_config, NumberSpellerBuilder};
pub use merge::{FragmentMerger, MergeRule};
pub use place_value::PlaceValueDecomposer;
pub use speller::{NumberSpeller, Representation};
