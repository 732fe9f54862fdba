// ============================================================================
// Number Decomposer Interface
// Defines the contract for splitting integers into place-value fragments
// ============================================================================

use crate::domain::Fragment;
use crate::numeric::SpellResult;
use smallvec::SmallVec;

/// Fragments of one decomposition, highest place value first
pub type Fragments = SmallVec<[Fragment; 8]>;

/// Strategy interface for integer decomposition.
///
/// The speller holds one implementation and folds whatever it returns
/// left to right through the fragment merger, so implementations decide
/// how words are grouped while the merger decides how they are joined.
pub trait NumberDecomposer: Send + Sync {
    /// Split `value` into fragments ordered by descending place value.
    ///
    /// # Errors
    /// Returns `UnsupportedMagnitude` when `value` needs a scale word the
    /// vocabulary does not have.
    fn decompose(&self, value: u128) -> SpellResult<Fragments>;

    /// Get the decomposer name for logging
    fn name(&self) -> &str;
}
