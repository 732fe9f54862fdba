// ============================================================================
// Fragment Value Object
// A phrase paired with the quantity it denotes
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vowels that trigger the elided form of a connective word
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Returns true when `text` begins with one of [`VOWELS`].
///
/// Empty text never starts with a vowel.
#[inline]
pub fn starts_with_vowel(text: &str) -> bool {
    text.chars().next().is_some_and(|c| VOWELS.contains(&c))
}

/// A partially spelled number: the words and the value they stand for.
///
/// Fragments are immutable. Merging two fragments produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: String,
    value: u128,
}

impl Fragment {
    pub fn new(text: impl Into<String>, value: u128) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn value(&self) -> u128 {
        self.value
    }

    #[inline]
    pub fn starts_with_vowel(&self) -> bool {
        starts_with_vowel(&self.text)
    }

    /// Consume the fragment, keeping only its words.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.value)
    }
}

// ============================================================================
// Connective Words
// ============================================================================

/// A linking word with a full and a vowel-elided form.
///
/// Used for the conjunction between fragments (`na` / `n'`) and for the
/// ordinal marker (`uwa` / `uw'`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Connective {
    pub full: String,
    pub elided: String,
}

impl Connective {
    pub fn new(full: impl Into<String>, elided: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            elided: elided.into(),
        }
    }

    /// The form to use in front of `next`.
    #[inline]
    pub fn before(&self, next: &str) -> &str {
        if starts_with_vowel(next) {
            &self.elided
        } else {
            &self.full
        }
    }

    /// `next` prefixed with the matching form and a space.
    pub fn prefix(&self, next: &str) -> String {
        format!("{} {}", self.before(next), next)
    }
}
