// ============================================================================
// Currency Forms
// Singular/plural unit and subunit words per currency code
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A noun with its singular and plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NounForms {
    pub singular: String,
    pub plural: String,
}

impl NounForms {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Singular for exactly one, plural otherwise (zero included).
    #[inline]
    pub fn for_count(&self, count: u128) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Words for one currency: the main unit and its hundredth subunit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyForm {
    pub unit: NounForms,
    pub subunit: NounForms,
}

impl CurrencyForm {
    /// Build from `(singular, plural)` pairs.
    ///
    /// # Example
    /// ```
    /// use numwords_rw::domain::CurrencyForm;
    ///
    /// let euro = CurrencyForm::new(("iyero", "amayero"), ("igice", "ibice"));
    /// assert_eq!(euro.unit.for_count(2), "amayero");
    /// ```
    pub fn new(unit: (&str, &str), subunit: (&str, &str)) -> Self {
        Self {
            unit: NounForms::new(unit.0, unit.1),
            subunit: NounForms::new(subunit.0, subunit.1),
        }
    }
}

/// How the subunit amount is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubunitStyle {
    /// Spelled as a cardinal (`ibice makumyabiri`)
    #[default]
    Words,
    /// Two zero-padded digits (`ibice 05`)
    Digits,
}

/// Layout of a currency reading.
///
/// # Example
/// ```
/// use numwords_rw::domain::{CurrencyFormat, SubunitStyle};
///
/// let format = CurrencyFormat::new()
///     .with_subunits(SubunitStyle::Digits)
///     .with_separator(",");
/// assert_eq!(format.separator.as_deref(), Some(","));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyFormat {
    pub subunits: SubunitStyle,
    /// Written right after the unit group in place of the conjunction
    pub separator: Option<String>,
}

impl CurrencyFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set how subunits are written
    pub fn with_subunits(mut self, subunits: SubunitStyle) -> Self {
        self.subunits = subunits;
        self
    }

    /// Builder method: Separate the groups with `separator`
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}
