// ============================================================================
// Currency Formatter
// Money amounts with unit and subunit nouns
// ============================================================================

use crate::domain::{CurrencyFormat, SubunitStyle};
use crate::engine::speller::NumberSpeller;
use crate::numeric::{CurrencyParts, SpellError, SpellResult};
use rust_decimal::Decimal;

impl NumberSpeller {
    /// Spell a money amount in `currency_code`.
    ///
    /// The amount is rounded half away from zero to whole subunits. Nouns
    /// precede their numbers, and the conjunction before the subunit noun
    /// follows the usual vowel rule:
    /// `iyero rimwe n' ibice zeru`, `amadolari kabiri na senti rimwe`.
    ///
    /// # Errors
    /// Returns `UnsupportedCurrency` if no forms are registered for the code.
    pub fn to_currency(
        &self,
        amount: impl Into<Decimal>,
        currency_code: &str,
    ) -> SpellResult<String> {
        self.to_currency_with(amount, currency_code, &CurrencyFormat::default())
    }

    /// Like [`to_currency`](Self::to_currency), with the subunit style and
    /// group separator taken from `format`.
    ///
    /// A separator replaces the conjunction and follows the unit group
    /// directly: `amayero gatanu, ibice zeru`.
    pub fn to_currency_with(
        &self,
        amount: impl Into<Decimal>,
        currency_code: &str,
        format: &CurrencyFormat,
    ) -> SpellResult<String> {
        let code = currency_code.trim().to_ascii_uppercase();
        let form = match self.config.currency_forms.get(&code) {
            Some(form) => form,
            None => {
                tracing::debug!(code = %currency_code, "no currency forms registered");
                return Err(SpellError::UnsupportedCurrency {
                    code: currency_code.to_string(),
                });
            },
        };

        let money = CurrencyParts::split(amount.into());

        let unit = form.unit.for_count(money.units);
        let subunit = form.subunit.for_count(money.subunits);
        let units_text = self.to_cardinal_int(money.units)?;
        let subunits_text = match format.subunits {
            SubunitStyle::Words => self.to_cardinal_int(money.subunits)?,
            SubunitStyle::Digits => format!("{:02}", money.subunits),
        };

        let text = match &format.separator {
            Some(separator) => format!(
                "{} {}{} {} {}",
                unit, units_text, separator, subunit, subunits_text
            ),
            None => format!(
                "{} {} {} {} {}",
                unit,
                units_text,
                self.config.conjunction.before(subunit),
                subunit,
                subunits_text
            ),
        };

        if money.negative {
            Ok(format!("{} {}", self.config.negative_word, text))
        } else {
            Ok(text)
        }
    }
}
