// ============================================================================
// Year Formatter
// Reads years as two two-digit halves where that is natural
// ============================================================================

use crate::engine::speller::NumberSpeller;
use crate::numeric::SpellResult;
use chrono::Datelike;

impl NumberSpeller {
    /// Year reading of `value`, with an optional era suffix.
    ///
    /// Four-digit years are read as two halves (`19|90`). Years below 100,
    /// years of 10000 or more and round decades of a round century (2000,
    /// 2005) fall back to the cardinal reading. Negative years take the
    /// configured negative suffix unless `suffix` is given. A blank suffix
    /// counts as none.
    ///
    /// # Example
    /// ```
    /// use numwords_rw::prelude::*;
    ///
    /// let speller = NumberSpeller::kinyarwanda();
    /// assert_eq!(
    ///     speller.to_year(1990, None).unwrap(),
    ///     "cumi n'icyenda mirongo icyenda"
    /// );
    /// ```
    pub fn to_year(&self, value: i64, suffix: Option<&str>) -> SpellResult<String> {
        let year = &self.config.year;
        let suffix = suffix.filter(|s| !s.trim().is_empty());
        let suffix = if value < 0 {
            suffix.or(Some(year.negative_suffix.as_str()))
        } else {
            suffix
        };

        let value = u128::from(value.unsigned_abs());
        let (high, low) = (value / 100, value % 100);

        let text = if high == 0 || (high % 10 == 0 && low < 10) || high >= 100 {
            self.to_cardinal_int(value)?
        } else {
            let low_text = match low {
                0 => year.round_century_word.clone(),
                1..=9 => format!("{}{}", year.leading_zero_prefix, self.to_cardinal_int(low)?),
                _ => self.to_cardinal_int(low)?,
            };
            format!("{} {}", self.to_cardinal_int(high)?, low_text)
        };

        Ok(match suffix {
            Some(suffix) => format!("{} {}", text, suffix),
            None => text,
        })
    }

    /// Year reading of the year component of `date`.
    pub fn to_year_of<D: Datelike>(&self, date: &D, suffix: Option<&str>) -> SpellResult<String> {
        self.to_year(i64::from(date.year()), suffix)
    }
}
