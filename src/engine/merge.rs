// ============================================================================
// Fragment Merger
// Pairwise composition of number-word fragments
// ============================================================================

use crate::domain::{Connective, Fragment};

/// Value below which a fragment counts as a plain remainder
const HUNDRED: u128 = 100;

/// Which composition rule applies to a pair of fragment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// A bare multiplier of one before a sub-hundred quantity is dropped
    UnitElision,
    /// Both below a hundred, left larger (tens plus units)
    TensAndUnits,
    /// Left at least a hundred, right below a hundred
    HundredsAndRemainder,
    /// Right is a larger scale than the left multiplier
    Multiplicative,
    /// Anything else adds up
    Additive,
}

impl MergeRule {
    pub fn select(lnum: u128, rnum: u128) -> Self {
        if lnum == 1 && rnum < HUNDRED {
            MergeRule::UnitElision
        } else if lnum < HUNDRED && rnum < HUNDRED && lnum > rnum {
            MergeRule::TensAndUnits
        } else if lnum >= HUNDRED && rnum < HUNDRED {
            MergeRule::HundredsAndRemainder
        } else if rnum > lnum {
            MergeRule::Multiplicative
        } else {
            MergeRule::Additive
        }
    }
}

/// Combines two fragments into one phrase and one value.
///
/// The conjunction is chosen from the first letter of the right-hand text:
/// the elided form before a vowel, the full form otherwise. Composition
/// rules, first match wins:
///
/// 1. left is one and right is below a hundred: right unchanged
/// 2. both below a hundred, left larger: sum
/// 3. left at least a hundred, right below a hundred: sum
/// 4. right larger than left: product
/// 5. otherwise: sum
///
/// Every rule except the first joins the texts with the conjunction,
/// including the multiplicative one (`kabiri n' igihumbi` is 2000).
///
/// # Example
/// ```text
/// makumyabiri (20) + umunani (8)   -> makumyabiri n' umunani (28)
/// kabiri (2)       + igihumbi (1000) -> kabiri n' igihumbi (2000)
/// rimwe (1)        + gatanu (5)    -> gatanu (5)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentMerger {
    conjunction: Connective,
}

impl FragmentMerger {
    pub fn new(conjunction: Connective) -> Self {
        Self { conjunction }
    }

    /// Merge `left` and `right` into a new fragment.
    pub fn merge(&self, left: Fragment, right: Fragment) -> Fragment {
        let (lnum, rnum) = (left.value(), right.value());

        let value = match MergeRule::select(lnum, rnum) {
            MergeRule::UnitElision => return right,
            MergeRule::Multiplicative => lnum.saturating_mul(rnum),
            MergeRule::TensAndUnits | MergeRule::HundredsAndRemainder | MergeRule::Additive => {
                lnum + rnum
            },
        };

        let text = format!(
            "{} {} {}",
            left.text(),
            self.conjunction.before(right.text()),
            right.text()
        );

        Fragment::new(text, value)
    }

    /// Left fold of `fragments` through [`merge`](Self::merge).
    ///
    /// Returns `None` for an empty sequence.
    pub fn fold<I>(&self, fragments: I) -> Option<Fragment>
    where
        I: IntoIterator<Item = Fragment>,
    {
        fragments
            .into_iter()
            .reduce(|acc, next| self.merge(acc, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn merger() -> FragmentMerger {
        FragmentMerger::new(Connective::new("na", "n'"))
    }

    fn frag(text: &str, value: u128) -> Fragment {
        Fragment::new(text, value)
    }

    #[test]
    fn test_rule_selection() {
        assert_eq!(MergeRule::select(1, 5), MergeRule::UnitElision);
        assert_eq!(MergeRule::select(20, 8), MergeRule::TensAndUnits);
        assert_eq!(MergeRule::select(100, 99), MergeRule::HundredsAndRemainder);
        assert_eq!(MergeRule::select(3, 100), MergeRule::Multiplicative);
        assert_eq!(MergeRule::select(1, 1000), MergeRule::Multiplicative);
        assert_eq!(MergeRule::select(2000, 300), MergeRule::Additive);
        assert_eq!(MergeRule::select(5, 5), MergeRule::Additive);
    }

    #[test]
    fn test_unit_elision() {
        let right = frag("gatanu", 5);
        assert_eq!(merger().merge(frag("rimwe", 1), right.clone()), right);

        let zero = frag("zeru", 0);
        assert_eq!(merger().merge(frag("rimwe", 1), zero.clone()), zero);
    }

    #[test]
    fn test_unit_before_hundred_is_kept() {
        let merged = merger().merge(frag("rimwe", 1), frag("ijana", 100));
        assert_eq!(merged.text(), "rimwe n' ijana");
        assert_eq!(merged.value(), 100);
    }

    #[test]
    fn test_tens_plus_units() {
        let merged = merger().merge(frag("makumyabiri", 20), frag("umunani", 8));
        assert_eq!(merged.text(), "makumyabiri n' umunani");
        assert_eq!(merged.value(), 28);

        let merged = merger().merge(frag("mirongo itatu", 30), frag("rimwe", 1));
        assert_eq!(merged.text(), "mirongo itatu na rimwe");
        assert_eq!(merged.value(), 31);
    }

    #[test]
    fn test_hundreds_plus_remainder() {
        let merged = merger().merge(frag("ijana", 100), frag("mirongo icyenda", 90));
        assert_eq!(merged.text(), "ijana na mirongo icyenda");
        assert_eq!(merged.value(), 190);
    }

    #[test]
    fn test_multiplicative_keeps_conjunction() {
        let merged = merger().merge(frag("kabiri", 2), frag("igihumbi", 1000));
        assert_eq!(merged.text(), "kabiri n' igihumbi");
        assert_eq!(merged.value(), 2000);

        let merged = merger().merge(frag("kane", 4), frag("miriyoni", 1_000_000));
        assert_eq!(merged.text(), "kane na miriyoni");
        assert_eq!(merged.value(), 4_000_000);
    }

    #[test]
    fn test_fallback_additive() {
        let merged = merger().merge(frag("igihumbi", 1000), frag("ijana", 100));
        assert_eq!(merged.text(), "igihumbi n' ijana");
        assert_eq!(merged.value(), 1100);

        // equal values below a hundred fall through every earlier rule
        let merged = merger().merge(frag("gatanu", 5), frag("gatanu", 5));
        assert_eq!(merged.value(), 10);
    }

    #[test]
    fn test_fold() {
        let fragments = vec![
            frag("igihumbi", 1000),
            frag("ijana", 100),
            frag("kane", 4),
        ];
        let folded = merger().fold(fragments).unwrap();
        assert_eq!(folded.text(), "igihumbi n' ijana na kane");
        assert_eq!(folded.value(), 1104);

        assert_eq!(merger().fold(Vec::new()), None);
        assert_eq!(
            merger().fold(vec![frag("rimwe", 1)]),
            Some(frag("rimwe", 1))
        );
    }

    fn word() -> impl Strategy<Value = String> {
        "[a-z][a-z' ]{0,12}"
    }

    proptest! {
        #[test]
        fn prop_exactly_one_conjunction(
            ltext in word(),
            rtext in word(),
            lnum in 0u128..1_000_000,
            rnum in 0u128..1_000_000,
        ) {
            prop_assume!(!(lnum == 1 && rnum < HUNDRED));

            let merged = merger().merge(frag(&ltext, lnum), frag(&rtext, rnum));
            let expected_conjunction = if "aeiou".contains(&rtext[..1]) { "n'" } else { "na" };
            let expected = format!("{} {} {}", ltext, expected_conjunction, rtext);
            prop_assert_eq!(merged.text(), expected.as_str());
        }

        #[test]
        fn prop_merge_is_deterministic(lnum in 0u128..10_000, rnum in 0u128..10_000) {
            let a = merger().merge(frag("kabiri", lnum), frag("ijana", rnum));
            let b = merger().merge(frag("kabiri", lnum), frag("ijana", rnum));
            prop_assert_eq!(a, b);
        }
    }
}
