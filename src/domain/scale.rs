// ============================================================================
// Scale Word Generator
// Synthesizes power-of-thousand words from short roots
// ============================================================================

use arrayvec::ArrayVec;

/// Most scale roots a table can hold.
///
/// Ten roots reach 10^33; the spelling limit (1000 × the highest word)
/// is then 10^36, the largest power of a thousand that fits a `u128`.
pub const MAX_SCALE_ROOTS: usize = 10;

/// Generated `(10^n, word)` pairs, highest power first
pub type ScaleWords = ArrayVec<(u128, String), MAX_SCALE_ROOTS>;

/// Generate scale words from `roots`, largest magnitude first.
///
/// For `k` roots the powers run from `10^(3 + 3k)` down to `10^6` in steps
/// of three; each word is `root + suffix`. No roots yield no words.
///
/// # Errors
/// Returns an error if more than [`MAX_SCALE_ROOTS`] roots are given.
///
/// # Example
/// ```
/// use numwords_rw::domain::generate_scale_words;
///
/// let words = generate_scale_words(&["bir", "mir"], "iyoni").unwrap();
/// assert_eq!(words[0], (1_000_000_000, "biriyoni".to_string()));
/// assert_eq!(words[1], (1_000_000, "miriyoni".to_string()));
/// ```
pub fn generate_scale_words<S: AsRef<str>>(roots: &[S], suffix: &str) -> Result<ScaleWords, String> {
    if roots.len() > MAX_SCALE_ROOTS {
        return Err(format!(
            "At most {} scale roots are supported, got {}",
            MAX_SCALE_ROOTS,
            roots.len()
        ));
    }

    let highest = 3 + 3 * roots.len() as u32;
    let mut words = ScaleWords::new();
    for (root, exponent) in roots.iter().zip((6..=highest).rev().step_by(3)) {
        words.push((10u128.pow(exponent), format!("{}{}", root.as_ref(), suffix)));
    }

    Ok(words)
}
