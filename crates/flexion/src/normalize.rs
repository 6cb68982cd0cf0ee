//! Canonical lookup-key normalization for page titles.

use unicode_normalization::UnicodeNormalization;

/// Map an arbitrary title to its canonical lookup key.
///
/// Applies Unicode canonical decomposition, discards every non-ASCII code
/// point, and lowercases with the locale-independent ASCII rule. The
/// function is pure and idempotent; accented variants of a word that reduce
/// to the same ASCII skeleton map to the same key.
///
/// # Example
///
/// ```
/// use flexion::normalize_title;
///
/// assert_eq!(normalize_title("Käse"), "kase");
/// assert_eq!(normalize_title("kase"), "kase");
/// ```
pub fn normalize_title(title: &str) -> String {
    title
        .nfd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
