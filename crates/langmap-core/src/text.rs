// crates/langmap-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte` -> `Cote`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use langmap_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("FRANCE"), "france");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use langmap_core::text::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(!equals_folded("Chad", "Chile"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Parses an optional coordinate string into an `f64`.
///
/// Whitespace is trimmed. Blank, unparseable and non-finite values yield
/// `None`.
pub fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Returns `Some(trimmed)` when the input has visible content.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}
