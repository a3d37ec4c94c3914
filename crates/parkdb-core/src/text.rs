// crates/parkdb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Ngorongoro Çrater` -> `Ngorongoro Crater`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so park names with diacritics can
/// still be matched from an ASCII search box.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// Returns `true` if both strings are equal after [`fold_key`], `false`
/// otherwise. This enables matching strings that differ only in diacritics
/// or case.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_lowercases_and_strips_accents() {
        assert_eq!(fold_key("Serengeti"), "serengeti");
        assert_eq!(fold_key("Maasai Mará"), "maasai mara");
    }

    #[test]
    fn equals_folded_ignores_case() {
        assert!(equals_folded("KENYA", "kenya"));
        assert!(!equals_folded("Kenya", "Uganda"));
    }
}
