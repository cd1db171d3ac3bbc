// crates/travelbloom-core/src/text.rs

/// How names and search terms are normalized before they are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Folding {
    /// Lower-case only. `"Kyōto"` stays `"kyōto"`.
    #[default]
    Lowercase,
    /// Transliterate to ASCII, then lower-case. `"Kyōto"` becomes `"kyoto"`.
    Accents,
}

impl Folding {
    pub fn fold(self, s: &str) -> String {
        match self {
            Folding::Lowercase => s.to_lowercase(),
            Folding::Accents => fold_key(s),
        }
    }
}

/// Convert a string into a folded key suitable for accent-insensitive
/// comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```
/// use travelbloom_core::text::fold_key;
///
/// assert_eq!(fold_key("Kyōto"), "kyoto");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Trim and lower-case a raw search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_keeps_diacritics() {
        assert_eq!(Folding::Lowercase.fold("KYŌTO"), "kyōto");
    }

    #[test]
    fn accents_transliterate() {
        assert_eq!(Folding::Accents.fold("Zürich"), "zurich");
        assert_eq!(Folding::Accents.fold("Łódź"), "lodz");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_term("  Beaches \t"), "beaches");
        assert_eq!(normalize_term("   "), "");
    }
}
