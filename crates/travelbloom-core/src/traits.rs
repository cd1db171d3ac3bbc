// crates/travelbloom-core/src/traits.rs
use crate::text::Folding;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`]: case-insensitive equality
/// - [`NameMatch::name_contains`]: case-insensitive substring match
///
/// The `_with` variants take an explicit [`Folding`] so callers can opt into
/// accent-insensitive comparison.
///
/// # Examples
/// ```rust
/// use travelbloom_core::text::Folding;
/// use travelbloom_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Japan").is_named("japan"));
/// assert!(Place("Rio de Janeiro").name_contains("janeiro"));
/// assert!(!Place("Kyōto").name_contains("kyoto"));
/// assert!(Place("Kyōto").name_contains_with("kyoto", Folding::Accents));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.is_named_with(q, Folding::Lowercase)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_with(q, Folding::Lowercase)
    }

    /// `true` if `q` equals the name after both are folded with `folding`.
    #[inline]
    fn is_named_with(&self, q: &str, folding: Folding) -> bool {
        folding.fold(self.name_str()) == folding.fold(q)
    }

    /// `true` if the folded name contains the folded `q`.
    #[inline]
    fn name_contains_with(&self, q: &str, folding: Folding) -> bool {
        folding.fold(self.name_str()).contains(&folding.fold(q))
    }
}
