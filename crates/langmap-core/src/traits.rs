// crates/langmap-core/src/traits.rs
use crate::common::DirectoryStats;
use crate::model::{CountryRecord, MapMarker};
use crate::text::{equals_folded, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons go through [`fold_key`], so they are case-insensitive and
/// accent-insensitive. Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use langmap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Réunion").is_named("reunion"));
/// assert!(Place("United States").name_contains("UNITED"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Returns `true` if the folded name contains the folded `q`.
    ///
    /// The empty query is a substring of every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Like [`NameMatch::name_contains`] for a query that is already folded.
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        fold_key(self.name_str()).contains(folded)
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Query operations on the country directory.
pub trait CountrySearch {
    fn stats(&self) -> DirectoryStats;

    /// First record (in directory order) whose name contains `query`,
    /// compared case-insensitively.
    ///
    /// No match is `None`, never an error. The empty query matches every
    /// name and therefore returns the first record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use langmap_core::{CountryDirectory, CountrySearch};
    ///
    /// let dir = CountryDirectory::build();
    ///
    /// let de = dir.find_by_name("germany").unwrap();
    /// assert_eq!(de.name(), "Germany");
    ///
    /// // "United States Minor Outlying Islands" sorts first.
    /// let hit = dir.find_by_name("united states").unwrap();
    /// assert!(hit.name().starts_with("United States"));
    ///
    /// // Cities are not countries.
    /// assert!(dir.find_by_name("Madina").is_none());
    /// ```
    fn find_by_name(&self, query: &str) -> Option<&CountryRecord>;

    /// Every record whose name contains `query`, in directory order.
    fn find_all_by_name(&self, query: &str) -> Vec<&CountryRecord>;

    /// Lookup by ISO2 first, then ISO3; trimmed and case-insensitive.
    fn find_by_code(&self, code: &str) -> Option<&CountryRecord>;

    /// Looks a country up by name and builds its marker.
    fn marker_for_name(&self, query: &str) -> Option<MapMarker> {
        self.find_by_name(query).map(CountryRecord::marker)
    }
}
