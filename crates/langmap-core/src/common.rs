use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the directory.
///
/// Returned by [`CountrySearch::stats`](crate::traits::CountrySearch::stats).
/// The counts show how much of the reference table fell back to defaults
/// while it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    pub unknown_language: usize,
    pub missing_coordinates: usize,
}
