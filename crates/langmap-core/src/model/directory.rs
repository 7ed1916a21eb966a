// crates/langmap-core/src/model/directory.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language name used when an entry declares no resolvable language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// The country directory.
///
/// An ordered list of [`CountryRecord`]s in reference-dataset order.
/// Built once (see [`CountryDirectory::build`]) and read-only afterwards:
/// records are only ever handed out as shared references.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryDirectory {
    pub(crate) records: Vec<CountryRecord>,
}

/// A country entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    /// Formal name; equal to `name` when the dataset has none.
    pub official_name: String,
    /// ISO 3166-1 alpha-2 code. Empty if the dataset has none.
    pub iso2: String,
    pub iso3: Option<String>,
    /// `0.0` when the dataset has no usable latitude.
    pub latitude: f64,
    /// `0.0` when the dataset has no usable longitude.
    pub longitude: f64,
    /// English name of the first listed language, or [`UNKNOWN_LANGUAGE`].
    pub primary_language: String,
}

/// A map annotation: coordinates plus a popup label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl CountryDirectory {
    /// All records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the marker for a record. Never fails.
    pub fn marker_for(&self, record: &CountryRecord) -> MapMarker {
        record.marker()
    }
}

impl CountryRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn iso3(&self) -> &str {
        self.iso3.as_deref().unwrap_or("")
    }

    pub fn primary_language(&self) -> &str {
        &self.primary_language
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn has_known_language(&self) -> bool {
        self.primary_language != UNKNOWN_LANGUAGE
    }

    /// False when both axes sit at the `0.0` default.
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// The marker label: `"<name> - Language: <primary_language>"`.
    pub fn marker_label(&self) -> String {
        format!("{} - Language: {}", self.name, self.primary_language)
    }

    pub fn marker(&self) -> MapMarker {
        MapMarker {
            latitude: self.latitude,
            longitude: self.longitude,
            label: self.marker_label(),
        }
    }
}

impl fmt::Display for MapMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ ({:.4}, {:.4})",
            self.label, self.latitude, self.longitude
        )
    }
}
