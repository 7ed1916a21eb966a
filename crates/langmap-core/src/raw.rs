// crates/langmap-core/src/raw.rs
//! Shared raw input: the reference dataset exactly as it sits in JSON.
//!
//! Nothing here is validated. Defaults for missing or broken fields are
//! applied when the raw entries are converted into the directory
//! (see [`crate::model::convert`]).
use serde::Deserialize;

/// A coordinate as it appears in the source table.
///
/// The bundled table stores coordinates as strings ("30.3753"), other
/// exports use plain numbers; both are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawCoord {
    Number(f64),
    Text(String),
}

impl RawCoord {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawCoord::Number(v) => Some(*v).filter(|v| v.is_finite()),
            RawCoord::Text(s) => crate::text::parse_opt_f64(Some(s)),
        }
    }
}

/// Raw country entry.
///
/// ```json
/// {
///   "name": "Pakistan",
///   "official_name": "Islamic Republic of Pakistan",
///   "iso2": "PK",
///   "iso3": "PAK",
///   "latitude": "30.375321",
///   "longitude": "69.345116",
///   "languages": ["ur", "en"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub latitude: Option<RawCoord>,
    #[serde(default)]
    pub longitude: Option<RawCoord>,
    /// ISO 639-1 codes, most widely used first.
    #[serde(default)]
    pub languages: Vec<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_numeric_coordinates() {
        let raw: CountriesRaw = serde_json::from_str(
            r#"[
                {"name": "A", "latitude": "1.5", "longitude": 2},
                {"name": "B"}
            ]"#,
        )
        .unwrap();

        assert_eq!(raw[0].latitude.as_ref().and_then(RawCoord::as_f64), Some(1.5));
        assert_eq!(raw[0].longitude.as_ref().and_then(RawCoord::as_f64), Some(2.0));
        assert!(raw[1].latitude.is_none());
        assert!(raw[1].languages.is_empty());
    }
}
