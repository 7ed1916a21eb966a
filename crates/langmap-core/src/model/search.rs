// crates/langmap-core/src/model/search.rs
use super::directory::{CountryDirectory, CountryRecord};
use crate::common::DirectoryStats;
use crate::text::fold_key;
use crate::traits::{CountrySearch, NameMatch};

impl CountrySearch for CountryDirectory {
    fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.records.len(),
            unknown_language: self
                .records
                .iter()
                .filter(|r| !r.has_known_language())
                .count(),
            missing_coordinates: self
                .records
                .iter()
                .filter(|r| !r.has_coordinates())
                .count(),
        }
    }

    fn find_by_name(&self, query: &str) -> Option<&CountryRecord> {
        // Linear scan is fine for ~250 countries
        let q = folded_query(query)?;
        self.records.iter().find(|r| r.name_contains_folded(&q))
    }

    fn find_all_by_name(&self, query: &str) -> Vec<&CountryRecord> {
        let Some(q) = folded_query(query) else {
            return Vec::new();
        };
        self.records
            .iter()
            .filter(|r| r.name_contains_folded(&q))
            .collect()
    }

    fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.iso2.eq_ignore_ascii_case(code))
            .or_else(|| {
                self.records.iter().find(|r| {
                    r.iso3
                        .as_deref()
                        .is_some_and(|s| s.eq_ignore_ascii_case(code))
                })
            })
    }
}

/// Folds a name query for substring matching.
///
/// `None` when a query with visible content folds away to nothing
/// (combining marks, zero-width or variation characters): such a query
/// cannot be a substring of any name.
fn folded_query(query: &str) -> Option<String> {
    let folded = fold_key(query);
    if folded.trim().is_empty() && !query.trim().is_empty() {
        tracing::debug!(query, "query folds to nothing, no match");
        return None;
    }
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTable;
    use crate::model::convert::from_raw;

    fn sample() -> CountryDirectory {
        let raw = serde_json::from_str(
            r#"[
                {"name": "United Arab Emirates", "iso2": "AE", "iso3": "ARE", "languages": ["ar"]},
                {"name": "United Kingdom", "iso2": "GB", "iso3": "GBR", "languages": ["en"]},
                {"name": "United States", "iso2": "US", "iso3": "USA", "languages": ["en"],
                 "latitude": "37.09024", "longitude": "-95.712891"},
                {"name": "Côte d'Ivoire", "iso2": "CI", "iso3": "CIV", "languages": ["fr"]}
            ]"#,
        )
        .unwrap();
        from_raw(raw, &LanguageTable::iso639_1())
    }

    #[test]
    fn first_match_wins() {
        let dir = sample();
        assert_eq!(dir.find_by_name("United").unwrap().name(), "United Arab Emirates");
        assert_eq!(dir.find_by_name("states").unwrap().name(), "United States");
    }

    #[test]
    fn case_and_accent_insensitive() {
        let dir = sample();
        assert_eq!(dir.find_by_name("KINGDOM"), dir.find_by_name("kingdom"));
        assert_eq!(dir.find_by_name("cote").unwrap().iso2(), "CI");
    }

    #[test]
    fn empty_query_matches_first_record() {
        let dir = sample();
        assert_eq!(dir.find_by_name("").unwrap().name(), "United Arab Emirates");
    }

    #[test]
    fn queries_that_fold_to_nothing_match_nothing() {
        let dir = sample();
        for q in ["\u{301}", "\u{200b}", "\u{fe0f}", " \u{301} "] {
            assert!(dir.find_by_name(q).is_none(), "{q:?}");
            assert!(dir.find_all_by_name(q).is_empty(), "{q:?}");
            assert!(dir.marker_for_name(q).is_none(), "{q:?}");
        }
    }

    #[test]
    fn find_all_keeps_order() {
        let dir = sample();
        let names: Vec<_> = dir.find_all_by_name("united").into_iter().map(|r| r.name()).collect();
        assert_eq!(names, ["United Arab Emirates", "United Kingdom", "United States"]);
        assert!(dir.find_all_by_name("Qxyzzy-not-a-country").is_empty());
    }

    #[test]
    fn code_lookup_prefers_iso2() {
        let dir = sample();
        assert_eq!(dir.find_by_code(" us ").unwrap().name(), "United States");
        assert_eq!(dir.find_by_code("gbr").unwrap().name(), "United Kingdom");
        assert!(dir.find_by_code("").is_none());
        assert!(dir.find_by_code("XX").is_none());
    }

    #[test]
    fn stats_count_defaults() {
        let stats = sample().stats();
        assert_eq!(stats.countries, 4);
        assert_eq!(stats.unknown_language, 0);
        assert_eq!(stats.missing_coordinates, 3);
    }

    #[test]
    fn marker_for_name_combines_lookup_and_marker() {
        let dir = sample();
        let m = dir.marker_for_name("united states").unwrap();
        assert_eq!(m.label, "United States - Language: English");
        assert_eq!(m.latitude, 37.09024);
        assert!(dir.marker_for_name("Madina").is_none());
    }
}
