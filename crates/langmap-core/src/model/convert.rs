// crates/langmap-core/src/model/convert.rs
use super::directory::{CountryDirectory, CountryRecord, UNKNOWN_LANGUAGE};
use crate::language::LanguageTable;
use crate::raw::{CountryRaw, RawCoord};
use crate::text::non_blank;

/// **Standard Converter:** Raw -> Directory.
///
/// Every field has its own default; a defect in one entry never aborts
/// the load:
/// - `primary_language`: first declared code resolved through `languages`,
///   else [`UNKNOWN_LANGUAGE`]
/// - `official_name`: falls back to `name`
/// - `latitude` / `longitude`: `0.0` each when missing or unparseable
///
/// Entries without a name are skipped. Source order is preserved.
pub fn from_raw(raw_countries: Vec<CountryRaw>, languages: &LanguageTable) -> CountryDirectory {
    let mut records = Vec::with_capacity(raw_countries.len());
    let mut skipped = 0usize;

    for (idx, c_raw) in raw_countries.into_iter().enumerate() {
        let Some(name) = non_blank(Some(c_raw.name.as_str())).map(str::to_owned) else {
            tracing::warn!(index = idx, "skipping reference entry without a name");
            skipped += 1;
            continue;
        };

        let primary_language = resolve_primary_language(&name, &c_raw.languages, languages);

        let official_name = non_blank(c_raw.official_name.as_deref())
            .map(str::to_owned)
            .unwrap_or_else(|| name.clone());

        let latitude = parse_coordinate(c_raw.latitude.as_ref());
        let longitude = parse_coordinate(c_raw.longitude.as_ref());
        if latitude.is_none() || longitude.is_none() {
            tracing::debug!(country = %name, "no usable coordinates, defaulting to 0.0");
        }

        records.push(CountryRecord {
            official_name,
            iso2: non_blank(c_raw.iso2.as_deref())
                .map(str::to_ascii_uppercase)
                .unwrap_or_default(),
            iso3: non_blank(c_raw.iso3.as_deref()).map(str::to_ascii_uppercase),
            latitude: latitude.unwrap_or(0.0),
            longitude: longitude.unwrap_or(0.0),
            primary_language,
            name,
        });
    }

    tracing::debug!(records = records.len(), skipped, "country directory built");
    CountryDirectory { records }
}

fn resolve_primary_language(country: &str, codes: &[String], languages: &LanguageTable) -> String {
    let Some(first) = codes.first() else {
        tracing::debug!(country, "no languages declared");
        return UNKNOWN_LANGUAGE.to_string();
    };

    match languages.resolve(first) {
        Some(lang) => lang.to_string(),
        None => {
            tracing::debug!(country, code = %first, "unresolvable language code");
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

fn parse_coordinate(value: Option<&RawCoord>) -> Option<f64> {
    value.and_then(RawCoord::as_f64)
}
