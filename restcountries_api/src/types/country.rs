//! Country record returned by every endpoint.
//!
//! The API omits fields that were filtered out with `fields` and sends
//! `null` for unknown values (e.g. `gini`), so every field falls back to its
//! default in both cases.

use serde::{Deserialize, Deserializer, Serialize};

/// A country as described by the API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    /// Common English name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    #[serde(deserialize_with = "nullable")]
    pub top_level_domain: Vec<String>,

    /// ISO 3166-1 alpha-2 code.
    #[serde(deserialize_with = "nullable")]
    pub alpha2_code: String,

    /// ISO 3166-1 alpha-3 code.
    #[serde(deserialize_with = "nullable")]
    pub alpha3_code: String,

    #[serde(deserialize_with = "nullable")]
    pub calling_codes: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub capital: String,

    #[serde(deserialize_with = "nullable")]
    pub alt_spellings: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub region: String,

    #[serde(deserialize_with = "nullable")]
    pub subregion: String,

    #[serde(deserialize_with = "nullable")]
    pub population: u64,

    /// Latitude and longitude, in that order.
    #[serde(deserialize_with = "nullable")]
    pub latlng: Vec<f64>,

    #[serde(deserialize_with = "nullable")]
    pub demonym: String,

    /// Area in square kilometres.
    #[serde(deserialize_with = "nullable")]
    pub area: f64,

    /// Gini coefficient.
    #[serde(deserialize_with = "nullable")]
    pub gini: f64,

    #[serde(deserialize_with = "nullable")]
    pub timezones: Vec<String>,

    /// Alpha-3 codes of neighbouring countries.
    #[serde(deserialize_with = "nullable")]
    pub borders: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub native_name: String,

    /// ISO 3166-1 numeric code, as a zero-padded string.
    #[serde(deserialize_with = "nullable")]
    pub numeric_code: String,

    #[serde(deserialize_with = "nullable")]
    pub currencies: Vec<Currency>,

    #[serde(deserialize_with = "nullable")]
    pub languages: Vec<Language>,

    #[serde(deserialize_with = "nullable")]
    pub translations: Translations,

    /// URL of the flag image.
    #[serde(deserialize_with = "nullable")]
    pub flag: String,

    #[serde(deserialize_with = "nullable")]
    pub regional_blocs: Vec<RegionalBloc>,

    /// International Olympic Committee code.
    #[serde(deserialize_with = "nullable")]
    pub cioc: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Language {
    #[serde(rename = "iso639_1", deserialize_with = "nullable")]
    pub iso639_1: String,
    #[serde(rename = "iso639_2", deserialize_with = "nullable")]
    pub iso639_2: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "nativeName", deserialize_with = "nullable")]
    pub native_name: String,
}

/// Country name translations, keyed by language.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Translations {
    #[serde(deserialize_with = "nullable")]
    pub de: String,
    #[serde(deserialize_with = "nullable")]
    pub es: String,
    #[serde(deserialize_with = "nullable")]
    pub fr: String,
    #[serde(deserialize_with = "nullable")]
    pub ja: String,
    #[serde(deserialize_with = "nullable")]
    pub it: String,
    #[serde(deserialize_with = "nullable")]
    pub br: String,
    #[serde(deserialize_with = "nullable")]
    pub pt: String,
    #[serde(deserialize_with = "nullable")]
    pub nl: String,
    #[serde(deserialize_with = "nullable")]
    pub hr: String,
    #[serde(deserialize_with = "nullable")]
    pub fa: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalBloc {
    #[serde(deserialize_with = "nullable")]
    pub acronym: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub other_acronyms: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub other_names: Vec<String>,
}

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let country: Country = serde_json::from_str(r#"{"name":"France"}"#).unwrap();
        assert_eq!(country.name, "France");
        assert_eq!(country.capital, "");
        assert!(country.currencies.is_empty());
        assert_eq!(country.translations, Translations::default());
    }

    #[test]
    fn null_fields_default() {
        let country: Country = serde_json::from_str(
            r#"{"name":"Antarctica","capital":null,"gini":null,"area":null,"borders":null,"translations":{"de":null}}"#,
        )
        .unwrap();
        assert_eq!(country.name, "Antarctica");
        assert_eq!(country.capital, "");
        assert_eq!(country.gini, 0.0);
        assert!(country.borders.is_empty());
        assert_eq!(country.translations.de, "");
    }

    #[test]
    fn empty_object_is_a_valid_country() {
        let country: Country = serde_json::from_str("{}").unwrap();
        assert_eq!(country, Country::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let country: Country =
            serde_json::from_str(r#"{"name":"France","independent":true}"#).unwrap();
        assert_eq!(country.name, "France");
    }

    #[test]
    fn serializes_with_api_key_names() {
        let country = Country {
            alpha2_code: "FR".to_string(),
            languages: vec![Language {
                iso639_1: "fr".to_string(),
                native_name: "français".to_string(),
                ..Language::default()
            }],
            ..Country::default()
        };
        let value = serde_json::to_value(&country).unwrap();
        assert_eq!(value["alpha2Code"], "FR");
        assert_eq!(value["languages"][0]["iso639_1"], "fr");
        assert_eq!(value["languages"][0]["nativeName"], "français");
        assert!(value.get("regionalBlocs").is_some());
    }
}
