//! Input validation for CLI arguments.

use anyhow::{bail, Result};

pub const MAX_SEARCH_LENGTH: usize = 100;

/// Top-level country fields accepted by the `fields` parameter.
pub const KNOWN_FIELDS: &[&str] = &[
    "name",
    "topLevelDomain",
    "alpha2Code",
    "alpha3Code",
    "callingCodes",
    "capital",
    "altSpellings",
    "region",
    "subregion",
    "population",
    "latlng",
    "demonym",
    "area",
    "gini",
    "timezones",
    "borders",
    "nativeName",
    "numericCode",
    "currencies",
    "languages",
    "translations",
    "flag",
    "regionalBlocs",
    "cioc",
];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        bail!("input is empty after sanitization");
    }
    Ok(sanitized)
}

/// Validate a search term: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate field names case-insensitively, returning the API spelling
/// (e.g. `ALPHA2CODE` becomes `alpha2Code`).
pub fn validate_fields(fields: &[String]) -> Result<Vec<String>> {
    fields
        .iter()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .map(|field| {
            match KNOWN_FIELDS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(field))
            {
                Some(known) => Ok(known.to_string()),
                None => bail!(
                    "unknown field '{}'. Valid fields: {}",
                    field,
                    KNOWN_FIELDS.join(", ")
                ),
            }
        })
        .collect()
}

/// Validate an ISO 3166-1 alpha-2 or alpha-3 code, returning it uppercased.
pub fn validate_code(input: &str) -> Result<String> {
    let code = input.trim();
    if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        bail!(
            "invalid country code '{}'. Expected 2 or 3 letters (e.g. CO, FRA)",
            input
        );
    }
    Ok(code.to_ascii_uppercase())
}
