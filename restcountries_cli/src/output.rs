use anyhow::Result;
use restcountries_api::types::Country;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Parses the `--output` flag. Anything unrecognized falls back to a table.
    pub fn from_arg(arg: &str) -> Self {
        match arg.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CountryRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Capital")]
    #[serde(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Population")]
    #[serde(rename = "Population")]
    population: String,
    #[tabled(rename = "Currencies")]
    #[serde(rename = "Currencies")]
    currencies: String,
    #[tabled(rename = "Languages")]
    #[serde(rename = "Languages")]
    languages: String,
    #[tabled(rename = "Calling Codes")]
    #[serde(rename = "Calling Codes")]
    calling_codes: String,
}

// -- Row builders --

fn build_country_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries
        .iter()
        .map(|c| CountryRow {
            name: c.name.clone(),
            code: if c.alpha3_code.is_empty() {
                c.alpha2_code.clone()
            } else {
                c.alpha3_code.clone()
            },
            capital: c.capital.clone(),
            region: if c.subregion.is_empty() {
                c.region.clone()
            } else {
                format!("{} / {}", c.region, c.subregion)
            },
            population: format_population(c.population),
            currencies: c
                .currencies
                .iter()
                .map(|cur| cur.code.as_str())
                .filter(|code| !code.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            languages: c
                .languages
                .iter()
                .map(|lang| lang.name.as_str())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            calling_codes: c
                .calling_codes
                .iter()
                .map(|code| format!("+{}", code))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

// -- Table output --

pub fn print_countries_table(countries: &[Country]) {
    println!("{}", Table::new(build_country_rows(countries)));
}

// -- Markdown output --

pub fn print_countries_markdown(countries: &[Country]) {
    let mut table = Table::new(build_country_rows(countries));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_countries_csv(countries: &[Country]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_country_rows(countries) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_population(value: u64) -> String {
    if value == 0 {
        String::new()
    } else if value >= 1_000_000_000 {
        format!("{:.2}B", value as f64 / 1_000_000_000.0)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_countries_fixture() -> Vec<Country> {
        let json_str = include_str!("../../restcountries_api/tests/fixtures/countries.json");
        serde_json::from_str(json_str).unwrap()
    }

    // -- format_population tests --

    #[test]
    fn test_format_population_billions() {
        assert_eq!(format_population(1_402_112_000), "1.40B");
    }

    #[test]
    fn test_format_population_millions() {
        assert_eq!(format_population(66_710_000), "66.7M");
    }

    #[test]
    fn test_format_population_thousands() {
        assert_eq!(format_population(1_000), "1.0K");
    }

    #[test]
    fn test_format_population_small_and_unknown() {
        assert_eq!(format_population(800), "800");
        assert_eq!(format_population(0), "");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_country_rows_mapping() {
        let countries = load_countries_fixture();
        let rows = build_country_rows(&countries);
        assert_eq!(rows.len(), 3);

        let row = &rows[1];
        assert_eq!(row.name, "France");
        assert_eq!(row.code, "FRA");
        assert_eq!(row.capital, "Paris");
        assert_eq!(row.region, "Europe / Western Europe");
        assert_eq!(row.population, "66.7M");
        assert_eq!(row.currencies, "EUR");
        assert_eq!(row.languages, "French");
        assert_eq!(row.calling_codes, "+33");
    }

    #[test]
    fn test_build_country_rows_sparse_record() {
        let countries: Vec<Country> =
            serde_json::from_str(r#"[{"name":"France","capital":"Paris","alpha2Code":"FR"}]"#)
                .unwrap();
        let row = &build_country_rows(&countries)[0];
        assert_eq!(row.code, "FR");
        assert_eq!(row.region, "");
        assert_eq!(row.population, "");
        assert_eq!(row.currencies, "");
        assert_eq!(row.calling_codes, "");
    }

    #[test]
    fn test_build_country_rows_empty() {
        assert!(build_country_rows(&[]).is_empty());
    }

    #[test]
    fn test_output_format_from_arg() {
        assert_eq!(OutputFormat::from_arg("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_arg("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_arg("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_arg("xml"), OutputFormat::Table);
    }
}
