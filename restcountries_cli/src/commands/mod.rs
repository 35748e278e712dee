//! CLI subcommand implementations.

pub mod all;
pub mod codes;
pub mod lookup;
pub mod name;

use anyhow::Result;
use clap::Args;
use restcountries_api::types::Country;

use crate::output::{
    print_countries_csv, print_countries_markdown, print_countries_table, print_json,
    OutputFormat,
};
use crate::validation;

/// `--fields` flag shared by every subcommand.
#[derive(Args)]
pub struct FieldsArgs {
    /// Comma-separated fields to request (e.g. name,capital,currencies)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

impl FieldsArgs {
    /// Validated field names, in the form the API expects.
    pub fn validated(&self) -> Result<Vec<String>> {
        validation::validate_fields(&self.fields)
    }
}

/// Prints the result of a query in the selected format.
pub fn print_countries(countries: &[Country], format: &OutputFormat) -> Result<()> {
    eprintln!("{} countries", countries.len());

    match format {
        OutputFormat::Table => print_countries_table(countries),
        OutputFormat::Json => print_json(&countries),
        OutputFormat::Csv => print_countries_csv(countries)?,
        OutputFormat::Markdown => print_countries_markdown(countries),
    }

    Ok(())
}
