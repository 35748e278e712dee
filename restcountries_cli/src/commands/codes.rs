use anyhow::Result;
use clap::Args;
use restcountries_api::{Client, CodesQuery, Query};

use super::{print_countries, FieldsArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct CodesArgs {
    /// ISO 3166-1 alpha-2 or alpha-3 codes (e.g. CO US FRA)
    #[arg(required = true)]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub fields: FieldsArgs,
}

pub async fn run(args: &CodesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let codes = args
        .codes
        .iter()
        .map(|code| validation::validate_code(code))
        .collect::<Result<Vec<_>>>()?;
    let query = CodesQuery::default()
        .with_codes(&codes)
        .with_fields(&args.fields.validated()?);
    let countries = client.codes(&query).await?;
    print_countries(&countries, format)
}
