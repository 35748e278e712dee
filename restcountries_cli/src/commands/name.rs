use anyhow::Result;
use clap::Args;
use restcountries_api::{Client, NameQuery, Query};

use super::{print_countries, FieldsArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct NameArgs {
    /// Full or partial country name
    pub name: String,

    /// Only return countries whose name matches exactly
    #[arg(long)]
    pub full_text: bool,

    #[command(flatten)]
    pub fields: FieldsArgs,
}

pub async fn run(args: &NameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let name = validation::validate_search(&args.name)?;
    let query = NameQuery::new(&name)
        .with_full_text(args.full_text)
        .with_fields(&args.fields.validated()?);
    let countries = client.name(&query).await?;
    print_countries(&countries, format)
}
