use anyhow::Result;
use clap::Args;
use restcountries_api::{AllQuery, Client, Query};

use super::{print_countries, FieldsArgs};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct AllArgs {
    #[command(flatten)]
    pub fields: FieldsArgs,
}

pub async fn run(args: &AllArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = AllQuery::default().with_fields(&args.fields.validated()?);
    let countries = client.all(&query).await?;
    print_countries(&countries, format)
}
