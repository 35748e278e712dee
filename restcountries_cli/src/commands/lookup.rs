//! Subcommands that search by a single term: capital, currency, language,
//! region, bloc and calling-code.

use anyhow::Result;
use clap::Args;
use restcountries_api::{
    CallingCodeQuery, CapitalQuery, Client, CurrencyQuery, LanguageQuery, Query, RegionQuery,
    RegionalBlocQuery,
};

use super::{print_countries, FieldsArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct LookupArgs {
    /// Search term
    pub term: String,

    #[command(flatten)]
    pub fields: FieldsArgs,
}

#[derive(Clone, Copy, Debug)]
pub enum Lookup {
    Capital,
    Currency,
    Language,
    Region,
    RegionalBloc,
    CallingCode,
}

pub async fn run(
    lookup: Lookup,
    args: &LookupArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let term = validation::validate_search(&args.term)?;
    let fields = args.fields.validated()?;

    let countries = match lookup {
        Lookup::Capital => {
            client
                .capital(&CapitalQuery::new(&term).with_fields(&fields))
                .await?
        }
        Lookup::Currency => {
            client
                .currency(&CurrencyQuery::new(&term).with_fields(&fields))
                .await?
        }
        Lookup::Language => {
            client
                .language(&LanguageQuery::new(&term).with_fields(&fields))
                .await?
        }
        Lookup::Region => {
            client
                .region(&RegionQuery::new(&term).with_fields(&fields))
                .await?
        }
        Lookup::RegionalBloc => {
            client
                .regional_bloc(&RegionalBlocQuery::new(&term).with_fields(&fields))
                .await?
        }
        Lookup::CallingCode => {
            client
                .calling_code(&CallingCodeQuery::new(&term).with_fields(&fields))
                .await?
        }
    };

    print_countries(&countries, format)
}
