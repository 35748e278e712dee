mod commands;
mod output;
mod validation;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use restcountries_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "restcountries")]
#[command(about = "Query country reference data from the REST Countries API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root URL (defaults to RESTCOUNTRIES_API_ROOT or the production API)
    #[arg(long, global = true)]
    api_root: Option<String>,

    /// API access key (defaults to RESTCOUNTRIES_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds; 0 disables it (defaults to RESTCOUNTRIES_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every country
    All(commands::all::AllArgs),
    /// Search countries by name
    Name(commands::name::NameArgs),
    /// Search countries by capital city
    Capital(commands::lookup::LookupArgs),
    /// Search countries by currency code (e.g. EUR)
    Currency(commands::lookup::LookupArgs),
    /// Search countries by language code (e.g. fr)
    Language(commands::lookup::LookupArgs),
    /// Search countries by region (e.g. europe)
    Region(commands::lookup::LookupArgs),
    /// Search countries by regional bloc (e.g. eu)
    Bloc(commands::lookup::LookupArgs),
    /// Search countries by calling code (e.g. 33)
    CallingCode(commands::lookup::LookupArgs),
    /// Look up countries by alpha-2 or alpha-3 codes
    Codes(commands::codes::CodesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("restcountries=info".parse()?)
                .add_directive("restcountries_api=warn".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_arg(&cli.output);

    let mut config = ClientConfig::from_env();
    if let Some(ref root) = cli.api_root {
        config.api_root = root.clone();
    }
    if let Some(ref key) = cli.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Some(Duration::from_secs(secs));
    }
    let client = Client::from_config(config);

    use commands::lookup::Lookup;
    match &cli.command {
        Commands::All(args) => commands::all::run(args, &client, &format).await?,
        Commands::Name(args) => commands::name::run(args, &client, &format).await?,
        Commands::Capital(args) => {
            commands::lookup::run(Lookup::Capital, args, &client, &format).await?
        }
        Commands::Currency(args) => {
            commands::lookup::run(Lookup::Currency, args, &client, &format).await?
        }
        Commands::Language(args) => {
            commands::lookup::run(Lookup::Language, args, &client, &format).await?
        }
        Commands::Region(args) => {
            commands::lookup::run(Lookup::Region, args, &client, &format).await?
        }
        Commands::Bloc(args) => {
            commands::lookup::run(Lookup::RegionalBloc, args, &client, &format).await?
        }
        Commands::CallingCode(args) => {
            commands::lookup::run(Lookup::CallingCode, args, &client, &format).await?
        }
        Commands::Codes(args) => commands::codes::run(args, &client, &format).await?,
    }

    Ok(())
}
