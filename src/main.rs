//! Postula - Job-Board Scraping Assistant
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postula::core::Config;
use postula::llm::{EmailDrafter, OpenAiClient};
use postula::scrape;

/// Example offer code used for manual invocation
const EXAMPLE_OFFER_CODE: &str = "2024-107738";

/// Postula - Job-Board Scraping Assistant
#[derive(Parser, Debug)]
#[command(name = "postula")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Browser binary to launch instead of the system default
    #[arg(long)]
    browser_path: Option<PathBuf>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Model used for email drafting
    #[arg(long, short = 'm')]
    model: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch offer summaries for a search-parameters JSON object
    Search {
        /// Search parameters as inline JSON
        #[arg(long, conflicts_with = "file")]
        params: Option<String>,

        /// Read search parameters from a JSON file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Fetch the full record of one offer
    Detail {
        /// Offer code, as found in the listing link
        #[arg(default_value = EXAMPLE_OFFER_CODE)]
        code: String,
    },
    /// Fetch an offer and draft an application email for it
    Email {
        /// Offer code, as found in the listing link
        #[arg(default_value = EXAMPLE_OFFER_CODE)]
        code: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postula=info")),
        )
        .init();

    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref path) = args.browser_path {
        config.browser.browser_path = Some(path.clone());
    }

    if args.headed {
        config.browser.headless = false;
    }

    if let Some(ref model) = args.model {
        config.openai.model = model.clone();
    }

    match args.command {
        Command::Search { params, file } => {
            let params_json = match (params, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => anyhow::bail!("provide search parameters via --params or --file"),
            };

            let offers = scrape::fetch_listings(&config, &params_json)?;
            println!("{}", serde_json::to_string_pretty(&offers)?);
        }

        Command::Detail { code } => {
            let detail = scrape::fetch_detail(&config, &code)?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }

        Command::Email { code } => {
            let detail = scrape::fetch_detail(&config, &code)?;
            let provider = Arc::new(OpenAiClient::from_config(&config)?);
            let drafter = EmailDrafter::new(provider);

            let email = drafter.draft(&detail).await?;
            println!("{}", email);
        }
    }

    Ok(())
}
