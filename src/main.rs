//! paapi-search - Amazon PA-API 5.0 signed product search CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use paapi_search::commands::{BuildPageCommand, SearchCommand};
use paapi_search::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "paapi-search",
    version,
    about = "Amazon PA-API 5.0 signed product search",
    long_about = "Searches the Amazon Product Advertising API with SigV4-signed requests \
                  and publishes a deduplicated, price-sorted product list."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Delay between page requests in milliseconds
    #[arg(long, default_value = "1000", global = true, env = "PAAPI_DELAY")]
    delay: u64,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products under a price ceiling
    #[command(alias = "s")]
    Search {
        /// Search keywords
        query: String,

        /// Price ceiling in major currency units (e.g. dollars)
        #[arg(long, default_value = "100.0")]
        max_price: f64,

        /// Maximum number of pages to fetch
        #[arg(long, default_value = "10")]
        max_pages: u32,

        /// Search category index
        #[arg(long)]
        search_index: Option<String>,

        /// Availability filter
        #[arg(long)]
        availability: Option<String>,
    },

    /// Fetch products and write products.json plus index.html
    #[command(alias = "b")]
    BuildPage {
        /// Search keywords
        #[arg(default_value = "DJ headphones")]
        query: String,

        /// Price ceiling in major currency units
        #[arg(long, default_value = "100.0")]
        max_price: f64,

        /// Maximum number of pages to fetch
        #[arg(long, default_value = "10")]
        max_pages: u32,

        /// Page title
        #[arg(long, default_value = "All DJ headphones under $100 — lowest price first")]
        title: String,

        /// Page meta description
        #[arg(
            long,
            default_value = "Self-updating list of DJ headphones priced under $100 on Amazon US, \
                             ordered from cheapest to most expensive."
        )]
        desc: String,

        /// Output directory for the artifacts
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    config.delay_ms = cli.delay;

    match cli.command {
        Commands::Search { query, max_price, max_pages, search_index, availability } => {
            if let Some(index) = search_index {
                config.search_index = index;
            }
            if let Some(availability) = availability {
                config.availability = availability;
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query, max_price, max_pages).await?;
            println!("{}", output);
        }

        Commands::BuildPage { query, max_price, max_pages, title, desc, out_dir } => {
            let cmd = BuildPageCommand::new(config, title, desc, out_dir);
            let count = cmd.execute(&query, max_price, max_pages).await?;
            println!("Published {} products", count);
        }
    }

    Ok(())
}
