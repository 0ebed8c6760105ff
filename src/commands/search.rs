//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::paapi::{fetch_all, FetchOptions, PaapiClient, ProductSearch};
use anyhow::{Context, Result};
use tracing::info;

/// Executes a product search and formats the result.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str, max_price: f64, max_pages: u32) -> Result<String> {
        self.config.validate()?;

        let client = PaapiClient::new(&self.config).context("Failed to create HTTP client")?;
        self.execute_with_client(&client, query, max_price, max_pages).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        query: &str,
        max_price: f64,
        max_pages: u32,
    ) -> Result<String> {
        info!("Searching for: {} (max price {:.2})", query, max_price);

        let mut opts = FetchOptions::new(query, max_price);
        opts.max_pages = max_pages;
        opts.search_index = self.config.search_index.clone();
        opts.availability = self.config.availability.clone();

        let products = fetch_all(client, &opts).await?;

        info!("Found {} products under the price ceiling", products.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }
}
