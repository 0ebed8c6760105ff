//! Build-page command: fetch products and write the published artifacts.

use crate::config::Config;
use crate::format::render_page;
use crate::paapi::{fetch_all, FetchOptions, PaapiClient, Product, ProductSearch};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fetches products and writes `products.json` plus `index.html`.
///
/// Nothing is written if the fetch fails: publishing a truncated list
/// would be worse than keeping the previous build.
pub struct BuildPageCommand {
    config: Config,
    title: String,
    description: String,
    out_dir: PathBuf,
}

impl BuildPageCommand {
    pub fn new(
        config: Config,
        title: impl Into<String>,
        description: impl Into<String>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { config, title: title.into(), description: description.into(), out_dir: out_dir.into() }
    }

    /// Fetches and writes the artifacts, returning the number of products.
    pub async fn execute(&self, query: &str, max_price: f64, max_pages: u32) -> Result<usize> {
        self.config.validate()?;

        let client = PaapiClient::new(&self.config).context("Failed to create HTTP client")?;
        self.execute_with_client(&client, query, max_price, max_pages).await
    }

    /// Fetches with a provided client and writes the artifacts (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        query: &str,
        max_price: f64,
        max_pages: u32,
    ) -> Result<usize> {
        let mut opts = FetchOptions::new(query, max_price);
        opts.max_pages = max_pages;
        opts.search_index = self.config.search_index.clone();
        opts.availability = self.config.availability.clone();

        let products = fetch_all(client, &opts).await?;

        let updated = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        self.write_artifacts(&products, &updated)?;

        info!("Wrote {} products to {}", products.len(), self.out_dir.display());
        Ok(products.len())
    }

    fn write_artifacts(&self, products: &[Product], updated: &str) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.out_dir.display())
        })?;

        let json = serde_json::to_string_pretty(products)?;
        write_file(&self.out_dir.join("products.json"), &json)?;

        let html = render_page(&self.title, &self.description, updated, products);
        write_file(&self.out_dir.join("index.html"), &html)?;

        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paapi::error::PaapiError;
    use crate::paapi::models::SearchResponse;
    use crate::paapi::SearchParams;
    use async_trait::async_trait;
    use serde_json::json;
    use tempfile::TempDir;

    struct MockClient {
        pages: Vec<SearchResponse>,
        fail: bool,
    }

    #[async_trait]
    impl ProductSearch for MockClient {
        async fn search_items(&self, params: &SearchParams) -> Result<SearchResponse, PaapiError> {
            if self.fail {
                return Err(PaapiError::Http { status: 500, body: "boom".into() });
            }
            let idx = (params.item_page - 1) as usize;
            Ok(self.pages.get(idx).cloned().unwrap_or_default())
        }
    }

    fn one_page() -> SearchResponse {
        serde_json::from_value(json!({"SearchResult": {"Items": [{
            "ASIN": "B001",
            "DetailPageURL": "https://www.amazon.com/dp/B001?tag=mytag-20",
            "ItemInfo": {"Title": {"DisplayValue": "DJ Headphones"}},
            "Offers": {"Listings": [{"Price": {
                "Amount": 49.99, "DisplayAmount": "$49.99", "Currency": "USD"
            }}]}
        }]}}))
        .unwrap()
    }

    fn make_command(out_dir: &Path) -> BuildPageCommand {
        let config = Config {
            access_key: "AKIA".to_string(),
            secret_key: "secret".to_string(),
            partner_tag: "mytag-20".to_string(),
            delay_ms: 0,
            ..Config::default()
        };
        BuildPageCommand::new(config, "Deals under $100", "Cheapest first.", out_dir)
    }

    #[tokio::test]
    async fn test_build_page_writes_artifacts() {
        let dir = TempDir::new().unwrap();
        let cmd = make_command(dir.path());
        let client = MockClient { pages: vec![one_page()], fail: false };

        let count = cmd.execute_with_client(&client, "DJ headphones", 100.0, 10).await.unwrap();
        assert_eq!(count, 1);

        let json = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
        let products: Vec<Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(products[0].asin, "B001");

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Deals under $100"));
        assert!(html.contains("DJ Headphones"));
    }

    #[tokio::test]
    async fn test_build_page_writes_nothing_on_fetch_error() {
        let dir = TempDir::new().unwrap();
        let cmd = make_command(dir.path());
        let client = MockClient { pages: vec![], fail: true };

        let result = cmd.execute_with_client(&client, "DJ headphones", 100.0, 10).await;
        assert!(result.is_err());
        assert!(!dir.path().join("products.json").exists());
        assert!(!dir.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn test_build_page_empty_results_still_publishes() {
        // An empty first page is a valid (empty) result set, not an error.
        let dir = TempDir::new().unwrap();
        let cmd = make_command(dir.path());
        let client = MockClient { pages: vec![], fail: false };

        let count = cmd.execute_with_client(&client, "DJ headphones", 100.0, 10).await.unwrap();
        assert_eq!(count, 0);

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("No items returned"));
    }
}
