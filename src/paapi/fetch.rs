//! Multi-page search orchestration: paginate, deduplicate, sort.

use crate::paapi::client::{ProductSearch, SearchParams};
use crate::paapi::error::PaapiError;
use crate::paapi::extract::extract_products;
use crate::paapi::models::Product;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, info};

/// Items requested per page. PA-API caps SearchItems at 10 per page, so
/// this is fixed rather than configurable.
pub const PAGE_SIZE: u32 = 10;

/// Options for one multi-page fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub keywords: String,
    /// Price ceiling in major currency units (e.g. dollars).
    pub max_price: f64,
    pub max_pages: u32,
    pub search_index: String,
    pub availability: String,
}

impl FetchOptions {
    pub fn new(keywords: impl Into<String>, max_price: f64) -> Self {
        Self {
            keywords: keywords.into(),
            max_price,
            max_pages: 10,
            search_index: "Electronics".to_string(),
            availability: "Available".to_string(),
        }
    }
}

/// Fetches every page up to `max_pages`, deduplicates by ASIN, and returns
/// the products sorted ascending by price.
///
/// Pages are fetched sequentially: an empty page means end-of-results and
/// stops the loop. Duplicate ASINs across pages are a vendor artifact of
/// paginated search; the first occurrence wins. Any transport error aborts
/// the whole fetch - no partial list is returned.
pub async fn fetch_all(
    client: &impl ProductSearch,
    opts: &FetchOptions,
) -> Result<Vec<Product>, PaapiError> {
    // Convert the ceiling to minor units once, before paging.
    let max_price_cents = (opts.max_price * 100.0).round() as i64;

    let mut all_products: Vec<Product> = Vec::new();
    let mut seen_asins: HashSet<String> = HashSet::new();

    for page in 1..=opts.max_pages {
        debug!("Fetching page {}", page);

        let mut params = SearchParams::new(opts.keywords.clone(), max_price_cents);
        params.item_page = page;
        params.item_count = PAGE_SIZE;
        params.search_index = opts.search_index.clone();
        params.availability = opts.availability.clone();

        let resp = client.search_items(&params).await?;
        let products = extract_products(&resp);

        if products.is_empty() {
            debug!("No results on page {}, stopping", page);
            break;
        }

        for product in products {
            if seen_asins.insert(product.asin.clone()) {
                all_products.push(product);
            }
        }
    }

    // Stable sort keeps discovery order for equal prices.
    all_products.sort_by(|a, b| {
        a.price_amount.partial_cmp(&b.price_amount).unwrap_or(Ordering::Equal)
    });

    info!("Fetched {} unique products", all_products.len());
    Ok(all_products)
}
