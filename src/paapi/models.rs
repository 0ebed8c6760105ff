//! Data models for PA-API 5.0 responses and normalized products.
//!
//! The raw response types mirror the vendor's deeply nested JSON. Every
//! level is optional or defaulted: PA-API routinely omits whole subtrees
//! (no offers, no images, no title), and a missing field must never fail
//! deserialization.

use serde::{Deserialize, Serialize};

/// Top-level SearchItems response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "SearchResult")]
    pub search_result: Option<SearchResult>,
}

/// The search result container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Items", default)]
    pub items: Vec<RawItem>,
}

/// One raw catalog item as returned by the vendor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(rename = "ASIN", default)]
    pub asin: String,
    #[serde(rename = "DetailPageURL", default)]
    pub detail_page_url: String,
    #[serde(rename = "ItemInfo")]
    pub item_info: Option<ItemInfo>,
    #[serde(rename = "Offers")]
    pub offers: Option<Offers>,
    #[serde(rename = "Images")]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemInfo {
    #[serde(rename = "Title")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Title {
    #[serde(rename = "DisplayValue", default)]
    pub display_value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Offers {
    #[serde(rename = "Listings", default)]
    pub listings: Vec<Listing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(rename = "Price")]
    pub price: Option<ListingPrice>,
}

/// Price of one offer listing. `amount` absent means the listing has no
/// live price and the item is dropped during extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPrice {
    #[serde(rename = "Amount")]
    pub amount: Option<f64>,
    #[serde(rename = "DisplayAmount", default)]
    pub display_amount: String,
    #[serde(rename = "Currency", default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    #[serde(rename = "Primary")]
    pub primary: Option<ImageSet>,
}

/// Primary image in up to three declared sizes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSet {
    #[serde(rename = "Small")]
    pub small: Option<ImageInfo>,
    #[serde(rename = "Medium")]
    pub medium: Option<ImageInfo>,
    #[serde(rename = "Large")]
    pub large: Option<ImageInfo>,
}

impl ImageSet {
    /// Returns the URL of the smallest declared size that is present.
    pub fn smallest_url(&self) -> Option<&str> {
        self.small
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.large.as_ref())
            .map(|img| img.url.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfo {
    #[serde(rename = "URL", default)]
    pub url: String,
}

/// A normalized product record. Immutable once extracted; serialized
/// field order defines the key order of the published JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Amazon Standard Identification Number, unique per catalog item.
    pub asin: String,
    /// Trimmed title (empty if the vendor omitted it).
    pub title: String,
    /// Numeric price in major currency units (e.g. dollars).
    pub price_amount: f64,
    /// Display-formatted price string, e.g. "$49.99".
    pub price_display: String,
    /// Currency code, e.g. "USD".
    pub currency: String,
    /// Detail page URL carrying the partner tag.
    pub url: String,
    /// Thumbnail URL, if the vendor declared a primary image.
    pub image_url: Option<String>,
}
