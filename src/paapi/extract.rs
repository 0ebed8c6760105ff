//! Normalization of raw search responses into flat product records.

use crate::paapi::models::{Product, RawItem, SearchResponse};
use tracing::debug;

/// Flattens a raw SearchItems response into product records.
///
/// Items without an offer listing or without a numeric price amount are
/// dropped silently; vendors return many listings without live offers and
/// that is not an error. Missing optional fields never cause a failure.
pub fn extract_products(resp: &SearchResponse) -> Vec<Product> {
    let items = match &resp.search_result {
        Some(result) => &result.items,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match extract_item(item) {
            Some(product) => out.push(product),
            None => debug!(asin = %item.asin, "Skipping item without a priced offer"),
        }
    }
    out
}

fn extract_item(item: &RawItem) -> Option<Product> {
    let listing = item.offers.as_ref()?.listings.first()?;
    let price = listing.price.as_ref()?;
    let amount = price.amount?;

    let title = item
        .item_info
        .as_ref()
        .and_then(|info| info.title.as_ref())
        .map(|t| t.display_value.trim().to_string())
        .unwrap_or_default();

    let image_url = item
        .images
        .as_ref()
        .and_then(|images| images.primary.as_ref())
        .and_then(|primary| primary.smallest_url())
        .map(ToOwned::to_owned);

    Some(Product {
        asin: item.asin.clone(),
        title,
        price_amount: amount,
        price_display: price.display_amount.clone(),
        currency: price.currency.clone(),
        url: item.detail_page_url.clone(),
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(asin: &str, amount: Option<f64>) -> serde_json::Value {
        let mut it = json!({
            "ASIN": asin,
            "DetailPageURL": format!("https://www.amazon.com/dp/{asin}?tag=mytag-20"),
            "ItemInfo": {"Title": {"DisplayValue": format!("  Product {asin}  ")}},
        });
        if let Some(amount) = amount {
            it["Offers"] = json!({"Listings": [{"Price": {
                "Amount": amount,
                "DisplayAmount": format!("${amount:.2}"),
                "Currency": "USD"
            }}]});
        }
        it
    }

    fn response(items: Vec<serde_json::Value>) -> SearchResponse {
        serde_json::from_value(json!({"SearchResult": {"Items": items}})).unwrap()
    }

    #[test]
    fn test_extract_basic() {
        let resp = response(vec![item("B001", Some(19.99))]);
        let products = extract_products(&resp);

        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.asin, "B001");
        assert_eq!(p.title, "Product B001"); // trimmed
        assert_eq!(p.price_amount, 19.99);
        assert_eq!(p.price_display, "$19.99");
        assert_eq!(p.currency, "USD");
        assert!(p.url.contains("tag=mytag-20"));
    }

    #[test]
    fn test_drops_item_without_offers() {
        // 3 items, the middle one has no offers: exactly 2 records, order kept.
        let resp = response(vec![
            item("B001", Some(10.0)),
            item("B002", None),
            item("B003", Some(30.0)),
        ]);

        let products = extract_products(&resp);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].asin, "B001");
        assert_eq!(products[1].asin, "B003");
    }

    #[test]
    fn test_drops_item_without_price_amount() {
        let mut it = item("B004", Some(1.0));
        it["Offers"]["Listings"][0]["Price"] =
            json!({"DisplayAmount": "See price in cart", "Currency": "USD"});

        let products = extract_products(&response(vec![it]));
        assert!(products.is_empty());
    }

    #[test]
    fn test_drops_item_with_empty_listings() {
        let mut it = item("B005", None);
        it["Offers"] = json!({"Listings": []});

        let products = extract_products(&response(vec![it]));
        assert!(products.is_empty());
    }

    #[test]
    fn test_missing_search_result() {
        let resp: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_products(&resp).is_empty());
    }

    #[test]
    fn test_missing_title_yields_empty_string() {
        let mut it = item("B006", Some(5.0));
        it.as_object_mut().unwrap().remove("ItemInfo");

        let products = extract_products(&response(vec![it]));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "");
    }

    #[test]
    fn test_image_smallest_size_wins() {
        let mut it = item("B007", Some(5.0));
        it["Images"] = json!({"Primary": {
            "Small": {"URL": "https://img/s.jpg"},
            "Large": {"URL": "https://img/l.jpg"}
        }});

        let products = extract_products(&response(vec![it]));
        assert_eq!(products[0].image_url.as_deref(), Some("https://img/s.jpg"));
    }

    #[test]
    fn test_image_absent_is_none() {
        let products = extract_products(&response(vec![item("B008", Some(5.0))]));
        assert!(products[0].image_url.is_none());
    }

    #[test]
    fn test_uses_first_listing_only() {
        let mut it = item("B009", Some(12.0));
        it["Offers"]["Listings"]
            .as_array_mut()
            .unwrap()
            .push(json!({"Price": {"Amount": 99.0, "DisplayAmount": "$99.00", "Currency": "USD"}}));

        let products = extract_products(&response(vec![it]));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price_amount, 12.0);
    }
}
