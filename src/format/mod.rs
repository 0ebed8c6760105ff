//! Output formatting for products (table, JSON) and the static HTML page.

pub mod page;

use crate::config::OutputFormat;
use crate::paapi::models::Product;

pub use page::render_page;

/// Formats products for terminal output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Table => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
        }
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    fn table_products(&self, products: &[Product]) -> String {
        let asin_width = 12;
        let price_width = 12;
        let title_width = 60;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<asin_width$}  {:<price_width$}  {}",
            "ASIN", "Price", "Title"
        ));
        lines.push(format!(
            "{:-<asin_width$}  {:-<price_width$}  {:-<title_width$}",
            "", "", ""
        ));

        for product in products {
            let price_str = if product.price_display.is_empty() {
                format!("{:.2} {}", product.price_amount, product.currency)
            } else {
                product.price_display.clone()
            };

            let title = if product.title.chars().count() > title_width {
                let truncated: String = product.title.chars().take(title_width - 3).collect();
                format!("{truncated}...")
            } else {
                product.title.clone()
            };

            lines.push(format!(
                "{:<asin_width$}  {:>price_width$}  {}",
                product.asin, price_str, title
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }
}
