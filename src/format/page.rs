//! Static HTML page rendering for the published product list.
//!
//! The page is a single self-contained table sorted cheapest-first, with
//! an affiliate disclosure footer. Every vendor-supplied string is escaped
//! before it is embedded in markup.

use crate::paapi::models::Product;

const HTML_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <meta name="description" content="{desc}">
  <style>
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; margin: 0; background:#fafafa; color:#111; }
    header { max-width: 980px; margin: 0 auto; padding: 28px 16px 8px; }
    h1 { font-size: 28px; margin: 0 0 8px; }
    p { margin: 0 0 10px; line-height: 1.4; }
    .meta { color:#444; font-size: 14px; }
    main { max-width: 980px; margin: 0 auto; padding: 8px 16px 32px; }
    table { width: 100%; border-collapse: collapse; background:white; border-radius: 12px; overflow:hidden; box-shadow: 0 2px 10px rgba(0,0,0,0.06); }
    th, td { padding: 12px 10px; border-bottom: 1px solid #eee; vertical-align: middle; }
    th { text-align: left; font-size: 13px; color:#444; background:#f5f5f5; }
    td.img { width: 56px; }
    td.price { white-space: nowrap; font-weight: 700; }
    td.buy { width: 150px; text-align: right; }
    a { color:#0b57d0; text-decoration: none; }
    a:hover { text-decoration: underline; }
    .btn { display:inline-block; padding: 9px 12px; border:1px solid #ddd; border-radius: 10px; background:#fff; font-weight: 600; }
    .btn:hover { background:#f7f7f7; text-decoration:none; }
    footer { max-width: 980px; margin: 0 auto; padding: 18px 16px 40px; color:#555; font-size: 13px; }
    footer a { color:#444; }
  </style>
</head>
<body>
  <header>
    <h1>{title}</h1>
    <p>{desc}</p>
    <p class="meta">Updated daily. Last build: {updated}</p>
  </header>
  <main>
    <table>
      <thead>
        <tr>
          <th></th>
          <th>Product</th>
          <th>Price</th>
          <th></th>
        </tr>
      </thead>
      <tbody>
{rows}
      </tbody>
    </table>
  </main>
  <footer>
    <p><strong>Affiliate disclosure:</strong> As an Amazon Associate, I earn from qualifying purchases.</p>
    <p><a href="privacy.html">Privacy</a> &middot; <a href="disclosure.html">Disclosure</a></p>
  </footer>
</body>
</html>
"#;

/// Renders the full HTML page for the given products.
///
/// `updated` is a preformatted timestamp string; the renderer does not
/// read the clock itself.
pub fn render_page(title: &str, desc: &str, updated: &str, products: &[Product]) -> String {
    HTML_TEMPLATE
        .replace("{title}", &escape(title))
        .replace("{desc}", &escape(desc))
        .replace("{updated}", &escape(updated))
        .replace("{rows}", &render_rows(products))
}

fn render_rows(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<tr><td colspan="4">No items returned. Check API credentials and limits.</td></tr>"#
            .to_string();
    }

    let mut rows = Vec::with_capacity(products.len());
    for product in products {
        let title = escape(&product.title);
        let price = escape(&product.price_display);
        let url = escape(&product.url);

        let img_html = match &product.image_url {
            Some(img) => format!(
                r#"<img src="{}" alt="" loading="lazy" width="48" height="48" style="object-fit:contain;">"#,
                escape(img)
            ),
            None => String::new(),
        };

        rows.push(format!(
            concat!(
                "<tr>",
                r#"<td class="img">{img}</td>"#,
                r#"<td class="title"><a href="{url}" rel="nofollow sponsored">{title}</a></td>"#,
                r#"<td class="price">{price}</td>"#,
                r#"<td class="buy"><a class="btn" href="{url}" rel="nofollow sponsored">View on Amazon</a></td>"#,
                "</tr>"
            ),
            img = img_html,
            url = url,
            title = title,
            price = price,
        ));
    }
    rows.join("\n")
}

/// Escapes `&`, `<`, `>`, `"`, and `'`, so the result is safe in both
/// text and double-quoted attribute positions.
fn escape(s: &str) -> String {
    html_escape::encode_safe(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_product() -> Product {
        Product {
            asin: "B001".to_string(),
            title: "DJ Headphones".to_string(),
            price_amount: 49.99,
            price_display: "$49.99".to_string(),
            currency: "USD".to_string(),
            url: "https://www.amazon.com/dp/B001?tag=mytag-20".to_string(),
            image_url: Some("https://img/s.jpg".to_string()),
        }
    }

    #[test]
    fn test_render_page_basic() {
        let html = render_page(
            "All DJ headphones under $100",
            "Cheapest first.",
            "2026-08-29 12:00 UTC",
            &[make_test_product()],
        );

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>All DJ headphones under $100</title>"));
        assert!(html.contains("2026-08-29 12:00 UTC"));
        assert!(html.contains("DJ Headphones"));
        assert!(html.contains("$49.99"));
        assert!(html.contains(r#"href="https://www.amazon.com/dp/B001?tag=mytag-20""#));
        assert!(html.contains(r#"<img src="https://img/s.jpg""#));
        assert!(html.contains("Affiliate disclosure"));
    }

    #[test]
    fn test_render_page_escapes_vendor_text() {
        let mut product = make_test_product();
        product.title = r#"<script>alert("x")</script> & more"#.to_string();

        let html = render_page("t", "d", "now", &[product]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_render_page_escapes_title_and_desc() {
        let html = render_page("a < b", r#"say "hi""#, "now", &[]);
        assert!(html.contains("<title>a &lt; b</title>"));
        assert!(!html.contains("<title>a < b</title>"));
    }

    #[test]
    fn test_render_page_empty_list() {
        let html = render_page("t", "d", "now", &[]);
        assert!(html.contains("No items returned"));
        assert!(!html.contains("View on Amazon"));
    }

    #[test]
    fn test_render_page_without_image() {
        let mut product = make_test_product();
        product.image_url = None;

        let html = render_page("t", "d", "now", &[product]);
        assert!(!html.contains("<img"));
        assert!(html.contains("View on Amazon"));
    }
}
