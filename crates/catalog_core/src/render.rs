//! Projection of products into display rows.

use shared::domain::{Product, ProductId};

use crate::image::ImageFallbackChain;

pub const CATEGORY_PLACEHOLDER: &str = "N/A";
pub const DESCRIPTION_PLACEHOLDER: &str = "No description";
/// Descriptions longer than this many characters are clipped with an ellipsis.
pub const DESCRIPTION_MAX_CHARS: usize = 120;

/// One table row. Text fields are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub image: ImageFallbackChain,
    pub alt: String,
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: ImageFallbackChain::for_product(product),
            alt: product.title.clone(),
            title: escape_html(&product.title),
            price: format_price(product.price),
            category: escape_html(product.category_name().unwrap_or(CATEGORY_PLACEHOLDER)),
            description: escape_html(&truncate_chars(
                product.description_text().unwrap_or(DESCRIPTION_PLACEHOLDER),
                DESCRIPTION_MAX_CHARS,
            )),
        }
    }
}

pub fn render_rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from_product).collect()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `$` plus the price to two decimals. Exact half-cent ties round away from
/// zero and negative zero prints unsigned.
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let magnitude = price.abs();
    let cents = magnitude * 100.0;
    // Only multiples of 1/8 can sit exactly on a half cent; for those the
    // scaled value is exact too.
    let amount = if (magnitude * 8.0).fract() == 0.0 && cents.fract() == 0.5 {
        cents.ceil() / 100.0
    } else {
        magnitude
    };
    format!("${sign}{amount:.2}")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{Category, ProductImages};

    use super::*;

    #[test]
    fn escapes_markup_in_text_fields() {
        let product = Product {
            id: ProductId(9),
            title: "<script>alert('x')</script>".into(),
            price: 5.0,
            category: Some(Category {
                name: Some("Toys & \"Games\"".into()),
            }),
            description: Some("<b>bold</b>".into()),
            images: ProductImages::None,
        };
        let row = ProductRow::from_product(&product);
        assert_eq!(
            row.title,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(row.category, "Toys &amp; &quot;Games&quot;");
        assert_eq!(row.description, "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(row.alt, product.title);
    }

    #[test]
    fn formats_price_with_two_decimals() {
        assert_eq!(format_price(90.0), "$90.00");
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn half_cent_ties_round_up_like_the_storefront() {
        assert_eq!(format_price(10.125), "$10.13");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(-10.125), "$-10.13");
        // 1.005 is stored just below the tie.
        assert_eq!(format_price(1.005), "$1.00");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_price(-0.0), "$0.00");
        assert_eq!(format_price(-2.5), "$-2.50");
    }

    #[test]
    fn absent_fields_use_placeholders() {
        let product = Product {
            id: ProductId(1),
            title: "Plain".into(),
            price: 1.0,
            category: None,
            description: None,
            images: ProductImages::None,
        };
        let row = ProductRow::from_product(&product);
        assert_eq!(row.category, CATEGORY_PLACEHOLDER);
        assert_eq!(row.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(row.image.current_src(), "https://picsum.photos/seed/1/80/80");
    }

    #[test]
    fn clips_long_descriptions_on_char_boundary() {
        let long = "é".repeat(DESCRIPTION_MAX_CHARS + 10);
        let clipped = truncate_chars(&long, DESCRIPTION_MAX_CHARS);
        assert_eq!(clipped.chars().count(), DESCRIPTION_MAX_CHARS + 1);
        assert!(clipped.ends_with('…'));
        assert_eq!(truncate_chars("short", DESCRIPTION_MAX_CHARS), "short");
    }
}
