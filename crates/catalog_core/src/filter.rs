use shared::domain::Product;

/// Lowercased, trimmed form of a raw search string.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn title_matches(product: &Product, normalized_query: &str) -> bool {
    product.title.to_lowercase().contains(normalized_query)
}

/// Products whose title contains `raw_query`, case-insensitively, in source order.
/// A blank query keeps everything.
pub fn filter_products(products: &[Product], raw_query: &str) -> Vec<Product> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| title_matches(product, &query))
        .cloned()
        .collect()
}
