use shared::{domain::Product, error::CatalogError};

use crate::{
    filter::filter_products,
    paginate::{clamp_page, page_slice, total_pages},
    sort::{sort_products, SortConfig},
};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Session-local listing state. `filtered_products` is always drawn from
/// `all_products` and `current_page` always stays within the page range.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    all_products: Vec<Product>,
    filtered_products: Vec<Product>,
    current_page: usize,
    items_per_page: usize,
    sort_config: SortConfig,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            all_products: Vec::new(),
            filtered_products: Vec::new(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_config: SortConfig::default(),
        }
    }
}

impl CatalogState {
    pub fn with_items_per_page(items_per_page: usize) -> Result<Self, CatalogError> {
        let mut state = Self::default();
        state.set_items_per_page(items_per_page)?;
        Ok(state)
    }

    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort_config
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_products.len(), self.items_per_page)
    }

    pub fn visible_products(&self) -> &[Product] {
        page_slice(&self.filtered_products, self.current_page, self.items_per_page)
    }

    /// Installs a freshly fetched collection: unfiltered, unsorted, first page.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.filtered_products = products.clone();
        self.all_products = products;
        self.current_page = 1;
        self.sort_config = SortConfig::default();
    }

    pub fn apply_search(&mut self, raw_query: &str) {
        self.current_page = 1;
        self.filtered_products = filter_products(&self.all_products, raw_query);
        sort_products(&mut self.filtered_products, self.sort_config);
    }

    pub fn apply_sort(&mut self, config: SortConfig) {
        self.sort_config = config;
        sort_products(&mut self.filtered_products, config);
    }

    /// Moves to `page`, clamped into range. Returns the page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = clamp_page(page, self.total_pages());
        self.current_page
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), CatalogError> {
        if items_per_page == 0 {
            return Err(CatalogError::InvalidPageSize(items_per_page));
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{ProductId, ProductImages};

    use crate::sort::{SortDirection, SortField};

    use super::*;

    fn products(count: i64) -> Vec<Product> {
        (1..=count)
            .map(|id| Product {
                id: ProductId(id),
                title: format!("Item {id}"),
                price: id as f64,
                category: None,
                description: None,
                images: ProductImages::None,
            })
            .collect()
    }

    #[test]
    fn replacing_products_resets_view() {
        let mut state = CatalogState::default();
        state.replace_products(products(30));
        state.apply_sort(SortConfig::new(SortField::Price, SortDirection::Desc));
        state.set_page(3);

        state.replace_products(products(5));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort_config(), SortConfig::default());
        assert_eq!(state.filtered_products(), state.all_products());
    }

    #[test]
    fn search_keeps_active_sort() {
        let mut state = CatalogState::default();
        state.replace_products(products(12));
        state.apply_sort(SortConfig::new(SortField::Price, SortDirection::Desc));
        state.set_page(2);

        state.apply_search("item 1");
        let ids: Vec<i64> = state.filtered_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![12, 11, 10, 1]);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_stays_in_range() {
        let mut state = CatalogState::default();
        assert_eq!(state.set_page(4), 1);

        state.replace_products(products(23));
        assert_eq!(state.set_page(0), 1);
        assert_eq!(state.set_page(99), 3);
        assert_eq!(state.visible_products().len(), 3);
    }

    #[test]
    fn rejects_zero_page_size_without_change() {
        let mut state = CatalogState::default();
        state.replace_products(products(23));
        state.set_page(2);

        assert!(matches!(
            state.set_items_per_page(0),
            Err(CatalogError::InvalidPageSize(0))
        ));
        assert_eq!(state.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(state.current_page(), 2);

        state.set_items_per_page(5).expect("valid page size");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 5);
    }
}
