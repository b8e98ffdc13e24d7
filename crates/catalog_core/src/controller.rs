//! Event handling: wires state transitions to the display surface.

use shared::error::CatalogError;
use tracing::{debug, info, warn};

use crate::{
    fetch::CatalogSource,
    paginate::{page_buttons, PageButton},
    render::{render_rows, ProductRow},
    sort::{SortConfig, SortDirection, SortField},
    state::CatalogState,
    view::CatalogView,
};

/// Prefix of the banner shown when the catalog cannot be fetched.
pub const FETCH_ERROR_PREFIX: &str = "Lỗi khi lấy dữ liệu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Search(String),
    Sort {
        field: SortField,
        direction: SortDirection,
    },
    GoToPage(usize),
    SetItemsPerPage(usize),
}

pub struct CatalogController<S, V> {
    source: S,
    view: V,
    state: CatalogState,
}

impl<S: CatalogSource, V: CatalogView> CatalogController<S, V> {
    pub fn new(source: S, view: V) -> Self {
        Self::with_state(source, view, CatalogState::default())
    }

    pub fn with_state(source: S, view: V, state: CatalogState) -> Self {
        Self {
            source,
            view,
            state,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fetches the collection once and installs it.
    ///
    /// On failure the previous state is kept, the error banner is filled and the
    /// error is also returned to the caller. The loading indicator is hidden
    /// either way.
    pub async fn load(&mut self) -> Result<usize, CatalogError> {
        self.view.show_loading(true);
        self.view.show_table(false);
        self.view.clear_error();

        let outcome = self.source.fetch_products().await;
        let result = match outcome {
            Ok(products) => {
                let count = products.len();
                info!(count, "catalog loaded");
                self.state.replace_products(products);
                self.view.set_active_sort(None);
                Ok(count)
            }
            Err(err) => {
                warn!(code = ?err.code(), error = %err, "catalog fetch failed");
                self.view.show_error(&format!("{FETCH_ERROR_PREFIX}: {err}"));
                Err(err)
            }
        };

        self.view.show_loading(false);
        self.refresh_display();
        result
    }

    pub fn handle(&mut self, event: CatalogEvent) -> Result<(), CatalogError> {
        match event {
            CatalogEvent::Search(query) => self.search(&query),
            CatalogEvent::Sort { field, direction } => self.sort(field, direction),
            CatalogEvent::GoToPage(page) => self.go_to_page(page),
            CatalogEvent::SetItemsPerPage(items_per_page) => {
                return self.set_items_per_page(items_per_page);
            }
        }
        Ok(())
    }

    pub fn search(&mut self, raw_query: &str) {
        self.state.apply_search(raw_query);
        debug!(
            query = raw_query,
            matches = self.state.filtered_products().len(),
            "search applied"
        );
        self.refresh_display();
    }

    pub fn sort(&mut self, field: SortField, direction: SortDirection) {
        let config = SortConfig::new(field, direction);
        self.state.apply_sort(config);
        debug!(?field, ?direction, "sort applied");
        self.refresh_display();
        self.view.set_active_sort(config.active_control());
    }

    pub fn go_to_page(&mut self, page: usize) {
        let selected = self.state.set_page(page);
        if selected != page {
            debug!(requested = page, selected, "page request clamped");
        }
        self.refresh_display();
        self.view.scroll_to_top();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.current_page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.current_page().saturating_sub(1));
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), CatalogError> {
        if let Err(err) = self.state.set_items_per_page(items_per_page) {
            warn!(items_per_page, "rejected page size");
            return Err(err);
        }
        self.view.sync_page_size(items_per_page);
        self.refresh_display();
        Ok(())
    }

    pub fn visible_rows(&self) -> Vec<ProductRow> {
        render_rows(self.state.visible_products())
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.state.current_page(), self.state.total_pages())
    }

    /// Pushes counts, rows and pagination for the current state to the view.
    pub fn refresh_display(&mut self) {
        self.view.set_counts(
            self.state.all_products().len(),
            self.state.filtered_products().len(),
        );

        if self.state.filtered_products().is_empty() {
            self.view.show_table(false);
            self.view.show_empty_state(true);
            self.view.render_pagination(&[]);
            return;
        }

        self.view.show_table(true);
        self.view.show_empty_state(false);
        let rows = self.visible_rows();
        self.view.render_rows(&rows);
        let buttons = self.page_buttons();
        self.view.render_pagination(&buttons);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
