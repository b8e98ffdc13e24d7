//! Display-surface capability consumed by the controller.

use crate::{paginate::PageButton, render::ProductRow, sort::SortControl};

/// Named display regions a listing can update.
///
/// Every method defaults to a no-op so a surface only implements the regions it
/// actually has; updates aimed at missing regions are skipped.
pub trait CatalogView {
    fn show_loading(&mut self, _visible: bool) {}

    fn show_error(&mut self, _message: &str) {}

    fn clear_error(&mut self) {}

    fn set_counts(&mut self, _total: usize, _displayed: usize) {}

    fn show_table(&mut self, _visible: bool) {}

    fn show_empty_state(&mut self, _visible: bool) {}

    fn render_rows(&mut self, _rows: &[ProductRow]) {}

    /// An empty slice clears the pagination container.
    fn render_pagination(&mut self, _buttons: &[PageButton]) {}

    /// Marks exactly one sort control active, or none.
    fn set_active_sort(&mut self, _active: Option<SortControl>) {}

    fn sync_page_size(&mut self, _items_per_page: usize) {}

    fn scroll_to_top(&mut self) {}
}
