//! Plain-text display surface.

use std::fmt::Write as _;

use catalog_core::{CatalogView, HtmlSurface, PageButton, ProductRow, SortControl};

const TITLE_WIDTH: usize = 36;
const CATEGORY_WIDTH: usize = 14;

/// Anything that can print its current regions.
pub trait Snapshot {
    fn snapshot(&self) -> String;
}

impl Snapshot for HtmlSurface {
    fn snapshot(&self) -> String {
        self.to_html()
    }
}

#[derive(Debug, Default)]
pub struct TerminalView {
    loading: bool,
    error: Option<String>,
    counts: (usize, usize),
    table_visible: bool,
    empty_visible: bool,
    rows: Vec<ProductRow>,
    pagination: Vec<PageButton>,
    active_sort: Option<SortControl>,
    items_per_page: Option<usize>,
}

impl CatalogView for TerminalView {
    fn show_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn set_counts(&mut self, total: usize, displayed: usize) {
        self.counts = (total, displayed);
    }

    fn show_table(&mut self, visible: bool) {
        self.table_visible = visible;
    }

    fn show_empty_state(&mut self, visible: bool) {
        self.empty_visible = visible;
    }

    fn render_rows(&mut self, rows: &[ProductRow]) {
        self.rows = rows.to_vec();
    }

    fn render_pagination(&mut self, buttons: &[PageButton]) {
        self.pagination = buttons.to_vec();
    }

    fn set_active_sort(&mut self, active: Option<SortControl>) {
        self.active_sort = active;
    }

    fn sync_page_size(&mut self, items_per_page: usize) {
        self.items_per_page = Some(items_per_page);
    }
}

impl Snapshot for TerminalView {
    fn snapshot(&self) -> String {
        let mut out = String::new();
        if let Some(error) = &self.error {
            let _ = writeln!(out, "! {error}");
        }
        if self.loading {
            let _ = writeln!(out, "loading...");
        }

        let (total, displayed) = self.counts;
        let _ = write!(out, "showing {displayed} of {total} products");
        if let Some(control) = self.active_sort {
            let _ = write!(out, " | sort: {control}");
        }
        if let Some(size) = self.items_per_page {
            let _ = write!(out, " | {size} per page");
        }
        out.push('\n');

        if self.empty_visible {
            let _ = writeln!(out, "No products found.");
        }
        if self.table_visible {
            let _ = writeln!(
                out,
                "{:>5}  {:<TITLE_WIDTH$}  {:>10}  {:<CATEGORY_WIDTH$}  image",
                "id", "title", "price", "category"
            );
            for row in &self.rows {
                let _ = writeln!(
                    out,
                    "{:>5}  {:<TITLE_WIDTH$}  {:>10}  {:<CATEGORY_WIDTH$}  {}",
                    row.id.0,
                    clip(&unescape_html(&row.title), TITLE_WIDTH),
                    row.price,
                    clip(&unescape_html(&row.category), CATEGORY_WIDTH),
                    row.image.current_src(),
                );
            }
        }
        if !self.pagination.is_empty() {
            let _ = writeln!(out, "{}", pagination_line(&self.pagination));
        }
        out
    }
}

fn pagination_line(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|button| match *button {
            PageButton::Previous { disabled, .. } => (if disabled { "  " } else { "⬅ " }).to_string(),
            PageButton::Next { disabled, .. } => (if disabled { "" } else { "➡" }).to_string(),
            PageButton::Page { number, active: true } => format!("[{number}] "),
            PageButton::Page { number, .. } => format!("{number} "),
            PageButton::Ellipsis => "... ".to_string(),
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn clip(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => {
            let keep = text[..cut].chars().take(width.saturating_sub(1)).collect::<String>();
            format!("{keep}…")
        }
        None => text.to_string(),
    }
}

/// Reverses the entity escaping applied to row text for plain-text output.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
