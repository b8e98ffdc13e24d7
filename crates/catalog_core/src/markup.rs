//! HTML rendering of rows and pagination, plus an in-memory HTML surface.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{
    paginate::PageButton,
    render::{escape_html, ProductRow},
    sort::SortControl,
    view::CatalogView,
};

/// Characters left alone by browser `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn row_html(row: &ProductRow) -> String {
    let candidates = serde_json::to_string(row.image.candidates()).unwrap_or_else(|_| "[]".into());
    let encoded_candidates = utf8_percent_encode(&candidates, URI_COMPONENT).to_string();

    format!(
        r#"<tr>
    <td><img src="{src}" alt="{alt}" class="product-image" data-images="{encoded_candidates}" data-index="{index}"></td>
    <td><div class="product-info"><span class="product-title"><strong>{title}</strong></span></div></td>
    <td><span class="product-price">{price}</span></td>
    <td>{category}</td>
    <td><p class="product-description">{description}</p></td>
</tr>"#,
        src = escape_html(row.image.current_src()),
        alt = escape_html(&row.alt),
        index = row.image.cursor(),
        title = row.title,
        price = row.price,
        category = row.category,
        description = row.description,
    )
}

pub fn rows_html(rows: &[ProductRow]) -> String {
    rows.iter().map(row_html).collect::<Vec<_>>().join("\n")
}

pub fn pagination_html(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|button| match *button {
            PageButton::Previous { target, disabled } => button_html("⬅", target, disabled, false),
            PageButton::Next { target, disabled } => button_html("➡", target, disabled, false),
            PageButton::Page { number, active } => {
                button_html(&number.to_string(), number, false, active)
            }
            PageButton::Ellipsis => "<span>...</span>".to_string(),
        })
        .collect::<Vec<_>>()
        .join("")
}

fn button_html(label: &str, target: usize, disabled: bool, active: bool) -> String {
    let class = if active { r#" class="active""# } else { "" };
    let disabled = if disabled { " disabled" } else { "" };
    format!(r#"<button data-page="{target}"{class}{disabled}>{label}</button>"#)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    PageSizeSelect,
    Sort(SortControl),
    TableBody,
    Pagination,
    ProductTable,
    Loading,
    NoData,
    Error,
    TotalCount,
    DisplayCount,
}

impl RegionId {
    pub fn all() -> Vec<RegionId> {
        let mut ids = vec![
            RegionId::PageSizeSelect,
            RegionId::TableBody,
            RegionId::Pagination,
            RegionId::ProductTable,
            RegionId::Loading,
            RegionId::NoData,
            RegionId::Error,
            RegionId::TotalCount,
            RegionId::DisplayCount,
        ];
        ids.extend(SortControl::ALL.into_iter().map(RegionId::Sort));
        ids
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub content: String,
    pub visible: bool,
    pub active: bool,
}

/// Stand-in for a page document: a set of named regions, any of which may be missing.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    regions: HashMap<RegionId, Region>,
    scroll_requests: usize,
}

impl HtmlSurface {
    pub fn new(present: impl IntoIterator<Item = RegionId>) -> Self {
        Self {
            regions: present
                .into_iter()
                .map(|id| (id, Region::default()))
                .collect(),
            scroll_requests: 0,
        }
    }

    pub fn with_all_regions() -> Self {
        Self::new(RegionId::all())
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    fn update(&mut self, id: RegionId, apply: impl FnOnce(&mut Region)) {
        if let Some(region) = self.regions.get_mut(&id) {
            apply(region);
        }
    }

    /// Visible regions assembled into one fragment, in page order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let shown = |id: RegionId| self.region(id).filter(|region| region.visible);

        if let Some(error) = self.region(RegionId::Error).filter(|r| !r.content.is_empty()) {
            out.push_str(&format!(
                "<div id=\"errorContainer\"><div class=\"error\">{}</div></div>\n",
                error.content
            ));
        }
        if shown(RegionId::Loading).is_some() {
            out.push_str("<div id=\"loadingContainer\">Loading...</div>\n");
        }
        if let (Some(total), Some(displayed)) = (
            self.region(RegionId::TotalCount),
            self.region(RegionId::DisplayCount),
        ) {
            out.push_str(&format!(
                "<p class=\"counts\"><span id=\"displayCount\">{}</span> / <span id=\"totalCount\">{}</span></p>\n",
                displayed.content, total.content
            ));
        }
        if shown(RegionId::ProductTable).is_some() {
            let body = self
                .region(RegionId::TableBody)
                .map(|r| r.content.as_str())
                .unwrap_or_default();
            out.push_str(&format!(
                "<table id=\"productTable\"><tbody id=\"tableBody\">\n{body}\n</tbody></table>\n"
            ));
        }
        if shown(RegionId::NoData).is_some() {
            out.push_str("<div id=\"noDataContainer\">No products found</div>\n");
        }
        if let Some(pagination) = self.region(RegionId::Pagination) {
            out.push_str(&format!(
                "<div id=\"pagination\">{}</div>\n",
                pagination.content
            ));
        }
        out
    }
}

impl CatalogView for HtmlSurface {
    fn show_loading(&mut self, visible: bool) {
        self.update(RegionId::Loading, |r| r.visible = visible);
    }

    fn show_error(&mut self, message: &str) {
        let message = escape_html(message);
        self.update(RegionId::Error, |r| {
            r.content = message;
            r.visible = true;
        });
    }

    fn clear_error(&mut self) {
        self.update(RegionId::Error, |r| {
            r.content.clear();
            r.visible = false;
        });
    }

    fn set_counts(&mut self, total: usize, displayed: usize) {
        self.update(RegionId::TotalCount, |r| r.content = total.to_string());
        self.update(RegionId::DisplayCount, |r| r.content = displayed.to_string());
    }

    fn show_table(&mut self, visible: bool) {
        self.update(RegionId::ProductTable, |r| r.visible = visible);
    }

    fn show_empty_state(&mut self, visible: bool) {
        self.update(RegionId::NoData, |r| r.visible = visible);
    }

    fn render_rows(&mut self, rows: &[ProductRow]) {
        let html = rows_html(rows);
        self.update(RegionId::TableBody, |r| r.content = html);
    }

    fn render_pagination(&mut self, buttons: &[PageButton]) {
        let html = pagination_html(buttons);
        self.update(RegionId::Pagination, |r| r.content = html);
    }

    fn set_active_sort(&mut self, active: Option<SortControl>) {
        for control in SortControl::ALL {
            self.update(RegionId::Sort(control), |r| {
                r.active = active == Some(control)
            });
        }
    }

    fn sync_page_size(&mut self, items_per_page: usize) {
        self.update(RegionId::PageSizeSelect, |r| {
            r.content = items_per_page.to_string()
        });
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requests += 1;
    }
}
