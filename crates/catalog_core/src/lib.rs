//! Searchable, sortable, paginated product listing over a remote catalog.

pub mod controller;
pub mod fetch;
pub mod filter;
pub mod image;
pub mod markup;
pub mod paginate;
pub mod probe;
pub mod render;
pub mod sort;
pub mod state;
pub mod view;

pub use controller::{CatalogController, CatalogEvent};
pub use fetch::{CatalogSource, HttpCatalogSource, DEFAULT_CATALOG_URL};
pub use image::{ImageFallbackChain, ImageLoadState};
pub use markup::{HtmlSurface, RegionId};
pub use paginate::PageButton;
pub use probe::{settle_chain, HttpImageLoader, ImageLoader};
pub use render::ProductRow;
pub use sort::{SortConfig, SortControl, SortDirection, SortField};
pub use state::CatalogState;
pub use view::CatalogView;
