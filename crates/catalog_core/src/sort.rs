//! Field/direction ordering of product collections.

use std::{cmp::Ordering, fmt, str::FromStr};

use shared::{domain::Product, error::CatalogError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active ordering. `field == None` means the collection keeps fetch/filter order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    pub fn active_control(&self) -> Option<SortControl> {
        self.field
            .map(|field| SortControl::from_parts(field, self.direction))
    }
}

/// The four sort buttons a listing exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortControl {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortControl {
    pub const ALL: [SortControl; 4] = [
        SortControl::PriceAsc,
        SortControl::PriceDesc,
        SortControl::TitleAsc,
        SortControl::TitleDesc,
    ];

    pub fn from_parts(field: SortField, direction: SortDirection) -> Self {
        match (field, direction) {
            (SortField::Price, SortDirection::Asc) => Self::PriceAsc,
            (SortField::Price, SortDirection::Desc) => Self::PriceDesc,
            (SortField::Title, SortDirection::Asc) => Self::TitleAsc,
            (SortField::Title, SortDirection::Desc) => Self::TitleDesc,
        }
    }

    pub fn parts(self) -> (SortField, SortDirection) {
        match self {
            Self::PriceAsc => (SortField::Price, SortDirection::Asc),
            Self::PriceDesc => (SortField::Price, SortDirection::Desc),
            Self::TitleAsc => (SortField::Title, SortDirection::Asc),
            Self::TitleDesc => (SortField::Title, SortDirection::Desc),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "title" | "name" => Ok(Self::Title),
            _ => Err(CatalogError::UnknownSortField(raw.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CatalogError::UnknownSortDirection(raw.to_string())),
        }
    }
}

impl FromStr for SortControl {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((field, direction)) = raw.trim().split_once(['-', ':']) else {
            return Err(CatalogError::UnknownSortField(raw.to_string()));
        };
        Ok(Self::from_parts(field.parse()?, direction.parse()?))
    }
}

pub fn compare_products(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        // NaN prices have no order; treat them as ties.
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Reorders `products` in place. Does nothing when no field is active.
pub fn sort_products(products: &mut [Product], config: SortConfig) {
    let Some(field) = config.field else {
        return;
    };
    products.sort_by(|a, b| {
        let ordering = compare_products(a, b, field);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
