//! Image source resolution and the per-image fallback state machine.

use shared::domain::{Product, ProductImages};

/// Substrings of catalog image URLs known to point at dead placeholders.
pub const BROKEN_IMAGE_MARKERS: &[&str] = &["3a98.png", "b7105.png", "placeimg.com"];

const STRIPPED_CHARS: &[char] = &['[', ']', '"', '\\'];

/// Cleans one raw image entry. Returns an empty string when nothing usable remains.
pub fn clean_image_url(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let trimmed = stripped.trim();
    let trimmed = trimmed.strip_prefix(',').unwrap_or(trimmed);
    match trimmed.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => trimmed.to_string(),
    }
}

pub fn is_broken_image_url(url: &str) -> bool {
    BROKEN_IMAGE_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Ordered, cleaned image URLs worth trying for a product.
pub fn image_candidates(images: &ProductImages) -> Vec<String> {
    images
        .raw_entries()
        .iter()
        .map(|raw| clean_image_url(raw))
        .filter(|url| !url.is_empty() && url.starts_with("http") && !is_broken_image_url(url))
        .collect()
}

/// Stable per-product stand-in used when no candidate survives cleaning.
pub fn fallback_image_url(product: &Product) -> String {
    let seed = if product.id.0 == 0 { 1 } else { product.id.0 };
    format!("https://picsum.photos/seed/{seed}/80/80")
}

/// Last-resort placeholder, keyed on the alt text length in UTF-16 code units.
pub fn placeholder_image_url(alt: &str) -> String {
    format!(
        "https://loremflickr.com/80/80/product?lock={}",
        alt.encode_utf16().count()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadState {
    Loading(String),
    Settled(String),
    /// The final placeholder failed too. It stays as the shown source and
    /// nothing more is attempted.
    Failed(String),
}

/// Fallback chain of one rendered image.
///
/// Starts on the first candidate (or the product's deterministic fallback when
/// there are none), walks the candidates on each load error, then tries the
/// placeholder once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallbackChain {
    candidates: Vec<String>,
    cursor: usize,
    placeholder: String,
    on_placeholder: bool,
    state: ImageLoadState,
}

impl ImageFallbackChain {
    pub fn new(candidates: Vec<String>, initial_fallback: String, alt: &str) -> Self {
        let initial = candidates.first().cloned().unwrap_or(initial_fallback);
        Self {
            candidates,
            cursor: 0,
            placeholder: placeholder_image_url(alt),
            on_placeholder: false,
            state: ImageLoadState::Loading(initial),
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::new(
            image_candidates(&product.images),
            fallback_image_url(product),
            &product.title,
        )
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> &ImageLoadState {
        &self.state
    }

    pub fn current_src(&self) -> &str {
        match &self.state {
            ImageLoadState::Loading(src)
            | ImageLoadState::Settled(src)
            | ImageLoadState::Failed(src) => src,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, ImageLoadState::Loading(_))
    }

    pub fn on_load_success(&mut self) {
        if let ImageLoadState::Loading(src) = &self.state {
            self.state = ImageLoadState::Settled(src.clone());
        }
    }

    /// Advances after a failed load and returns the next source to try.
    pub fn on_load_error(&mut self) -> Option<&str> {
        let ImageLoadState::Loading(src) = &self.state else {
            return None;
        };
        if self.on_placeholder {
            self.state = ImageLoadState::Failed(src.clone());
            return None;
        }
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
            self.state = ImageLoadState::Loading(self.candidates[self.cursor].clone());
        } else {
            self.on_placeholder = true;
            self.state = ImageLoadState::Loading(self.placeholder.clone());
        }
        Some(self.current_src())
    }
}
