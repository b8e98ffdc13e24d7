//! Drives image fallback chains against real load attempts.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::image::{ImageFallbackChain, ImageLoadState};

/// Attempts to load one image source.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, src: &str) -> bool;
}

/// Upper bound on one image request; a hung host counts as a failed load.
pub const IMAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Treats a 2xx answer to a HEAD request as a successful load.
pub struct HttpImageLoader {
    http: Client,
}

impl HttpImageLoader {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(IMAGE_LOAD_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http))
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, src: &str) -> bool {
        match self.http.head(src).send().await {
            Ok(res) => {
                let ok = res.status().is_success();
                if !ok {
                    debug!(src, status = res.status().as_u16(), "image source rejected");
                }
                ok
            }
            Err(err) => {
                debug!(src, error = %err, "image source unreachable");
                false
            }
        }
    }
}

/// Feeds load results into `chain` until it settles or gives up.
/// Returns the source that loaded, if any.
pub async fn settle_chain(
    loader: &dyn ImageLoader,
    chain: &mut ImageFallbackChain,
) -> Option<String> {
    while let ImageLoadState::Loading(src) = chain.state().clone() {
        if loader.load(&src).await {
            chain.on_load_success();
        } else {
            chain.on_load_error();
        }
    }
    match chain.state() {
        ImageLoadState::Settled(src) => Some(src.clone()),
        _ => None,
    }
}
