use std::sync::Arc;

use spectrum_core::{Error, MetricsBackend, NewsProvider, Result};
use tracing::{info, warn};

pub mod backends;

pub use backends::*;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2";

/// Build the news provider for the given settings. Without an API key the
/// site runs offline on an empty in-memory provider.
pub fn create_news_provider(
    api_url: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn NewsProvider>> {
    match api_key {
        Some(key) if !key.is_empty() => {
            let url = api_url.unwrap_or(DEFAULT_NEWS_API_URL);
            info!("📰 Using news API at {}", url);
            Ok(Arc::new(NewsApiClient::new(url, key)?))
        }
        _ => {
            warn!("No news API key configured, serving empty headlines");
            Ok(Arc::new(MemoryNewsProvider::empty()))
        }
    }
}

/// Build the metrics backend named by `kind` (`memory` or `http`).
pub fn create_metrics_backend(kind: &str, url: Option<&str>) -> Result<Arc<dyn MetricsBackend>> {
    match kind {
        "memory" => {
            info!("📊 Using in-memory metrics backend");
            Ok(Arc::new(MemoryMetricsBackend::new()))
        }
        "http" => {
            let url = url.ok_or_else(|| {
                Error::Config("The http metrics backend needs a backend URL".to_string())
            })?;
            info!("📊 Using metrics backend at {}", url);
            Ok(Arc::new(HttpMetricsBackend::new(url)?))
        }
        other => Err(Error::Config(format!(
            "Unknown metrics backend: {} (expected memory or http)",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_metrics_backend, create_news_provider};
}
