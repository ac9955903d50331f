pub mod http_metrics;
pub mod memory;
pub mod newsapi;

pub use http_metrics::HttpMetricsBackend;
pub use memory::{MemoryMetricsBackend, MemoryNewsProvider};
pub use newsapi::NewsApiClient;

/// Parse a base URL so that relative joins append to its path instead of
/// replacing the last segment.
pub(crate) fn base_url(raw: &str) -> spectrum_core::Result<url::Url> {
    let mut url = url::Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::base_url;

    #[test]
    fn test_base_url_keeps_version_segment() {
        let url = base_url("https://newsapi.org/v2").unwrap();
        assert_eq!(
            url.join("top-headlines").unwrap().as_str(),
            "https://newsapi.org/v2/top-headlines"
        );
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(base_url("not a url").is_err());
    }
}
