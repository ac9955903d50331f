use async_trait::async_trait;
use spectrum_core::{Headlines, HeadlinesQuery, Metrics, MetricsBackend, NewMetric, NewsProvider, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Serves a fixed page of headlines. Used when no news API is configured
/// and in tests.
pub struct MemoryNewsProvider {
    headlines: Headlines,
}

impl MemoryNewsProvider {
    pub fn new(headlines: Headlines) -> Self {
        Self { headlines }
    }

    pub fn empty() -> Self {
        Self::new(Headlines {
            status: "ok".to_string(),
            ..Default::default()
        })
    }
}

#[async_trait]
impl NewsProvider for MemoryNewsProvider {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines> {
        let mut headlines = self.headlines.clone();
        if let Some(limit) = query.page_size {
            headlines.articles.truncate(limit as usize);
        }
        Ok(headlines)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

pub struct MetricsStore {
    records: Vec<Metrics>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn record(&mut self, user_id: u64, metric: &NewMetric) -> Metrics {
        let record = Metrics::single_read(user_id, metric);
        self.records.push(record.clone());
        record
    }

    pub fn for_user(&self, user_id: u64) -> Vec<Metrics> {
        self.records
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Default)]
pub struct MemoryMetricsBackend {
    store: Arc<RwLock<MetricsStore>>,
}

impl MemoryMetricsBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetricsBackend for MemoryMetricsBackend {
    async fn submit(&self, user_id: u64, metric: &NewMetric) -> Result<Metrics> {
        let mut store = self.store.write().await;
        Ok(store.record(user_id, metric))
    }

    async fn metrics_for_user(&self, user_id: u64) -> Result<Vec<Metrics>> {
        let store = self.store.read().await;
        Ok(store.for_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::{category_histogram, Article};

    #[tokio::test]
    async fn test_same_metric_twice_gives_two_records() {
        let backend = MemoryMetricsBackend::new();
        let metric = NewMetric {
            category: "tech".to_string(),
            source: "bbc".to_string(),
        };

        let first = backend.submit(42, &metric).await.unwrap();
        let second = backend.submit(42, &metric).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.category_to_num_articles.article_count, 1);

        let records = backend.metrics_for_user(42).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(category_histogram(&records).get("tech"), Some(&2));
    }

    #[tokio::test]
    async fn test_records_are_per_user() {
        let backend = MemoryMetricsBackend::new();
        let metric = NewMetric {
            category: "sports".to_string(),
            source: "espn".to_string(),
        };
        backend.submit(1, &metric).await.unwrap();
        backend.submit(2, &metric).await.unwrap();

        assert_eq!(backend.metrics_for_user(1).await.unwrap().len(), 1);
        assert!(backend.metrics_for_user(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_news_provider_page_size() {
        let provider = MemoryNewsProvider::new(Headlines {
            status: "ok".to_string(),
            total_results: 3,
            articles: vec![Article::default(), Article::default(), Article::default()],
        });

        let query = HeadlinesQuery {
            page_size: Some(2),
            ..Default::default()
        };
        let headlines = provider.top_headlines(&query).await.unwrap();
        assert_eq!(headlines.articles.len(), 2);
        assert_eq!(headlines.total_results, 3);
    }
}
