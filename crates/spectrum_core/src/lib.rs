pub mod aggregate;
pub mod error;
pub mod metrics;
pub mod news;
pub mod types;

pub use aggregate::{category_histogram, source_histogram, MetricsSummary};
pub use error::{Error, Result};
pub use metrics::MetricsBackend;
pub use news::{HeadlinesQuery, NewsProvider};
pub use types::{Article, CategoryCount, Headlines, Metrics, NewMetric, Source, SourceCount};

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Error, MetricsBackend, NewsProvider, Result};
}
