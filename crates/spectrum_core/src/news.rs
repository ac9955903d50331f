use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::Headlines;
use crate::Result;

/// Filters for a top-headlines request. Unset fields are left to the
/// provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<String>,
    pub page_size: Option<u32>,
}

impl HeadlinesQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch one page of top headlines, in the provider's display order
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
