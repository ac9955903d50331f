use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// The news API sends `null` where a value is unknown. Every field of the
/// model is always present, so a `null` collapses to the field default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A news publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    #[serde(deserialize_with = "null_as_default")]
    pub source: Source,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url_to_image: String,
    /// Opaque timestamp, format owned by the news API.
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Local annotation, never sent by the news API.
    #[serde(deserialize_with = "null_as_default")]
    pub spectrum_enabled: bool,
}

/// One page of a headlines fetch. `total_results` comes from the API and
/// may exceed `articles.len()` when the API paginates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Headlines {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

impl Headlines {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    pub fn flagged_urls(&self) -> HashSet<String> {
        self.articles
            .iter()
            .filter(|a| a.spectrum_enabled)
            .map(|a| a.url.clone())
            .collect()
    }

    /// Re-applies the local `spectrum_enabled` flag after a refetch.
    /// Flags are only ever set here, never cleared, and article order is
    /// left untouched.
    pub fn carry_spectrum_flags(&mut self, flagged: &HashSet<String>) {
        for article in self.articles.iter_mut() {
            if flagged.contains(&article.url) {
                article.spectrum_enabled = true;
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryCount {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub article_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceCount {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub article_count: u64,
}

/// A single per-user reading observation: one category pair and one source
/// pair. Histograms are built from a sequence of these, see
/// [`crate::aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metrics {
    #[serde(rename = "userID", deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub category_to_num_articles: CategoryCount,
    #[serde(deserialize_with = "null_as_default")]
    pub source_to_num_articles: SourceCount,
}

impl Metrics {
    /// The record a backend stores for one reading event.
    pub fn single_read(user_id: u64, metric: &NewMetric) -> Self {
        Self {
            user_id,
            category_to_num_articles: CategoryCount {
                category: metric.category.clone(),
                article_count: 1,
            },
            source_to_num_articles: SourceCount {
                source: metric.source.clone(),
                article_count: 1,
            },
        }
    }
}

/// Request payload proposing that one read of `source`/`category` be
/// recorded. User identity and counts are assigned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMetric {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}
