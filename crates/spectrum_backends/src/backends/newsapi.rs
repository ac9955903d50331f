use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use spectrum_core::{Error, Headlines, HeadlinesQuery, NewsProvider, Result};
use tracing::{debug, warn};
use url::Url;

use super::base_url;

/// Error body of a NewsAPI-compatible service.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Client for a NewsAPI-compatible `top-headlines` endpoint.
pub struct NewsApiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(base_url_str: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: base_url(base_url_str)?,
            api_key: api_key.into(),
        })
    }

    fn headlines_url(&self, query: &HeadlinesQuery) -> Result<Url> {
        let mut url = self.base_url.join("top-headlines")?;
        let mut pairs = Vec::new();
        if let Some(country) = &query.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(category) = &query.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(page_size) = query.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines> {
        let url = self.headlines_url(query)?;
        debug!("Fetching headlines from {}", url);

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        if !status.is_success() {
            let reason = match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(err) if !err.message.is_empty() => format!("{} ({})", err.message, err.code),
                _ => status.to_string(),
            };
            warn!("News API answered {}: {}", status, reason);
            return Err(Error::Fetch(reason));
        }

        let headlines: Headlines = serde_json::from_slice(&body)
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        if !headlines.is_ok() {
            return Err(Error::Fetch(format!(
                "News API reported status '{}'",
                headlines.status
            )));
        }

        debug!(
            "Got {} of {} headlines",
            headlines.articles.len(),
            headlines.total_results
        );
        Ok(headlines)
    }

    fn name(&self) -> &str {
        "newsapi"
    }
}
