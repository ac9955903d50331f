use async_trait::async_trait;
use reqwest::Client;
use spectrum_core::{Error, Metrics, MetricsBackend, NewMetric, Result};
use tracing::{debug, error};
use url::Url;

use super::base_url;

/// Reports reading events to a remote analytics service.
///
/// `POST {base}/metrics/{user_id}` stores one event, `GET` on the same path
/// lists the user's records. Failed submissions are reported to the caller
/// and never retried here.
pub struct HttpMetricsBackend {
    client: Client,
    base_url: Url,
}

impl HttpMetricsBackend {
    pub fn new(base_url_str: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: base_url(base_url_str)?,
        })
    }

    fn user_url(&self, user_id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("metrics/{}", user_id))?)
    }
}

#[async_trait]
impl MetricsBackend for HttpMetricsBackend {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn submit(&self, user_id: u64, metric: &NewMetric) -> Result<Metrics> {
        let response = self
            .client
            .post(self.user_url(user_id)?)
            .json(metric)
            .send()
            .await
            .map_err(|e| Error::MetricsSubmission(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Metrics backend answered {}", status);
            return Err(Error::MetricsSubmission(format!(
                "Metrics backend answered {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::MetricsSubmission(e.to_string()))?;
        let record: Metrics = serde_json::from_slice(&body)
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;
        debug!("Recorded metric for user {}", record.user_id);
        Ok(record)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn metrics_for_user(&self, user_id: u64) -> Result<Vec<Metrics>> {
        let response = self
            .client
            .get(self.user_url(user_id)?)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("Metrics backend answered {}", status)));
        }

        let body = response.bytes().await.map_err(|e| Error::Fetch(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}
