use async_trait::async_trait;

use crate::types::{Metrics, NewMetric};
use crate::Result;

/// The analytics backend reading events are reported to.
///
/// Every call to [`MetricsBackend::submit`] records a separate observation:
/// submitting the same `NewMetric` twice for a user yields two records with
/// an article count of one each, never a single record counting two.
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    /// Record one reading event for `user_id` and return the stored record
    async fn submit(&self, user_id: u64, metric: &NewMetric) -> Result<Metrics>;

    /// All records stored for `user_id`, oldest first
    async fn metrics_for_user(&self, user_id: u64) -> Result<Vec<Metrics>>;
}
