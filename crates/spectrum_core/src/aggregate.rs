use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Metrics;

fn tally(histogram: &mut BTreeMap<String, u64>, key: &str, count: u64) {
    let total = histogram.entry(key.to_string()).or_insert(0);
    // Counts come from the metrics backend; clamp instead of overflowing.
    *total = total.saturating_add(count);
}

/// Sum of `article_count` per category across a sequence of records.
pub fn category_histogram(records: &[Metrics]) -> BTreeMap<String, u64> {
    let mut histogram = BTreeMap::new();
    for record in records {
        let pair = &record.category_to_num_articles;
        tally(&mut histogram, &pair.category, pair.article_count);
    }
    histogram
}

/// Sum of `article_count` per source across a sequence of records.
pub fn source_histogram(records: &[Metrics]) -> BTreeMap<String, u64> {
    let mut histogram = BTreeMap::new();
    for record in records {
        let pair = &record.source_to_num_articles;
        tally(&mut histogram, &pair.source, pair.article_count);
    }
    histogram
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub records: usize,
    pub categories: BTreeMap<String, u64>,
    pub sources: BTreeMap<String, u64>,
}

impl MetricsSummary {
    pub fn from_records(records: &[Metrics]) -> Self {
        Self {
            records: records.len(),
            categories: category_histogram(records),
            sources: source_histogram(records),
        }
    }
}
