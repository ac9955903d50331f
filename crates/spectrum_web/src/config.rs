use serde::{Deserialize, Serialize};
use spectrum_core::HeadlinesQuery;

use crate::chrome::ChromeOptions;
use crate::nav::NavLinks;
use crate::theme::PresentationConfig;

/// Settings for the web front end, assembled by the binary from flags and
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebConfig {
    pub presentation: PresentationConfig,
    pub chrome: ChromeOptions,
    /// Routes table for the navigation. `None` uses the default links.
    pub routes: Option<NavLinks>,
    pub default_country: Option<String>,
    pub page_size: Option<u32>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            presentation: PresentationConfig::default(),
            chrome: ChromeOptions::default(),
            routes: None,
            default_country: Some("us".to_string()),
            page_size: Some(20),
        }
    }
}

impl WebConfig {
    /// Fill the gaps of a request's query with the configured defaults.
    pub fn headlines_query(&self, requested: HeadlinesQuery) -> HeadlinesQuery {
        HeadlinesQuery {
            country: requested
                .country
                .filter(|c| !c.is_empty())
                .or_else(|| self.default_country.clone()),
            category: requested.category.filter(|c| !c.is_empty()),
            page_size: requested.page_size.or(self.page_size),
        }
    }
}
