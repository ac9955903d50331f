use std::collections::HashSet;
use std::sync::Arc;

use spectrum_core::{MetricsBackend, NewsProvider, Result};
use tokio::sync::RwLock;

use crate::app::ApplicationRoot;
use crate::config::WebConfig;

pub struct AppState {
    pub root: ApplicationRoot,
    pub config: WebConfig,
    pub news: Arc<dyn NewsProvider>,
    pub metrics: Arc<dyn MetricsBackend>,
    /// Article URLs flagged `spectrum_enabled` by this site. The news API
    /// never returns the flag, so it is re-applied after every fetch.
    pub flagged: RwLock<HashSet<String>>,
}

impl AppState {
    pub fn new(
        config: WebConfig,
        news: Arc<dyn NewsProvider>,
        metrics: Arc<dyn MetricsBackend>,
    ) -> Result<Self> {
        Ok(Self {
            root: ApplicationRoot::new(&config)?,
            config,
            news,
            metrics,
            flagged: RwLock::new(HashSet::new()),
        })
    }
}
