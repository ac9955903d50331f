use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app;
pub mod chrome;
pub mod config;
pub mod error;
pub mod handlers;
pub mod layout;
pub mod nav;
pub mod pages;
pub mod state;
pub mod templates;
pub mod theme;

pub use app::{ApplicationRoot, RenderedDocument};
pub use config::WebConfig;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/health", get(handlers::health))
        .route("/api/headlines", get(handlers::list_headlines))
        .route("/api/articles/spectrum", post(handlers::flag_article))
        .route(
            "/api/metrics/:user_id",
            get(handlers::user_metrics).post(handlers::submit_metric),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::chrome::{ChromeOptions, Footer, Header, Navbar};
    pub use crate::layout::{LayoutShell, ShellState};
    pub use crate::nav::{NavLink, NavLinks};
    pub use crate::theme::{ColorScheme, PresentationConfig};
    pub use crate::{AppState, ApplicationRoot, WebConfig};
    pub use spectrum_core::{Error, Result};
}
