use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use spectrum_core::{Headlines, HeadlinesQuery, Metrics, MetricsSummary, NewMetric};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::WebError;
use crate::pages::{AboutPage, ErrorPage, HeadlinesPage, Page};
use crate::AppState;

type HandlerResult<T> = Result<T, WebError>;

fn render_page(state: &AppState, page: &dyn Page, status: StatusCode) -> HandlerResult<Response> {
    let document = state.root.render(page)?;
    Ok((status, Html(document.html)).into_response())
}

async fn fetch_headlines(
    state: &AppState,
    query: &HeadlinesQuery,
) -> spectrum_core::Result<Headlines> {
    let mut headlines = state.news.top_headlines(query).await?;
    let flagged = state.flagged.read().await;
    headlines.carry_spectrum_flags(&flagged);
    Ok(headlines)
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HeadlinesQuery>,
) -> HandlerResult<Response> {
    let query = state.config.headlines_query(query);
    match fetch_headlines(&state, &query).await {
        Ok(headlines) => {
            let page = HeadlinesPage::new(headlines, query.category);
            render_page(&state, &page, StatusCode::OK)
        }
        Err(err) if err.is_upstream() => {
            warn!("Headlines from {} unavailable: {}", state.news.name(), err);
            render_page(&state, &ErrorPage::from_fetch_error(&err), StatusCode::BAD_GATEWAY)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn about(State(state): State<Arc<AppState>>) -> HandlerResult<Response> {
    render_page(&state, &AboutPage, StatusCode::OK)
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> HandlerResult<Response> {
    render_page(&state, &ErrorPage::not_found(), StatusCode::NOT_FOUND)
}

pub async fn list_headlines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HeadlinesQuery>,
) -> HandlerResult<Json<Headlines>> {
    let query = state.config.headlines_query(query);
    Ok(Json(fetch_headlines(&state, &query).await?))
}

#[derive(Debug, Deserialize)]
pub struct SpectrumFlag {
    pub url: String,
    pub enabled: bool,
}

pub async fn flag_article(
    State(state): State<Arc<AppState>>,
    Json(flag): Json<SpectrumFlag>,
) -> HandlerResult<StatusCode> {
    if flag.url.is_empty() {
        return Err(WebError::BadRequest("url must not be empty".to_string()));
    }

    let mut flagged = state.flagged.write().await;
    if flag.enabled {
        flagged.insert(flag.url);
    } else {
        flagged.remove(&flag.url);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn submit_metric(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
    Json(metric): Json<NewMetric>,
) -> HandlerResult<(StatusCode, Json<Metrics>)> {
    let record = state.metrics.submit(user_id, &metric).await?;
    info!(
        "Recorded read of {}/{} for user {}",
        metric.source, metric.category, user_id
    );
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserMetrics {
    pub records: Vec<Metrics>,
    pub summary: MetricsSummary,
}

pub async fn user_metrics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> HandlerResult<Json<UserMetrics>> {
    let records = state.metrics.metrics_for_user(user_id).await?;
    let summary = MetricsSummary::from_records(&records);
    Ok(Json(UserMetrics { records, summary }))
}

pub async fn health() -> &'static str {
    "ok"
}
