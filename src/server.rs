//! HTTP front door: shell page, static assets and the update endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::api::Dashboard;
use crate::config::DashboardConfig;
use crate::error::{DashError, DashResult};
use crate::interaction::ControlChange;
use crate::render::{HtmlRenderer, Renderer, ShellFrame, ShellLayout, UPDATE_ENDPOINT};

/// Shared handler state. The mutex serializes control changes so each one
/// is processed to completion before the next.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Mutex<Dashboard>>,
    layout: Arc<ShellLayout>,
}

impl AppState {
    #[must_use]
    pub fn new(dashboard: Dashboard, layout: ShellLayout) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            layout: Arc::new(layout),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Arc<Mutex<Dashboard>> {
        &self.dashboard
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidControl { .. } | Self::UnknownMeasure(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState, config: &DashboardConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/figures", get(figures))
        .route(UPDATE_ENDPOINT, post(update))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, DashError> {
    let dashboard = state.dashboard.lock().await;
    let mut renderer = HtmlRenderer::new();
    renderer.render(&ShellFrame::from_dashboard(&state.layout, &dashboard))?;
    Ok(Html(renderer.into_document()))
}

async fn figures(State(state): State<AppState>) -> Response {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.figures_json_contract_v1()).into_response()
}

async fn update(
    State(state): State<AppState>,
    payload: Result<Json<ControlChange>, JsonRejection>,
) -> Result<Response, DashError> {
    let Json(change) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed control change");
        DashError::invalid_control("request", rejection.body_text())
    })?;

    let mut dashboard = state.dashboard.lock().await;
    let batch = dashboard.apply(&change)?;
    Ok(Json(batch.to_json_contract_v1()).into_response())
}

/// Loads the dataset, checks assets and serves until the listener fails.
pub async fn serve(config: DashboardConfig) -> DashResult<()> {
    config.validate()?;
    let dataset = Arc::new(config.dataset.load()?);
    let dashboard = Dashboard::new(dataset);
    let layout = ShellLayout::standard().with_title(config.title.clone());
    let app = router(AppState::new(dashboard, layout), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "dashboard listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
