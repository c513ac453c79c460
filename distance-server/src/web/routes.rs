//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::calculate::{CalculateError, FailureKind};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/calculate", post(calculate_form))
        .route("/api/route", post(calculate_json))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Calculator page.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let form = FormView::defaults(query.mode.unwrap_or_default());
    render(StatusCode::OK, IndexTemplate::new(form, state.has_credential()))
}

/// Handle the calculate button.
///
/// Always answers with the page, carrying either the two metrics or a single
/// error message.
async fn calculate_form(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Result<Response, AppError> {
    let page = IndexTemplate::new(FormView::from_form(&form), state.has_credential());

    let Some(calculator) = state.calculator.as_deref() else {
        let err = CalculateError::MissingCredential;
        return render(status_for(&err), page.with_error(err.to_string()));
    };

    let (query, profile) = match (form.to_query(), form.profile()) {
        (Ok(query), Ok(profile)) => (query, profile),
        (Err(message), _) | (_, Err(message)) => {
            return render(StatusCode::BAD_REQUEST, page.with_error(message));
        }
    };

    match calculator.calculate(&query, profile).await {
        Ok(calc) => render(
            StatusCode::OK,
            page.with_result(ResultView::from_calculation(&calc)),
        ),
        Err(err) => render(status_for(&err), page.with_error(err.to_string())),
    }
}

/// JSON calculation endpoint.
async fn calculate_json(
    State(state): State<AppState>,
    payload: Result<Json<RouteApiRequest>, JsonRejection>,
) -> Result<Json<RouteApiResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let calculator = state
        .calculator
        .as_deref()
        .ok_or(AppError::Calculate(CalculateError::MissingCredential))?;

    let query = req
        .query
        .to_query()
        .map_err(|message| AppError::BadRequest { message })?;

    let calc = calculator
        .calculate(&query, req.profile)
        .await
        .map_err(AppError::Calculate)?;

    Ok(Json(calc.into()))
}

fn render(status: StatusCode, page: IndexTemplate) -> Result<Response, AppError> {
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok((status, Html(html)).into_response())
}

fn status_for(err: &CalculateError) -> StatusCode {
    match err.kind() {
        FailureKind::Config => StatusCode::SERVICE_UNAVAILABLE,
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::Transport => StatusCode::BAD_GATEWAY,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Calculate(CalculateError),
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Calculate(err) => (status_for(err), err.to_string()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
