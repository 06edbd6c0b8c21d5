//! Step 3: results and recommendations views
//!
//! The two views are deliberately asymmetric: /results degrades to a zeroed
//! summary for visitors with no session state, while /recommendations sends
//! them back to step 1.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tracing::debug;

use crate::sessions::session_id_from_headers;
use crate::{AppError, AppState};
use nestegg_core::{
    categorize, recommend, CategorizedTotals, ChartSeries, SessionState, Stage,
};

/// GET /results response
#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub income: f64,
    pub total_expenses: f64,
    pub categorized: CategorizedTotals,
    pub leftover: f64,
    /// Base64-encoded PNG, ready for a data:image/png;base64 URI
    pub chart: String,
}

/// GET /recommendations response
#[derive(Debug, Serialize)]
pub struct RecommendationsView {
    pub income: f64,
    pub categorized: CategorizedTotals,
    pub leftover: f64,
    /// Ordered by priority: leftover health first, then wants, then needs
    pub recommendations: Vec<String>,
}

async fn load_session(state: &AppState, headers: &HeaderMap) -> SessionState {
    match session_id_from_headers(headers) {
        Some(id) => state.sessions.get(&id).await.unwrap_or_default(),
        None => SessionState::default(),
    }
}

/// GET /results - categorized summary with chart
///
/// Reads whatever the session holds, defaulting to zero income and no
/// expenses; a visitor who skipped the earlier steps gets a zeroed summary
/// rather than a redirect.
pub async fn results(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ResultsView>, AppError> {
    let session = load_session(&state, &headers).await;
    let income = session.income.unwrap_or(0.0);
    let expenses = session.expenses.unwrap_or_default();

    let categorized = categorize(&expenses);
    let leftover = income - categorized.total();

    let series = ChartSeries::new(income, &categorized);
    let png = state.chart.render(&series).map_err(AppError::from_core)?;

    Ok(Json(ResultsView {
        income,
        total_expenses: categorized.total(),
        categorized,
        leftover,
        chart: BASE64.encode(png),
    }))
}

/// GET /recommendations - advice derived from the stored budget
///
/// Requires both steps to be complete: missing income, or a missing or
/// empty expense map, redirects to the start of the flow.
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = load_session(&state, &headers).await;

    // Both steps must be complete, and an all-blank expense submission
    // does not count as complete
    if session.stage() != Stage::HasIncomeAndExpenses || !session.has_expenses() {
        debug!(stage = ?session.stage(), "Recommendations requested without completed wizard, redirecting");
        return Ok(Redirect::to("/").into_response());
    }
    let income = session.income.unwrap_or(0.0);
    let expenses = session.expenses.unwrap_or_default();

    let categorized = categorize(&expenses);
    let leftover = income - categorized.total();
    let recommendations = recommend(income, &categorized, leftover);

    Ok(Json(RecommendationsView {
        income,
        categorized,
        leftover,
        recommendations,
    })
    .into_response())
}
