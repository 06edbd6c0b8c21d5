//! Step 1: income intake

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::sessions::{session_cookie, session_id_from_headers};
use crate::{AppError, AppState};
use nestegg_core::parse_income;

/// GET / - income form descriptor for the view layer
pub async fn income_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "step": "income",
        "fields": ["income"],
        "submit": "/",
    }))
}

#[derive(Debug, Deserialize)]
pub struct IncomeSubmission {
    pub income: String,
}

/// POST / - parse and store monthly income, then advance to the expense step
///
/// A non-numeric value is rejected with a 400 at this step; nothing is
/// stored. First-time visitors get their session cookie here.
pub async fn submit_income(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<IncomeSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let income = parse_income(&form.income).map_err(AppError::from_core)?;

    let session_id = match session_id_from_headers(&headers) {
        Some(id) => id,
        None => state.sessions.create().await,
    };
    state
        .sessions
        .update(&session_id, |s| s.set_income(income))
        .await;

    debug!(session_id = %session_id, income, "Stored income");

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&session_id))]),
        Redirect::to("/expenses"),
    ))
}
