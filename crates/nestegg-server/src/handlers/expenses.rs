//! Step 2: expense intake
//!
//! The form carries one optional amount per fixed category plus repeated
//! `other_name`/`other_amount` fields. axum's `Form` extractor collapses
//! repeated fields, so the body is decoded manually with `form_urlencoded`,
//! which keeps duplicates in submission order for positional pairing.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect},
    Json,
};
use tracing::debug;

use crate::sessions::{session_cookie, session_id_from_headers};
use crate::{AppError, AppState};
use nestegg_core::{ExpenseSubmission, COMMON_EXPENSES};

/// GET /expenses - expense form descriptor listing the fixed categories
pub async fn expenses_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "step": "expenses",
        "categories": COMMON_EXPENSES,
        "other_fields": ["other_name", "other_amount"],
        "submit": "/expenses",
    }))
}

/// POST /expenses - store the submitted expense map, replacing any prior one
pub async fn submit_expenses(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let submission = decode_expense_form(&body);
    let expenses = submission.into_expenses().map_err(AppError::from_core)?;

    let session_id = match session_id_from_headers(&headers) {
        Some(id) => id,
        None => state.sessions.create().await,
    };
    debug!(session_id = %session_id, count = expenses.len(), "Stored expenses");
    state
        .sessions
        .update(&session_id, |s| s.set_expenses(expenses))
        .await;

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&session_id))]),
        Redirect::to("/results"),
    ))
}

/// Decode the urlencoded body into the typed submission model.
///
/// Unknown field names are ignored; fixed-category fields are recognized by
/// exact name.
fn decode_expense_form(body: &str) -> ExpenseSubmission {
    let mut submission = ExpenseSubmission::default();
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "other_name" => submission.other_names.push(value.into_owned()),
            "other_amount" => submission.other_amounts.push(value.into_owned()),
            name if COMMON_EXPENSES.contains(&name) => {
                submission.fixed.push((name.to_string(), value.into_owned()));
            }
            _ => {}
        }
    }
    submission
}
