use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{TargetLanguage, TranslateRequest, TranslateResponse};

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, TranslateError> {
    let Json(request) = payload.map_err(|rejection| TranslateError::validation(rejection.body_text()))?;
    let response = state.translator.translate(request).await?;
    Ok(Json(response))
}

pub async fn languages() -> Json<Vec<&'static str>> {
    Json(TargetLanguage::ALL.iter().map(|lang| lang.as_str()).collect())
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.translator.model(),
    }))
}
