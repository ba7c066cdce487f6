//! POST /preguntar — answers a student question from the study guide.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::preguntar::preguntar_request::{PreguntarRequest, PreguntarResponse},
};

/// Handler: POST /preguntar
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/preguntar \
///   -H 'content-type: application/json' \
///   -d '{"pregunta":"¿Qué es la regla de la cadena?"}'
/// ```
pub async fn preguntar(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PreguntarRequest>, JsonRejection>,
) -> AppResult<Json<PreguntarResponse>> {
    let Json(body) = body.inspect_err(|e| debug!(error = %e, "preguntar: rejected body"))?;

    let question = body.into_question()?;

    debug!(question_len = question.len(), "preguntar: start");

    let answer = state.answers.answer(&question).await.map_err(|e| {
        error!(error = %e, "preguntar: model call failed");
        AppError::from(e)
    })?;

    info!(
        source = ?answer.source,
        context_fragments = answer.context_fragments,
        "preguntar: answered"
    );

    Ok(Json(PreguntarResponse {
        respuesta: answer.text,
    }))
}
