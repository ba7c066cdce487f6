use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_handler::{AppError, AppResult};

/// Request payload for /preguntar.
///
/// `pregunta` is kept as raw JSON so that every "empty" value gets the same
/// fixed message instead of a type error.
#[derive(Debug, Deserialize)]
pub struct PreguntarRequest {
    #[serde(default)]
    pub pregunta: Value,
}

impl PreguntarRequest {
    /// Take the question text out of the payload.
    ///
    /// # Errors
    /// - [`AppError::MissingQuestion`] for a missing field, `null`, `false`,
    ///   `0`, `""`, `[]` or `{}`
    /// - [`AppError::BadRequest`] for any other non-string value
    pub fn into_question(self) -> AppResult<String> {
        match self.pregunta {
            Value::String(q) if !q.is_empty() => Ok(q),
            v if is_empty_value(&v) => Err(AppError::MissingQuestion),
            _ => Err(AppError::BadRequest("la pregunta debe ser texto".into())),
        }
    }
}

fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Response payload for /preguntar.
#[derive(Debug, Serialize)]
pub struct PreguntarResponse {
    /// Model answer, or a description of why no text could be extracted.
    pub respuesta: String,
}
