//! Default LLM config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `API_KEY`          = Gemini API key (mandatory)
//! - `GEMINI_MODEL`     = model name, defaults to [`DEFAULT_GEMINI_MODEL`]
//! - `GEMINI_URL`       = API base URL, defaults to [`DEFAULT_GEMINI_URL`]
//! - `LLM_MAX_TOKENS`   = optional max output tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (0.0..=2.0)
//! - `LLM_TIMEOUT_SECS` = request timeout, defaults to [`DEFAULT_TIMEOUT_SECS`]

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt_f32, env_opt_u32, env_opt_u64, env_or, must_env,
        validate_http_endpoint, validate_range_f32,
    },
};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Public Generative Language API base.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Upper bound for a single generation request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the Gemini config used to answer student questions.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `API_KEY` is missing or empty
/// - [`ConfigError::InvalidFormat`] if `GEMINI_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numeric knobs
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("API_KEY")?;

    let model = env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let endpoint = env_or("GEMINI_URL", DEFAULT_GEMINI_URL);
    validate_http_endpoint("GEMINI_URL", &endpoint)?;

    let temperature = env_opt_f32("LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", t, 0.0, 2.0)?;
    }

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model: model.trim().to_string(),
        endpoint: endpoint.trim().to_string(),
        api_key,
        max_tokens,
        temperature,
        timeout_secs: Some(timeout_secs),
    })
}
