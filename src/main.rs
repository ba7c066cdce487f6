use std::{error::Error, sync::Arc};

use ai_llm_service::{GeminiService, config::default_config::config_gemini, telemetry};
use api::{DEFAULT_API_ADDRESS, core::app_state::AppState};
use study_guide::{Corpus, StudyGuideConfig};
use tracing::{Level, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when there is one.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info", Level::INFO)?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, ".env file could not be loaded");
        }
    }

    // Everything below is startup-fatal: the server never binds on error.
    let llm_cfg = config_gemini()?;
    let guide_cfg = StudyGuideConfig::from_env()?;
    let corpus = Corpus::load(&guide_cfg.corpus_path)?;
    let gemini = Arc::new(GeminiService::new(llm_cfg)?);

    let state = AppState::new(&corpus, &guide_cfg, gemini)?;

    let addr = std::env::var("API_ADDRESS")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());
    info!(%addr, "starting tutor API");

    api::start(Arc::new(state), &addr).await?;

    Ok(())
}
