//! Shared LLM service for the tutor backend.
//!
//! - [`config`]: env-driven model configuration.
//! - [`services::gemini_service::GeminiService`]: non-streaming Gemini client.
//! - [`generator::ContentGenerator`]: the seam callers depend on.
//! - [`extract`]: ordered text-extraction strategies over the raw response.
//! - [`telemetry`]: `tracing-subscriber` setup shared by binaries.

pub mod config;
pub mod error_handler;
pub mod extract;
pub mod generator;
pub mod response;
pub mod services;
pub mod telemetry;

pub use error_handler::AiLlmError;
pub use generator::ContentGenerator;
pub use response::GenerateContentResponse;
pub use services::gemini_service::GeminiService;
