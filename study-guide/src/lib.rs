//! Study-guide question answering.
//!
//! The corpus is loaded once ([`corpus::Corpus`]), cut into fixed-size
//! fragments ([`chunking::split_text`]), filtered by keyword overlap with the
//! question ([`retrieve::search_fragments`]), wrapped into a tutor prompt
//! ([`prompt::build_prompt`]) and sent to the model by [`AnswerService`].

pub mod answer;
pub mod cfg;
pub mod chunking;
pub mod corpus;
pub mod prompt;
pub mod retrieve;

mod error;

pub use answer::{Answer, AnswerService, AnswerSource};
pub use cfg::StudyGuideConfig;
pub use corpus::Corpus;
pub use error::StudyGuideError;
