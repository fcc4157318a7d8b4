//! Rule-based legal inference over retrieved chunks: chat answers with
//! bounded session memory, viability prediction, argument mining, and clause
//! selection, behind the [`LegalAssistant`] facade.

pub mod answer;
pub mod arguments;
pub mod clauses;
mod error;
pub mod latency;
pub mod memory;
pub mod rules;
mod service;
pub mod viability;

pub use answer::AnswerGenerator;
pub use arguments::ArgumentMiner;
pub use clauses::ClauseSelector;
pub use error::ServiceError;
pub use latency::{FixedDelay, Latency, NoDelay};
pub use memory::SessionMemory;
pub use service::{LegalAssistant, MAX_TOP_K};
pub use viability::ViabilityClassifier;
