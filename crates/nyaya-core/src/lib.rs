//! Core types and configuration shared across the Nyaya workspace.

pub mod config;
pub mod text;
pub mod types;

pub use config::{ConfigError, ScoringWeights, Settings};
pub use types::{
    ArgumentsResult, ChatResponse, Chunk, Clause, ClausesResult, DocType, HealthStatus,
    JudgmentMeta, Metadata, Prediction, Role, ScoredChunk, SearchFilters, SearchResponse,
    SearchResult, SourceCase, SourceReference, StatuteMeta, SupportingCase, Turn,
    ViabilityFilters, ViabilityResult,
};
