//! `LegalAssistant`: the service facade.
//!
//! Owns one retriever, one session memory, and the four inference modules,
//! all constructed once and shared by reference. Every public operation
//! validates its input first and returns [`ServiceError::Validation`] naming
//! the offending field. Empty retrievals are never errors.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use nyaya_core::text::round_score;
use nyaya_core::{
    ArgumentsResult, ChatResponse, ClausesResult, HealthStatus, SearchFilters, SearchResponse,
    SearchResult, Settings, Turn, ViabilityFilters, ViabilityResult,
};
use nyaya_store::{DocumentStore, Retriever, autocomplete};
use tracing::info;

use crate::answer::AnswerGenerator;
use crate::arguments::ArgumentMiner;
use crate::clauses::ClauseSelector;
use crate::error::ServiceError;
use crate::latency::{self, Latency};
use crate::memory::SessionMemory;
use crate::viability::ViabilityClassifier;

/// Largest `top_k` a search may request.
pub const MAX_TOP_K: usize = 50;

pub const MIN_FACTS_CHARS: usize = 10;
pub const MIN_SCENARIO_CHARS: usize = 10;
pub const MIN_NEED_CHARS: usize = 5;

pub struct LegalAssistant {
    settings: Settings,
    retriever: Arc<Retriever>,
    answers: AnswerGenerator,
    viability: ViabilityClassifier,
    arguments: ArgumentMiner,
    clauses: ClauseSelector,
}

impl LegalAssistant {
    pub fn new(settings: Settings, store: Arc<DocumentStore>, latency: Arc<dyn Latency>) -> Self {
        let retriever = Arc::new(Retriever::new(store, settings.scoring));
        let memory = Arc::new(SessionMemory::new(settings.max_history));
        Self {
            answers: AnswerGenerator::new(memory, latency),
            viability: ViabilityClassifier::new(Arc::clone(&retriever), settings.viability_top_k),
            arguments: ArgumentMiner::new(Arc::clone(&retriever), settings.argument_top_k),
            clauses: ClauseSelector::new(Arc::clone(&retriever), settings.clause_top_k),
            retriever,
            settings,
        }
    }

    /// Validate `settings`, load the corpus (the embedded sample when
    /// `corpus` is `None`), and build the service.
    pub fn open(settings: Settings, corpus: Option<&Path>) -> Result<Self, ServiceError> {
        settings.validate()?;
        let store = match corpus {
            Some(path) => DocumentStore::load(path)?,
            None => DocumentStore::sample()?,
        };
        let latency = latency::from_millis(settings.simulated_latency_ms);
        info!(
            service = %settings.service_name,
            chunks = store.len(),
            latency_ms = settings.simulated_latency_ms,
            "legal assistant ready"
        );
        Ok(Self::new(settings, Arc::new(store), latency))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &DocumentStore {
        self.retriever.store()
    }

    /// Ranked chunks for `query`. Scores are reported to two decimals.
    pub fn search(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
        top_k: usize,
    ) -> Result<SearchResponse, ServiceError> {
        require_text("query", query, 1)?;
        if !(1..=MAX_TOP_K).contains(&top_k) {
            return Err(ServiceError::validation(
                "top_k",
                format!("must be between 1 and {MAX_TOP_K}, got {top_k}"),
            ));
        }

        let retrieval = self.retriever.search(query, filters, top_k);
        let results: Vec<SearchResult> = retrieval
            .ranked
            .iter()
            .map(|s| SearchResult {
                id: s.chunk.id.clone(),
                content: s.chunk.raw_content.clone(),
                metadata: s.chunk.metadata.clone(),
                score: round_score(s.score),
            })
            .collect();
        Ok(SearchResponse {
            total: results.len(),
            results,
            query_time_ms: retrieval.elapsed_ms,
        })
    }

    /// Answer `query` within `session_id`, citing up to three sources.
    pub async fn chat(&self, session_id: &str, query: &str) -> Result<ChatResponse, ServiceError> {
        require_text("query", query, 1)?;

        let retrieval = self.retriever.search(query, None, self.settings.chat_top_k);
        let (answer, sources) = self
            .answers
            .generate(query, &retrieval.ranked, session_id)
            .await;
        info!(session_id, sources = sources.len(), "chat answered");

        Ok(ChatResponse {
            answer,
            sources,
            session_id: session_id.to_string(),
        })
    }

    pub fn predict_viability(
        &self,
        facts: &str,
        filters: Option<&ViabilityFilters>,
    ) -> Result<ViabilityResult, ServiceError> {
        require_text("facts", facts, MIN_FACTS_CHARS)?;
        Ok(self.viability.predict(facts, filters))
    }

    pub fn extract_arguments(&self, scenario: &str) -> Result<ArgumentsResult, ServiceError> {
        require_text("scenario", scenario, MIN_SCENARIO_CHARS)?;
        Ok(self.arguments.extract(scenario))
    }

    pub fn select_clauses(&self, need: &str) -> Result<ClausesResult, ServiceError> {
        require_text("need", need, MIN_NEED_CHARS)?;
        Ok(self.clauses.select(need))
    }

    pub fn autocomplete(&self, q: &str) -> Result<Vec<&'static str>, ServiceError> {
        require_text("q", q, 1)?;
        Ok(autocomplete::suggest(q))
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            service: self.settings.service_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.answers.memory().history(session_id)
    }

    /// Forget a session. Returns whether it existed.
    pub fn clear_session(&self, session_id: &str) -> bool {
        self.answers.memory().clear(session_id)
    }

    pub fn session_count(&self) -> usize {
        self.answers.memory().session_count()
    }
}

/// Require at least `min` characters. Whitespace counts.
fn require_text(field: &'static str, value: &str, min: usize) -> Result<(), ServiceError> {
    let len = value.chars().count();
    if len >= min {
        return Ok(());
    }
    let message = if min == 1 {
        "must not be empty".to_string()
    } else {
        format!("must be at least {min} characters, got {len}")
    };
    Err(ServiceError::validation(field, message))
}
