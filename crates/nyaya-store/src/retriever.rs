//! Query pipeline: filter → score → rank → truncate.

use std::sync::Arc;
use std::time::Instant;

use nyaya_core::{ScoredChunk, ScoringWeights, SearchFilters};
use tracing::debug;

use crate::DocumentStore;
use crate::filter;
use crate::scorer::{Query, Scorer};

/// Ranked chunks for one query plus the time the pipeline took.
#[derive(Debug, Clone)]
pub struct Retrieval<'a> {
    pub ranked: Vec<ScoredChunk<'a>>,
    pub elapsed_ms: u64,
}

/// Ranks corpus chunks against free-text queries.
///
/// Holds only immutable state, so one instance can serve any number of
/// concurrent readers.
#[derive(Debug, Clone)]
pub struct Retriever {
    store: Arc<DocumentStore>,
    scorer: Scorer,
}

impl Retriever {
    pub fn new(store: Arc<DocumentStore>, weights: ScoringWeights) -> Self {
        Self {
            store,
            scorer: Scorer::new(weights),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Return at most `top_k` chunks matching `filters`, best first.
    ///
    /// Chunks scoring zero are dropped. Equal scores keep corpus order.
    /// `top_k` range checks belong to the caller; zero yields no results.
    pub fn search(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
        top_k: usize,
    ) -> Retrieval<'_> {
        let start = Instant::now();
        let prepared = Query::new(query);

        let candidates = filter::apply(self.store.all(), filters);
        let candidate_count = candidates.len();

        let mut ranked: Vec<ScoredChunk<'_>> = candidates
            .into_iter()
            .filter_map(|chunk| {
                let score = self.scorer.score(chunk, &prepared);
                (score > 0.0).then_some(ScoredChunk { chunk, score })
            })
            .collect();
        let matched = ranked.len();

        // `sort_by` is stable: ties stay in corpus order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(top_k);

        let elapsed_ms = start.elapsed().as_millis() as u64;
        debug!(
            query,
            candidates = candidate_count,
            matched,
            returned = ranked.len(),
            elapsed_ms,
            "search complete"
        );
        Retrieval { ranked, elapsed_ms }
    }
}
