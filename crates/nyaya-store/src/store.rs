//! Immutable in-memory corpus of statute sections and judgment excerpts.
//!
//! Chunks are loaded once at start-up, either from the embedded sample
//! corpus or from a JSON file, and are never mutated afterwards. Iteration
//! order is insertion order, which the retriever relies on for tie-breaking.

use std::collections::HashSet;
use std::path::Path;

use nyaya_core::{Chunk, DocType};
use tracing::info;

use crate::StoreError;

/// Sample corpus: eight statute sections (BNS, BNSS, IPC, NI Act) and four
/// judgment excerpts.
const SAMPLE_CORPUS: &str = include_str!("../data/corpus.json");

/// Read-only chunk collection.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    chunks: Vec<Chunk>,
}

impl DocumentStore {
    /// Build a store from an ordered list of chunks.
    ///
    /// Rejects an empty list and duplicate ids.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Result<Self, StoreError> {
        if chunks.is_empty() {
            return Err(StoreError::EmptyCorpus);
        }
        let mut seen = HashSet::with_capacity(chunks.len());
        for chunk in &chunks {
            if !seen.insert(chunk.id.as_str()) {
                return Err(StoreError::DuplicateId(chunk.id.clone()));
            }
        }
        Ok(Self { chunks })
    }

    /// Parse a JSON array of chunks.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let chunks: Vec<Chunk> = serde_json::from_str(json)?;
        Self::from_chunks(chunks)
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::CorpusNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            chunks = store.len(),
            statutes = store.count(DocType::Statute),
            judgments = store.count(DocType::Judgment),
            "loaded corpus"
        );
        Ok(store)
    }

    /// The embedded sample corpus.
    pub fn sample() -> Result<Self, StoreError> {
        let store = Self::from_json(SAMPLE_CORPUS)?;
        info!(chunks = store.len(), "loaded sample corpus");
        Ok(store)
    }

    /// All chunks in insertion order.
    pub fn all(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn get(&self, id: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of chunks of the given document type.
    pub fn count(&self, doc_type: DocType) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.metadata.doc_type() == doc_type)
            .count()
    }
}
