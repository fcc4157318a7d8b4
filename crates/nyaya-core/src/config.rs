//! Runtime configuration: scoring weights, retrieval depths, memory cap, and
//! simulated generation latency.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Constants of the lexical relevance heuristic.
///
/// Exact phrase containment in the content scores `phrase_in_content`, in
/// the embedding text `phrase_in_embedding`. Otherwise partial word overlap
/// scores `overlap_base + overlap_ratio * matched / words`. Boosts are added
/// afterwards and the total is capped at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub phrase_in_content: f32,
    pub phrase_in_embedding: f32,
    pub overlap_base: f32,
    pub overlap_ratio: f32,
    pub section_boost: f32,
    pub act_boost: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            phrase_in_content: 0.9,
            phrase_in_embedding: 0.8,
            overlap_base: 0.3,
            overlap_ratio: 0.5,
            section_boost: 0.2,
            act_boost: 0.1,
        }
    }
}

/// Service-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service_name: String,
    pub scoring: ScoringWeights,
    /// Maximum turns kept per chat session.
    pub max_history: usize,
    pub chat_top_k: usize,
    pub viability_top_k: usize,
    pub argument_top_k: usize,
    pub clause_top_k: usize,
    /// Pause before each generated chat answer, in milliseconds. 0 disables it.
    pub simulated_latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_name: "Nyaya Legal Assistant".to_string(),
            scoring: ScoringWeights::default(),
            max_history: 10,
            chat_top_k: 5,
            viability_top_k: 10,
            argument_top_k: 5,
            clause_top_k: 5,
            simulated_latency_ms: 150,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::Invalid {
                field: "max_history",
                reason: "must be at least 1".into(),
            });
        }
        let depths = [
            ("chat_top_k", self.chat_top_k),
            ("viability_top_k", self.viability_top_k),
            ("argument_top_k", self.argument_top_k),
            ("clause_top_k", self.clause_top_k),
        ];
        for (field, value) in depths {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".into(),
                });
            }
        }
        let w = &self.scoring;
        let weights = [
            ("scoring.phrase_in_content", w.phrase_in_content),
            ("scoring.phrase_in_embedding", w.phrase_in_embedding),
            ("scoring.overlap_base", w.overlap_base),
            ("scoring.overlap_ratio", w.overlap_ratio),
            ("scoring.section_boost", w.section_boost),
            ("scoring.act_boost", w.act_boost),
        ];
        for (field, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is outside [0, 1]"),
                });
            }
        }
        Ok(())
    }
}
