//! Shared legal-corpus types passed between the store, the inference modules,
//! and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Corpus ──

/// Document kind, the discriminant of [`Metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Statute,
    Judgment,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statute => "statute",
            Self::Judgment => "judgment",
        }
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "statute" => Ok(Self::Statute),
            "judgment" => Ok(Self::Judgment),
            other => Err(format!("unknown doc_type {other:?} (expected statute or judgment)")),
        }
    }
}

/// Provenance of a statute section chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatuteMeta {
    pub act_name: Option<String>,
    pub section_id: Option<String>,
    pub chapter: Option<String>,
    pub category: Option<String>,
    pub chunk_type: Option<String>,
    pub has_illustration: Option<bool>,
    pub has_proviso: Option<bool>,
}

/// Provenance of a judgment excerpt chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgmentMeta {
    pub title: Option<String>,
    pub court: Option<String>,
    pub case_type: Option<String>,
    pub outcome: Option<String>,
    pub acts_cited: Vec<String>,
    pub doc_url: Option<String>,
}

/// Chunk metadata, tagged by `doc_type` on the wire.
///
/// Accessors return `None` for fields the variant does not carry, so callers
/// can treat both variants uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "doc_type", rename_all = "lowercase")]
pub enum Metadata {
    Statute(StatuteMeta),
    Judgment(JudgmentMeta),
}

impl Metadata {
    pub fn doc_type(&self) -> DocType {
        match self {
            Self::Statute(_) => DocType::Statute,
            Self::Judgment(_) => DocType::Judgment,
        }
    }

    pub fn act_name(&self) -> Option<&str> {
        match self {
            Self::Statute(m) => m.act_name.as_deref(),
            Self::Judgment(_) => None,
        }
    }

    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Statute(m) => m.section_id.as_deref(),
            Self::Judgment(_) => None,
        }
    }

    pub fn chapter(&self) -> Option<&str> {
        match self {
            Self::Statute(m) => m.chapter.as_deref(),
            Self::Judgment(_) => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Statute(m) => m.category.as_deref(),
            Self::Judgment(_) => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Judgment(m) => m.title.as_deref(),
            Self::Statute(_) => None,
        }
    }

    pub fn court(&self) -> Option<&str> {
        match self {
            Self::Judgment(m) => m.court.as_deref(),
            Self::Statute(_) => None,
        }
    }

    pub fn case_type(&self) -> Option<&str> {
        match self {
            Self::Judgment(m) => m.case_type.as_deref(),
            Self::Statute(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&str> {
        match self {
            Self::Judgment(m) => m.outcome.as_deref(),
            Self::Statute(_) => None,
        }
    }

    pub fn doc_url(&self) -> Option<&str> {
        match self {
            Self::Judgment(m) => m.doc_url.as_deref(),
            Self::Statute(_) => None,
        }
    }
}

/// One indexable unit of legal text: a statute section or a judgment excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    #[serde(alias = "text_for_embedding")]
    pub embedding_text: String,
    pub raw_content: String,
    pub metadata: Metadata,
}

/// Conjunctive metadata constraints. Unset fields impose no constraint.
///
/// `doc_type` matches exactly; the string fields match by case-insensitive
/// substring against the chunk's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub doc_type: Option<DocType>,
    pub act_name: Option<String>,
    pub category: Option<String>,
    pub court: Option<String>,
    pub case_type: Option<String>,
}

impl SearchFilters {
    /// Filters restricted to judgment chunks.
    pub fn judgments() -> Self {
        Self {
            doc_type: Some(DocType::Judgment),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.doc_type.is_none()
            && self.act_name.is_none()
            && self.category.is_none()
            && self.court.is_none()
            && self.case_type.is_none()
    }
}

/// A chunk paired with its relevance to one query. Score is always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredChunk<'a> {
    pub chunk: &'a Chunk,
    pub score: f32,
}

// ── Search ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub query_time_ms: u64,
}

// ── Chat ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry of a session's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Citation attached to a chat answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReference {
    pub section_id: Option<String>,
    pub act_name: Option<String>,
    pub chapter: Option<String>,
    pub title: Option<String>,
    pub court: Option<String>,
    pub relevance_score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<SourceReference>,
    pub session_id: String,
}

// ── Viability ──

/// Predicted case viability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Prediction {
    High,
    Medium,
    Low,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// Caller-supplied narrowing for viability prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViabilityFilters {
    pub court: Option<String>,
    pub case_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingCase {
    pub title: String,
    pub court: String,
    pub outcome: String,
    pub relevance: f32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityResult {
    pub prediction: Prediction,
    pub confidence: f32,
    pub reasoning: String,
    pub supporting_cases: Vec<SupportingCase>,
}

// ── Arguments ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCase {
    pub title: String,
    pub court: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentsResult {
    pub prosecution_arguments: Vec<String>,
    pub defense_arguments: Vec<String>,
    pub winning_argument: String,
    pub court_ruling: String,
    pub source_case: SourceCase,
}

// ── Clauses ──

/// A reusable passage for petition drafting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub text: String,
    pub source: String,
    pub court: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClausesResult {
    pub clauses: Vec<Clause>,
}

// ── Health ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statute_metadata_from_tagged_json() {
        let json = r#"{
            "doc_type": "statute",
            "act_name": "Bharatiya Nyaya Sanhita, 2023",
            "section_id": "103",
            "has_proviso": false
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.doc_type(), DocType::Statute);
        assert_eq!(meta.section_id(), Some("103"));
        assert_eq!(meta.act_name(), Some("Bharatiya Nyaya Sanhita, 2023"));
        assert!(meta.chapter().is_none());
        assert!(meta.court().is_none());
    }

    #[test]
    fn judgment_metadata_defaults_missing_fields() {
        let json = r#"{"doc_type": "judgment", "title": "State vs Sonu"}"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.doc_type(), DocType::Judgment);
        assert_eq!(meta.title(), Some("State vs Sonu"));
        assert!(meta.outcome().is_none());
        assert!(meta.section_id().is_none());
    }

    #[test]
    fn chunk_accepts_text_for_embedding_alias() {
        let json = r#"{
            "id": "IPC_Sec_302",
            "text_for_embedding": "[IPC] > Section 302",
            "raw_content": "302. Punishment for murder.",
            "metadata": {"doc_type": "statute", "section_id": "302"}
        }"#;
        let chunk: Chunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.embedding_text, "[IPC] > Section 302");
    }

    #[test]
    fn unknown_doc_type_rejected() {
        let json = r#"{"doc_type": "treaty"}"#;
        assert!(serde_json::from_str::<Metadata>(json).is_err());
        assert!("treaty".parse::<DocType>().is_err());
        assert_eq!(" Judgment ".parse::<DocType>(), Ok(DocType::Judgment));
    }

    #[test]
    fn prediction_serializes_uppercase() {
        let json = serde_json::to_string(&Prediction::High).unwrap();
        assert_eq!(json, r#""HIGH""#);
        assert_eq!(Prediction::Medium.as_str(), "MEDIUM");
    }

    #[test]
    fn filters_empty_by_default() {
        assert!(SearchFilters::default().is_empty());
        assert!(!SearchFilters::judgments().is_empty());
    }
}
