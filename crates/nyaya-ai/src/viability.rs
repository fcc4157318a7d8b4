//! Case viability from the outcomes of similar judgments.

use std::sync::Arc;

use nyaya_core::text::round_score;
use nyaya_core::{
    Prediction, ScoredChunk, SearchFilters, SupportingCase, ViabilityFilters, ViabilityResult,
};
use nyaya_store::Retriever;
use tracing::debug;

pub const UNKNOWN_CASE: &str = "Unknown Case";
pub const UNKNOWN_COURT: &str = "Unknown Court";
pub const DEFAULT_CASE_URL: &str = "https://indiankanoon.org";

const MAX_SUPPORTING_CASES: usize = 5;

/// Share of similar cases (in tenths) that must agree for a confident call.
const AGREEMENT_TENTHS: usize = 7;

const CONFIDENT: f32 = 0.85;
const MIXED: f32 = 0.65;
const NO_EVIDENCE: f32 = 0.5;

/// Outcome tallies over the retrieved judgments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub allowed: usize,
    pub dismissed: usize,
    pub total: usize,
}

impl OutcomeCounts {
    /// Count outcomes by case-insensitive substring: "allow" or "dismiss".
    ///
    /// "Partially Allowed" counts as allowed.
    pub fn tally<'a>(outcomes: impl IntoIterator<Item = &'a str>) -> Self {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut counts, outcome| {
                let outcome = outcome.to_lowercase();
                counts.total += 1;
                if outcome.contains("allow") {
                    counts.allowed += 1;
                }
                if outcome.contains("dismiss") {
                    counts.dismissed += 1;
                }
                counts
            })
    }

    fn agrees(&self, count: usize) -> bool {
        count * 10 >= self.total * AGREEMENT_TENTHS
    }

    /// Prediction, confidence, and reasoning for these tallies.
    pub fn classify(&self) -> (Prediction, f32, String) {
        let Self {
            allowed,
            dismissed,
            total,
        } = *self;
        if total == 0 {
            return (
                Prediction::Medium,
                NO_EVIDENCE,
                "Insufficient similar cases found for accurate prediction.".to_string(),
            );
        }
        if self.agrees(allowed) {
            (
                Prediction::High,
                CONFIDENT,
                format!(
                    "Based on {allowed} out of {total} similar cases being allowed, your case has high viability."
                ),
            )
        } else if self.agrees(dismissed) {
            (
                Prediction::Low,
                CONFIDENT,
                format!(
                    "Based on {dismissed} out of {total} similar cases being dismissed, your case has low viability."
                ),
            )
        } else {
            (
                Prediction::Medium,
                MIXED,
                format!(
                    "Mixed outcomes in similar cases ({allowed} allowed, {dismissed} dismissed). Outcome is uncertain."
                ),
            )
        }
    }
}

/// Predicts viability from retrieved judgment outcomes.
#[derive(Debug, Clone)]
pub struct ViabilityClassifier {
    retriever: Arc<Retriever>,
    top_k: usize,
}

impl ViabilityClassifier {
    pub fn new(retriever: Arc<Retriever>, top_k: usize) -> Self {
        Self { retriever, top_k }
    }

    pub fn predict(&self, facts: &str, filters: Option<&ViabilityFilters>) -> ViabilityResult {
        let mut search = SearchFilters::judgments();
        if let Some(f) = filters {
            search.court = f.court.clone();
            search.case_type = f.case_type.clone();
        }
        let retrieval = self.retriever.search(facts, Some(&search), self.top_k);

        let decided: Vec<(&ScoredChunk<'_>, &str)> = retrieval
            .ranked
            .iter()
            .filter_map(|s| s.chunk.metadata.outcome().map(|o| (s, o)))
            .collect();

        let counts = OutcomeCounts::tally(decided.iter().map(|(_, o)| *o));
        let (prediction, confidence, reasoning) = counts.classify();
        debug!(
            retrieved = retrieval.ranked.len(),
            allowed = counts.allowed,
            dismissed = counts.dismissed,
            total = counts.total,
            prediction = prediction.as_str(),
            "viability classified"
        );

        let supporting_cases = decided
            .iter()
            .take(MAX_SUPPORTING_CASES)
            .map(|(s, outcome)| {
                let m = &s.chunk.metadata;
                SupportingCase {
                    title: m.title().unwrap_or(UNKNOWN_CASE).to_string(),
                    court: m.court().unwrap_or(UNKNOWN_COURT).to_string(),
                    outcome: outcome.to_string(),
                    relevance: round_score(s.score),
                    url: m.doc_url().unwrap_or(DEFAULT_CASE_URL).to_string(),
                }
            })
            .collect();

        ViabilityResult {
            prediction,
            confidence,
            reasoning,
            supporting_cases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyaya_core::{Chunk, JudgmentMeta, Metadata, ScoringWeights};
    use nyaya_store::DocumentStore;

    fn judgment(id: &str, content: &str, outcome: Option<&str>) -> Chunk {
        Chunk {
            id: id.into(),
            embedding_text: String::new(),
            raw_content: content.into(),
            metadata: Metadata::Judgment(JudgmentMeta {
                title: Some(format!("Case {id}")),
                court: Some("Gujarat High Court".into()),
                case_type: Some("Criminal".into()),
                outcome: outcome.map(Into::into),
                ..Default::default()
            }),
        }
    }

    fn classifier(chunks: Vec<Chunk>) -> ViabilityClassifier {
        let store = DocumentStore::from_chunks(chunks).unwrap();
        let retriever = Retriever::new(Arc::new(store), ScoringWeights::default());
        ViabilityClassifier::new(Arc::new(retriever), 10)
    }

    fn sample() -> ViabilityClassifier {
        let store = DocumentStore::sample().unwrap();
        let retriever = Retriever::new(Arc::new(store), ScoringWeights::default());
        ViabilityClassifier::new(Arc::new(retriever), 10)
    }

    #[test]
    fn tally_substrings() {
        let counts = OutcomeCounts::tally(["Allowed", "Partially Allowed", "DISMISSED", "Remanded"]);
        assert_eq!(
            counts,
            OutcomeCounts {
                allowed: 2,
                dismissed: 1,
                total: 4
            }
        );
    }

    #[test]
    fn no_outcomes_is_medium() {
        let (p, c, r) = OutcomeCounts::default().classify();
        assert_eq!(p, Prediction::Medium);
        assert_eq!(c, 0.5);
        assert_eq!(r, "Insufficient similar cases found for accurate prediction.");
    }

    #[test]
    fn threshold_is_inclusive() {
        // 7 of 10 is exactly the threshold.
        let counts = OutcomeCounts {
            allowed: 7,
            dismissed: 3,
            total: 10,
        };
        assert_eq!(counts.classify().0, Prediction::High);
        let counts = OutcomeCounts {
            allowed: 3,
            dismissed: 7,
            total: 10,
        };
        assert_eq!(counts.classify().0, Prediction::Low);
        let counts = OutcomeCounts {
            allowed: 2,
            dismissed: 1,
            total: 3,
        };
        // 2/3 falls short of 0.7.
        let (p, c, r) = counts.classify();
        assert_eq!(p, Prediction::Medium);
        assert_eq!(c, 0.65);
        assert_eq!(
            r,
            "Mixed outcomes in similar cases (2 allowed, 1 dismissed). Outcome is uncertain."
        );
    }

    #[test]
    fn single_allowed_case_is_high() {
        let classifier = classifier(vec![
            judgment("a", "settlement of cheque dispute reached", Some("Allowed")),
            judgment("b", "unrelated land matter", Some("Dismissed")),
        ]);
        let result = classifier.predict("settlement of cheque dispute", None);
        assert_eq!(result.prediction, Prediction::High);
        assert_eq!(result.confidence, 0.85);
        assert_eq!(
            result.reasoning,
            "Based on 1 out of 1 similar cases being allowed, your case has high viability."
        );
        assert_eq!(result.supporting_cases.len(), 1);
        assert_eq!(result.supporting_cases[0].title, "Case a");
        assert_eq!(result.supporting_cases[0].url, DEFAULT_CASE_URL);
    }

    #[test]
    fn chunks_without_outcome_ignored() {
        let classifier = classifier(vec![
            judgment("a", "cheque dishonour", None),
            judgment("b", "cheque dishonour", Some("Dismissed")),
        ]);
        let result = classifier.predict("cheque dishonour", None);
        assert_eq!(result.prediction, Prediction::Low);
        assert_eq!(result.supporting_cases.len(), 1);
        assert_eq!(result.supporting_cases[0].outcome, "Dismissed");
    }

    #[test]
    fn supporting_cases_capped_at_five() {
        let chunks = (0..8)
            .map(|i| judgment(&i.to_string(), "bail granted", Some("Allowed")))
            .collect();
        let result = classifier(chunks).predict("bail granted to accused", None);
        assert!(result.reasoning.contains("8 out of 8"));
        assert_eq!(result.supporting_cases.len(), 5);
        let titles: Vec<&str> = result
            .supporting_cases
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Case 0", "Case 1", "Case 2", "Case 3", "Case 4"]);
    }

    #[test]
    fn nothing_retrieved_is_medium() {
        let result = sample().predict("zzzz qqqq xxxx", None);
        assert_eq!(result.prediction, Prediction::Medium);
        assert_eq!(result.confidence, 0.5);
        assert!(result.supporting_cases.is_empty());
    }

    #[test]
    fn only_judgments_considered() {
        // Statutes match "murder" but carry no outcome and are filtered out.
        let result = sample().predict("murder with a single blow", None);
        assert!(!result.supporting_cases.is_empty());
        assert!(result.supporting_cases.iter().all(|c| !c.court.is_empty()));
    }

    #[test]
    fn court_filter_narrows() {
        let filters = ViabilityFilters {
            court: Some("supreme".into()),
            case_type: None,
        };
        let result = sample().predict("quash criminal proceedings settled", Some(&filters));
        assert_eq!(result.supporting_cases.len(), 1);
        assert_eq!(result.supporting_cases[0].title, "Gian Singh vs State of Punjab");
        assert_eq!(result.prediction, Prediction::High);
    }
}
