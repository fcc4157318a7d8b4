//! Lexical relevance scoring.
//!
//! This is a keyword heuristic, not semantic similarity: it rewards exact
//! phrase containment far above token overlap and knows nothing about
//! synonyms or word order.
//!
//! # Algorithm
//!
//! With `q` the lowercased query:
//!
//! 1. `q` inside the lowercased raw content → `phrase_in_content` (0.9)
//! 2. else `q` inside the lowercased embedding text → `phrase_in_embedding` (0.8)
//! 3. else count query words (whitespace split) occurring as substrings of the
//!    content: `overlap_base + matched / words * overlap_ratio` (0.3 + r·0.5),
//!    or 0 when nothing matches
//! 4. `+ section_boost` (0.2) if the statute's section id occurs in `q`
//! 5. `+ act_boost` (0.1, once) if any query word occurs in the act name
//! 6. cap at 1.0
//!
//! Boosts apply on a zero base too, so a chunk that only shares its act name
//! with the query still scores `act_boost`.

use nyaya_core::{Chunk, ScoringWeights};

/// A query lowercased and split once, reused across every chunk.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    words: Vec<String>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let words = text.split_whitespace().map(str::to_string).collect();
        Self { text, words }
    }

    /// The lowercased query.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Relevance scorer parameterised by [`ScoringWeights`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `chunk` against a raw query string.
    pub fn score_text(&self, chunk: &Chunk, query: &str) -> f32 {
        self.score(chunk, &Query::new(query))
    }

    /// Score `chunk` against a prepared query. Result is in `[0, 1]`; zero
    /// means the chunk shares nothing with the query.
    pub fn score(&self, chunk: &Chunk, query: &Query) -> f32 {
        let total = self.base_score(chunk, query)
            + self.section_boost(chunk, query)
            + self.act_boost(chunk, query);
        total.clamp(0.0, 1.0)
    }

    fn base_score(&self, chunk: &Chunk, query: &Query) -> f32 {
        let w = &self.weights;
        let content = chunk.raw_content.to_lowercase();
        if content.contains(query.text()) {
            return w.phrase_in_content;
        }
        if chunk.embedding_text.to_lowercase().contains(query.text()) {
            return w.phrase_in_embedding;
        }

        let words = query.words();
        let matched = words
            .iter()
            .filter(|word| content.contains(word.as_str()))
            .count();
        if matched == 0 {
            return 0.0;
        }
        w.overlap_base + (matched as f32 / words.len() as f32) * w.overlap_ratio
    }

    fn section_boost(&self, chunk: &Chunk, query: &Query) -> f32 {
        match chunk.metadata.section_id() {
            Some(id) if !id.is_empty() && query.text().contains(&id.to_lowercase()) => {
                self.weights.section_boost
            }
            _ => 0.0,
        }
    }

    fn act_boost(&self, chunk: &Chunk, query: &Query) -> f32 {
        let Some(act) = chunk.metadata.act_name() else {
            return 0.0;
        };
        let act = act.to_lowercase();
        if query.words().iter().any(|word| act.contains(word.as_str())) {
            self.weights.act_boost
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyaya_core::{JudgmentMeta, Metadata, StatuteMeta};

    const EPS: f32 = 1e-5;

    fn statute(content: &str, embed: &str, section: Option<&str>, act: Option<&str>) -> Chunk {
        Chunk {
            id: "s".into(),
            embedding_text: embed.into(),
            raw_content: content.into(),
            metadata: Metadata::Statute(StatuteMeta {
                section_id: section.map(Into::into),
                act_name: act.map(Into::into),
                ..Default::default()
            }),
        }
    }

    fn judgment(content: &str) -> Chunk {
        Chunk {
            id: "j".into(),
            embedding_text: String::new(),
            raw_content: content.into(),
            metadata: Metadata::Judgment(JudgmentMeta::default()),
        }
    }

    fn score(chunk: &Chunk, q: &str) -> f32 {
        Scorer::default().score_text(chunk, q)
    }

    #[test]
    fn phrase_in_content() {
        let c = judgment("Whoever commits Murder shall be punished");
        assert!((score(&c, "commits murder") - 0.9).abs() < EPS);
    }

    #[test]
    fn phrase_in_embedding_only() {
        let c = statute("body text", "[IPC] > Section 302 - Punishment for murder", None, None);
        assert!((score(&c, "punishment for murder") - 0.8).abs() < EPS);
    }

    #[test]
    fn partial_word_overlap() {
        let c = judgment("the court quashed the fir");
        // 2 of 4 words present: 0.3 + 0.5 * 0.5
        assert!((score(&c, "court quashed bail bond") - 0.55).abs() < EPS);
    }

    #[test]
    fn words_match_as_substrings() {
        // "settle" is inside "settled".
        let c = judgment("parties settled amicably");
        assert!((score(&c, "settle dispute") - 0.55).abs() < EPS);
    }

    #[test]
    fn no_overlap_scores_zero() {
        let c = judgment("cheque dishonour");
        assert_eq!(score(&c, "anticipatory bail"), 0.0);
    }

    #[test]
    fn boosts_apply_on_zero_base() {
        let c = statute("unrelated", "unrelated", Some("302"), Some("Indian Penal Code"));
        // No content overlap: section 0.2 + act 0.1.
        assert!((score(&c, "302 penal") - 0.3).abs() < EPS);
        let c = statute("unrelated", "unrelated", Some("302"), None);
        assert_eq!(score(&c, "penal"), 0.0);
    }

    #[test]
    fn section_boost() {
        let c = statute("whoever commits murder", "", Some("302"), None);
        // Two of three words overlap → 0.3 + 2/3 * 0.5, plus 0.2.
        let expected = 0.3 + (2.0 / 3.0) * 0.5 + 0.2;
        assert!((score(&c, "commits murder 302") - expected).abs() < EPS);
    }

    #[test]
    fn act_boost_applies_once() {
        let c = statute("indian penal code text", "", None, Some("Indian Penal Code, 1860"));
        // Phrase match 0.9 + act boost 0.1 even though three words hit the act.
        assert!((score(&c, "indian penal code") - 1.0).abs() < EPS);
        let c = statute("penal provisions", "", None, Some("Indian Penal Code, 1860"));
        // 1 of 2 words in content → 0.55, plus 0.1.
        assert!((score(&c, "penal sanctions") - 0.65).abs() < EPS);
    }

    #[test]
    fn capped_at_one() {
        let c = statute(
            "302. punishment for murder",
            "",
            Some("302"),
            Some("Indian Penal Code, 1860"),
        );
        // 0.9 + 0.2 + 0.1 would exceed 1.0.
        assert_eq!(score(&c, "302. punishment for murder"), 1.0);
    }

    #[test]
    fn empty_section_id_never_boosts() {
        let c = statute("murder", "", Some(""), None);
        assert!((score(&c, "murder") - 0.9).abs() < EPS);
    }

    #[test]
    fn custom_weights() {
        let weights = ScoringWeights {
            phrase_in_content: 0.5,
            ..Default::default()
        };
        let scorer = Scorer::new(weights);
        assert_eq!(scorer.weights().phrase_in_content, 0.5);
        let c = judgment("murder");
        assert!((scorer.score_text(&c, "MURDER") - 0.5).abs() < EPS);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let store = crate::DocumentStore::sample().unwrap();
        let scorer = Scorer::default();
        let queries = [
            "murder",
            "punishment for murder under BNS 103",
            "section 138 negotiable instruments act cheque",
            "quash FIR settlement 482",
            "a",
            "zzz",
            "Bharatiya Nyaya Sanhita, 2023 Section 105 culpable homicide",
        ];
        for q in queries {
            for chunk in store.all() {
                let s = scorer.score_text(chunk, q);
                assert!((0.0..=1.0).contains(&s), "score {s} for {q:?} on {}", chunk.id);
            }
        }
    }
}
