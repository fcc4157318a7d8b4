//! Rule-based chat answers with source citations.
//!
//! Not a language model: a fixed rule table maps well-known question shapes
//! to canned answers, and anything else is answered by quoting the best
//! retrieved chunk.

use std::sync::Arc;

use nyaya_core::text::{ELLIPSIS, contains_all, contains_any, prefix_chars, round_score};
use nyaya_core::{Metadata, Role, ScoredChunk, SourceReference};
use tracing::debug;

use crate::latency::Latency;
use crate::memory::SessionMemory;
use crate::rules::{Rule, RuleTable};

/// Reply when no rule matches and nothing was retrieved.
pub const INSUFFICIENT_INFORMATION: &str = "I don't have sufficient information in my knowledge base to answer this question accurately. Please try rephrasing your query or provide more specific details.";

/// Characters of chunk content quoted in a fallback answer.
const QUOTE_CHARS: usize = 200;

/// Sources attached to each answer.
const MAX_SOURCES: usize = 3;

const MURDER_BNS: &str = "Under Section 103 of the Bharatiya Nyaya Sanhita (BNS), 2023, whoever commits murder shall be punished with death or imprisonment for life, and shall also be liable to fine.";

const MURDER_IPC: &str = "Under Section 302 of the Indian Penal Code (IPC), 1860, whoever commits murder shall be punished with death, or imprisonment for life, and shall also be liable to fine.";

const CHEQUE_DISHONOUR: &str = "Under Section 138 of the Negotiable Instruments Act, 1881, dishonour of a cheque for insufficiency of funds is a criminal offence. The person shall be punished with imprisonment for a term which may extend to two years, or with fine which may extend to twice the amount of the cheque, or with both.";

const VICARIOUS_LIABILITY: &str = "Based on the judgment in Priti Bhojnagarwala vs State Of Gujarat, the court held that in an association of individuals, the wife is deemed to be a director and is responsible for the conduct of business. Therefore, she can be held liable under Section 141 of the NI Act even without signing the cheque.";

const SETTLEMENT_QUASHING: &str = "Based on the judgment in Rabari Sagarbhai vs State, when parties have settled the dispute amicably, the High Court can exercise its inherent powers under Section 482 BNSS to quash the FIR. The court held that continuation of criminal proceedings would amount to abuse of process of law when the dispute is overwhelmingly civil in nature and has been resolved.";

const CULPABLE_HOMICIDE: &str = "Based on the judgment in State vs Sonu, if the accused inflicted only a solitary blow without clear intention to kill, the offence may be classified as culpable homicide not amounting to murder under Section 304 IPC instead of murder under Section 302 IPC. The court considers factors like whether it was a single blow, lack of premeditation, and absence of repeated attacks.";

const ANSWER_RULES: &[Rule<&'static str>] = &[
    Rule {
        name: "murder_punishment",
        when: |q| contains_all(q, &["murder", "punishment"]),
        then: |q| if q.contains("bns") { MURDER_BNS } else { MURDER_IPC },
    },
    Rule {
        name: "cheque_dishonour",
        when: |q| q.contains("cheque") && contains_any(q, &["dishonour", "bounce"]),
        then: |_| CHEQUE_DISHONOUR,
    },
    Rule {
        name: "vicarious_liability",
        when: |q| contains_all(q, &["wife", "liable"]),
        then: |_| VICARIOUS_LIABILITY,
    },
    Rule {
        name: "settlement_quashing",
        when: |q| q.contains("settlement") && contains_any(q, &["quash", "fir"]),
        then: |_| SETTLEMENT_QUASHING,
    },
    Rule {
        name: "culpable_homicide",
        when: |q| q.contains("culpable homicide") || (q.contains("murder") && q.contains("304")),
        then: |_| CULPABLE_HOMICIDE,
    },
];

/// Canned answers, evaluated in order against the lowercased query.
pub const ANSWER_TABLE: RuleTable<&'static str> = RuleTable::new("answer", ANSWER_RULES);

/// Produces chat answers and records both sides of the exchange.
#[derive(Debug, Clone)]
pub struct AnswerGenerator {
    memory: Arc<SessionMemory>,
    latency: Arc<dyn Latency>,
}

impl AnswerGenerator {
    pub fn new(memory: Arc<SessionMemory>, latency: Arc<dyn Latency>) -> Self {
        Self { memory, latency }
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Answer `query` from `retrieved` (best first), citing up to three sources.
    ///
    /// The user and assistant turns are appended to `session_id`'s history.
    /// History is not consulted when composing the answer.
    pub async fn generate(
        &self,
        query: &str,
        retrieved: &[ScoredChunk<'_>],
        session_id: &str,
    ) -> (String, Vec<SourceReference>) {
        self.latency.pause().await;

        self.memory.append_turn(session_id, Role::User, query);
        let answer = compose(query, retrieved);
        self.memory
            .append_turn(session_id, Role::Assistant, answer.as_str());

        (answer, sources(retrieved))
    }
}

/// The answer text alone, without touching session state.
pub fn compose(query: &str, retrieved: &[ScoredChunk<'_>]) -> String {
    let q = query.to_lowercase();
    if let Some(answer) = ANSWER_TABLE.evaluate(&q) {
        return answer.to_string();
    }
    let Some(top) = retrieved.first() else {
        debug!("no rule matched and nothing retrieved");
        return INSUFFICIENT_INFORMATION.to_string();
    };

    debug!(chunk = %top.chunk.id, "answering from top chunk");
    let quote = prefix_chars(&top.chunk.raw_content, QUOTE_CHARS);
    match &top.chunk.metadata {
        Metadata::Statute(m) => format!(
            "According to Section {} of {}, {quote}{ELLIPSIS}",
            m.section_id.as_deref().unwrap_or(""),
            m.act_name.as_deref().unwrap_or("the Act"),
        ),
        Metadata::Judgment(m) => format!(
            "Based on {}, {quote}{ELLIPSIS}",
            m.title.as_deref().unwrap_or("the judgment"),
        ),
    }
}

/// Citations for the top retrieved chunks, scores rounded for display.
pub fn sources(retrieved: &[ScoredChunk<'_>]) -> Vec<SourceReference> {
    retrieved
        .iter()
        .take(MAX_SOURCES)
        .map(|s| {
            let m = &s.chunk.metadata;
            SourceReference {
                section_id: m.section_id().map(str::to_string),
                act_name: m.act_name().map(str::to_string),
                chapter: m.chapter().map(str::to_string),
                title: m.title().map(str::to_string),
                court: m.court().map(str::to_string),
                relevance_score: round_score(s.score),
            }
        })
        .collect()
}
