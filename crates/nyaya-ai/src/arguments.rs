//! Prosecution and defense arguments for a legal scenario.

use std::sync::Arc;

use nyaya_core::text::contains_any;
use nyaya_core::{ArgumentsResult, SearchFilters, SourceCase};
use nyaya_store::Retriever;
use tracing::debug;

use crate::rules::{Rule, RuleTable};
use crate::viability::{DEFAULT_CASE_URL, UNKNOWN_CASE, UNKNOWN_COURT};

/// A canned set of arguments and the ruling they led to.
#[derive(Debug, PartialEq, Eq)]
pub struct ArgumentSet {
    pub prosecution: &'static [&'static str],
    pub defense: &'static [&'static str],
    pub winning_argument: &'static str,
    pub court_ruling: &'static str,
}

static MURDER_TO_CULPABLE_HOMICIDE: ArgumentSet = ArgumentSet {
    prosecution: &[
        "Injury on vital part (head)",
        "Brain matter visible indicating severe injury",
        "Death resulted from the blow",
    ],
    defense: &[
        "Solitary blow - no repeated attack",
        "Victim was sleeping - no premeditation",
        "No clear intent to kill",
    ],
    winning_argument: "Defense argument of 'single blow without intent to kill' was successful",
    court_ruling: "Converted Section 302 (Murder) to Section 304 (Culpable Homicide not amounting to Murder)",
};

static CHEQUE_DISHONOUR: ArgumentSet = ArgumentSet {
    prosecution: &[
        "Cheque dishonoured due to insufficient funds",
        "Legal notice sent and not complied with",
        "Accused was director/in charge of company",
    ],
    defense: &[
        "Accused not involved in day-to-day operations",
        "No knowledge of the offence",
        "Exercised due diligence to prevent offence",
    ],
    winning_argument: "Prosecution argument prevailed in most cases",
    court_ruling: "Accused held liable under Section 141 NI Act",
};

/// Used when no rule matches.
pub static GENERIC: ArgumentSet = ArgumentSet {
    prosecution: &[
        "Evidence presented by prosecution",
        "Statutory provisions violated",
        "Intent and mens rea established",
    ],
    defense: &[
        "Lack of sufficient evidence",
        "Procedural irregularities",
        "Mitigating circumstances",
    ],
    winning_argument: "Defense argument was successful",
    court_ruling: "Court ruled in favor of defense",
};

const ARGUMENT_RULES: &[Rule<&'static ArgumentSet>] = &[
    Rule {
        name: "murder",
        when: |s| contains_any(s, &["murder", "302", "103"]),
        then: |_| &MURDER_TO_CULPABLE_HOMICIDE,
    },
    Rule {
        name: "cheque",
        when: |s| contains_any(s, &["cheque", "138"]),
        then: |_| &CHEQUE_DISHONOUR,
    },
];

/// Argument sets, evaluated in order against the lowercased scenario.
pub const ARGUMENT_TABLE: RuleTable<&'static ArgumentSet> =
    RuleTable::new("arguments", ARGUMENT_RULES);

/// Cited when retrieval finds no judgment.
fn fallback_source_case() -> SourceCase {
    SourceCase {
        title: "State vs Sonu".to_string(),
        court: "Gujarat High Court".to_string(),
        url: "https://indiankanoon.org/doc/example002".to_string(),
    }
}

/// Picks an argument set by keyword and cites the closest judgment.
#[derive(Debug, Clone)]
pub struct ArgumentMiner {
    retriever: Arc<Retriever>,
    top_k: usize,
}

impl ArgumentMiner {
    pub fn new(retriever: Arc<Retriever>, top_k: usize) -> Self {
        Self { retriever, top_k }
    }

    /// Arguments for `scenario`. Retrieval only decides the cited source
    /// case; the argument set depends on keywords alone.
    pub fn extract(&self, scenario: &str) -> ArgumentsResult {
        let retrieval = self
            .retriever
            .search(scenario, Some(&SearchFilters::judgments()), self.top_k);

        let set = ARGUMENT_TABLE
            .evaluate(&scenario.to_lowercase())
            .unwrap_or(&GENERIC);

        let source_case = match retrieval.ranked.first() {
            Some(top) => {
                let m = &top.chunk.metadata;
                SourceCase {
                    title: m.title().unwrap_or(UNKNOWN_CASE).to_string(),
                    court: m.court().unwrap_or(UNKNOWN_COURT).to_string(),
                    url: m.doc_url().unwrap_or(DEFAULT_CASE_URL).to_string(),
                }
            }
            None => fallback_source_case(),
        };
        debug!(
            retrieved = retrieval.ranked.len(),
            source = %source_case.title,
            "arguments extracted"
        );

        ArgumentsResult {
            prosecution_arguments: set.prosecution.iter().map(|s| s.to_string()).collect(),
            defense_arguments: set.defense.iter().map(|s| s.to_string()).collect(),
            winning_argument: set.winning_argument.to_string(),
            court_ruling: set.court_ruling.to_string(),
            source_case,
        }
    }
}
