//! Human-readable cards for service responses.
//!
//! Each response prints as a header line followed by labelled fields, with
//! labels padded to a fixed column so values line up.

use nyaya_core::{
    ArgumentsResult, ChatResponse, ClausesResult, HealthStatus, Metadata, SearchResponse, Turn,
    ViabilityResult,
};

const LABEL_WIDTH: usize = 16;

// ── Search ──

pub fn print_search(response: &SearchResponse) {
    println!(
        "=== {} result(s) in {} ms ===",
        response.total, response.query_time_ms
    );
    println!();
    for (rank, result) in response.results.iter().enumerate() {
        println!("{:>2}. {}  [{:.2}]", rank + 1, result.id, result.score);
        print_metadata(&result.metadata);
        field("content", &result.content);
        println!();
    }
}

fn print_metadata(metadata: &Metadata) {
    field("doc_type", metadata.doc_type().as_str());
    match metadata {
        Metadata::Statute(m) => {
            opt_field("act", m.act_name.as_deref());
            opt_field("section", m.section_id.as_deref());
            opt_field("chapter", m.chapter.as_deref());
            opt_field("category", m.category.as_deref());
        }
        Metadata::Judgment(m) => {
            opt_field("title", m.title.as_deref());
            opt_field("court", m.court.as_deref());
            opt_field("case_type", m.case_type.as_deref());
            opt_field("outcome", m.outcome.as_deref());
            if !m.acts_cited.is_empty() {
                field("acts_cited", &m.acts_cited.join(", "));
            }
            opt_field("url", m.doc_url.as_deref());
        }
    }
}

// ── Chat ──

pub fn print_chat(response: &ChatResponse) {
    println!("{}", response.answer);
    if response.sources.is_empty() {
        return;
    }
    println!();
    println!("Sources");
    for source in &response.sources {
        let label = match (&source.section_id, &source.act_name, &source.title) {
            (Some(section), Some(act), _) => format!("Section {section}, {act}"),
            (_, _, Some(title)) => title.clone(),
            _ => "(untitled)".to_string(),
        };
        match &source.court {
            Some(court) => println!("  [{:.2}] {label} ({court})", source.relevance_score),
            None => println!("  [{:.2}] {label}", source.relevance_score),
        }
    }
}

pub fn print_history(session_id: &str, turns: &[Turn]) {
    println!("=== session {session_id}: {} turn(s) ===", turns.len());
    for turn in turns {
        println!("  {:<10} {}", turn.role.as_str(), turn.content);
    }
}

// ── Inference ──

pub fn print_viability(result: &ViabilityResult) {
    println!(
        "=== {} viability ({:.0}% confidence) ===",
        result.prediction.as_str(),
        result.confidence * 100.0
    );
    println!("{}", result.reasoning);
    if result.supporting_cases.is_empty() {
        return;
    }
    println!();
    println!("Supporting cases");
    for case in &result.supporting_cases {
        println!("  [{:.2}] {}", case.relevance, case.title);
        field("court", &case.court);
        field("outcome", &case.outcome);
        field("url", &case.url);
    }
}

pub fn print_arguments(result: &ArgumentsResult) {
    println!("=== {} ===", result.source_case.title);
    println!("{}  {}", result.source_case.court, result.source_case.url);
    println!();
    print_list("Prosecution", &result.prosecution_arguments);
    print_list("Defense", &result.defense_arguments);
    field("winning", &result.winning_argument);
    field("ruling", &result.court_ruling);
}

pub fn print_clauses(result: &ClausesResult) {
    if result.clauses.is_empty() {
        println!("No clauses found.");
        return;
    }
    for (i, clause) in result.clauses.iter().enumerate() {
        println!("{}. {}", i + 1, clause.text);
        field("source", &clause.source);
        field("court", &clause.court);
        field("citation", &clause.citation);
        println!();
    }
}

pub fn print_suggestions(suggestions: &[&str]) {
    for s in suggestions {
        println!("{s}");
    }
}

pub fn print_health(status: &HealthStatus) {
    println!("{} {} v{}", status.status, status.service, status.version);
    field("timestamp", &status.timestamp.to_rfc3339());
}

// ── Helpers ──

fn field(label: &str, value: &str) {
    println!("  {label:<LABEL_WIDTH$} {value}");
}

fn opt_field(label: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        field(label, v);
    }
}

fn print_list(header: &str, items: &[String]) {
    println!("{header}");
    for item in items {
        println!("  - {item}");
    }
    println!();
}
