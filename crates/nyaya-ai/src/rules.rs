//! Ordered keyword rule tables.
//!
//! Each inference module keeps its rules as a `const` slice evaluated
//! top-to-bottom against a lowercased input. The first rule whose predicate
//! holds wins and later rules are never consulted. When more than one
//! predicate holds, the shadowed rules are logged at `warn` so overlapping
//! keywords stay visible instead of being resolved silently.

use tracing::{debug, warn};

/// One `(predicate, producer)` pair. Both receive the lowercased input.
pub struct Rule<T: 'static> {
    pub name: &'static str,
    pub when: fn(&str) -> bool,
    pub then: fn(&str) -> T,
}

/// A named, ordered, first-match-wins list of rules.
pub struct RuleTable<T: 'static> {
    name: &'static str,
    rules: &'static [Rule<T>],
}

impl<T: 'static> RuleTable<T> {
    pub const fn new(name: &'static str, rules: &'static [Rule<T>]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &'static [Rule<T>] {
        self.rules
    }

    /// Names of every rule whose predicate holds, in table order.
    pub fn matching(&self, input: &str) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| (r.when)(input))
            .map(|r| r.name)
            .collect()
    }

    /// The winning rule for `input`, if any.
    pub fn first_match(&self, input: &str) -> Option<&'static Rule<T>> {
        let mut hits = self.rules.iter().filter(|r| (r.when)(input));
        let winner = hits.next()?;
        let shadowed: Vec<&str> = hits.map(|r| r.name).collect();
        if shadowed.is_empty() {
            debug!(table = self.name, rule = winner.name, "rule matched");
        } else {
            warn!(
                table = self.name,
                rule = winner.name,
                ?shadowed,
                "overlapping rules matched, first one wins"
            );
        }
        Some(winner)
    }

    /// Run the winning rule's producer, or `None` when nothing matches.
    pub fn evaluate(&self, input: &str) -> Option<T> {
        self.first_match(input).map(|rule| (rule.then)(input))
    }
}
