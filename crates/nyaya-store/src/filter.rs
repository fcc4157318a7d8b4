//! Metadata filtering.
//!
//! A [`SearchFilters`] value is a conjunction: a chunk passes only if it
//! satisfies every set field. `doc_type` compares exactly; the string fields
//! are case-insensitive substring tests against the chunk's metadata, and a
//! chunk without the field never satisfies a non-empty constraint. Empty
//! strings impose no constraint.

use nyaya_core::{Chunk, SearchFilters};

/// True if `chunk` satisfies every constraint in `filters`.
pub fn matches(chunk: &Chunk, filters: &SearchFilters) -> bool {
    let meta = &chunk.metadata;
    if let Some(doc_type) = filters.doc_type
        && meta.doc_type() != doc_type
    {
        return false;
    }
    field_contains(meta.act_name(), filters.act_name.as_deref())
        && field_contains(meta.category(), filters.category.as_deref())
        && field_contains(meta.court(), filters.court.as_deref())
        && field_contains(meta.case_type(), filters.case_type.as_deref())
}

/// Select the chunks that satisfy `filters`, preserving input order.
///
/// `None` passes everything through.
pub fn apply<'a, I>(chunks: I, filters: Option<&SearchFilters>) -> Vec<&'a Chunk>
where
    I: IntoIterator<Item = &'a Chunk>,
{
    match filters {
        None => chunks.into_iter().collect(),
        Some(f) => chunks.into_iter().filter(|c| matches(c, f)).collect(),
    }
}

fn field_contains(value: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => value.is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentStore;
    use nyaya_core::DocType;

    fn ids<'a>(chunks: &[&'a Chunk]) -> Vec<&'a str> {
        chunks.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn none_returns_everything_in_order() {
        let store = DocumentStore::sample().unwrap();
        let out = apply(store.all(), None);
        assert_eq!(out.len(), store.len());
        assert_eq!(out[0].id, "BNS_Sec_103");
    }

    #[test]
    fn empty_filters_return_everything() {
        let store = DocumentStore::sample().unwrap();
        let out = apply(store.all(), Some(&SearchFilters::default()));
        assert_eq!(out.len(), store.len());
    }

    #[test]
    fn doc_type_exact() {
        let store = DocumentStore::sample().unwrap();
        let out = apply(store.all(), Some(&SearchFilters::judgments()));
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|c| c.metadata.doc_type() == DocType::Judgment));
    }

    #[test]
    fn act_name_case_insensitive_substring() {
        let store = DocumentStore::sample().unwrap();
        let filters = SearchFilters {
            act_name: Some("NYAYA".into()),
            ..Default::default()
        };
        let out = apply(store.all(), Some(&filters));
        assert_eq!(ids(&out), vec!["BNS_Sec_103", "BNS_Sec_104", "BNS_Sec_105"]);
    }

    #[test]
    fn missing_field_never_matches() {
        let store = DocumentStore::sample().unwrap();
        // Statutes carry no court, judgments carry no act_name.
        let court = SearchFilters {
            court: Some("court".into()),
            ..Default::default()
        };
        assert!(
            apply(store.all(), Some(&court))
                .iter()
                .all(|c| c.metadata.doc_type() == DocType::Judgment)
        );
        let act = SearchFilters {
            doc_type: Some(DocType::Judgment),
            act_name: Some("act".into()),
            ..Default::default()
        };
        assert!(apply(store.all(), Some(&act)).is_empty());
    }

    #[test]
    fn empty_string_is_no_constraint() {
        let store = DocumentStore::sample().unwrap();
        let filters = SearchFilters {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply(store.all(), Some(&filters)).len(), store.len());
    }

    #[test]
    fn constraints_compose_by_and() {
        let store = DocumentStore::sample().unwrap();
        let filters = SearchFilters {
            doc_type: Some(DocType::Judgment),
            court: Some("gujarat".into()),
            case_type: Some("criminal".into()),
            ..Default::default()
        };
        let out = apply(store.all(), Some(&filters));
        assert_eq!(ids(&out), vec!["judgment_001", "judgment_002", "judgment_003"]);
    }

    #[test]
    fn idempotent() {
        let store = DocumentStore::sample().unwrap();
        let filters = SearchFilters {
            category: Some("criminal".into()),
            ..Default::default()
        };
        let once = apply(store.all(), Some(&filters));
        let twice = apply(once.clone(), Some(&filters));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn field_order_independent() {
        let store = DocumentStore::sample().unwrap();
        let court = SearchFilters {
            court: Some("high court".into()),
            ..Default::default()
        };
        let outcome_type = SearchFilters {
            case_type: Some("crim".into()),
            ..Default::default()
        };
        let combined = SearchFilters {
            court: court.court.clone(),
            case_type: outcome_type.case_type.clone(),
            ..Default::default()
        };

        let a = apply(apply(store.all(), Some(&court)), Some(&outcome_type));
        let b = apply(apply(store.all(), Some(&outcome_type)), Some(&court));
        let c = apply(store.all(), Some(&combined));
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), ids(&c));
    }

    #[test]
    fn filtering_does_not_mutate() {
        let store = DocumentStore::sample().unwrap();
        let before = store.all().to_vec();
        let _ = apply(store.all(), Some(&SearchFilters::judgments()));
        assert_eq!(store.all(), before.as_slice());
    }
}
