//! Section and act name suggestions for search-as-you-type.

/// Upper bound on suggestions returned per prefix.
pub const MAX_SUGGESTIONS: usize = 10;

/// Fixed suggestion list, in display order.
pub const SUGGESTIONS: &[&str] = &[
    "Section 103 - Murder (BNS)",
    "Section 104 - Punishment for murder by life-convict (BNS)",
    "Section 105 - Culpable homicide not amounting to murder (BNS)",
    "Section 138 - Dishonour of cheque (NI Act)",
    "Section 141 - Offences by companies (NI Act)",
    "Section 302 - Punishment for murder (IPC)",
    "Section 304 - Culpable homicide not amounting to murder (IPC)",
    "Section 482 - Inherent powers of High Court (BNSS)",
    "Bharatiya Nyaya Sanhita, 2023",
    "Negotiable Instruments Act, 1881",
    "Indian Penal Code, 1860",
    "Bharatiya Nagarik Suraksha Sanhita, 2023",
];

/// Suggestions containing `q` (case-insensitive), in list order, at most
/// [`MAX_SUGGESTIONS`].
pub fn suggest(q: &str) -> Vec<&'static str> {
    let needle = q.to_lowercase();
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
