//! Catalog filtering
//!
//! Pure functions over the opportunity listings; no side effects and no
//! shared mutable state.

use crate::core::models::Opportunity;

/// Filter listings for the public catalog
///
/// A listing is included iff it is open, the query (case-insensitively)
/// matches its title, company, or domain, and it belongs to the selected
/// domain when one is given. An empty query matches everything; domain
/// selection is an exact match.
///
/// # Arguments
/// * `opportunities` - Listings to filter
/// * `query` - Free-text search string (may be empty)
/// * `domain` - Selected domain chip, if any
#[must_use]
pub fn filter<'a>(
    opportunities: &'a [Opportunity],
    query: &str,
    domain: Option<&str>,
) -> Vec<&'a Opportunity> {
    opportunities
        .iter()
        .filter(|opp| {
            opp.is_open()
                && opp.matches_search(query)
                && domain.is_none_or(|d| opp.domain == d)
        })
        .collect()
}

/// Distinct domains across all listings, in first-seen order
///
/// These are the filter chips offered to the user. The extraction is
/// order-stable: calling it twice on the same input yields the same
/// sequence.
#[must_use]
pub fn domains(opportunities: &[Opportunity]) -> Vec<&str> {
    let mut seen = Vec::new();
    for opp in opportunities {
        if !seen.contains(&opp.domain.as_str()) {
            seen.push(opp.domain.as_str());
        }
    }
    seen
}
