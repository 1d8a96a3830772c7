//! Opportunity model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing status of an opportunity
///
/// Only open opportunities appear in the public catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    /// Accepting applications
    Open,
    /// No longer listed in the catalog
    Closed,
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Open => "open",
            Self::Closed => "closed",
        };
        write!(f, "{as_str}")
    }
}

/// A posted internship listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Opportunity identifier (e.g., "op1")
    pub id: String,

    /// Listing title (e.g., "Frontend Development Intern")
    pub title: String,

    /// Posting company
    pub company: String,

    /// Free-text category (e.g., "Web Development")
    pub domain: String,

    /// Role description
    pub description: String,

    /// Placement length in weeks
    pub duration_weeks: u32,

    /// Monthly stipend, if any
    pub stipend: Option<u32>,

    /// Listing status
    pub status: OpportunityStatus,

    /// Id of the user who posted the listing
    pub created_by: String,

    /// Required skills, in posting order
    pub requirements: Option<Vec<String>>,

    /// Work location (e.g., "Remote", "Hybrid")
    pub location: Option<String>,
}

impl Opportunity {
    /// Whether the listing is open for applications
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, OpportunityStatus::Open)
    }

    /// Case-insensitive substring match against title, company, or domain
    ///
    /// An empty query matches every listing.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.company.to_lowercase().contains(&needle)
            || self.domain.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Opportunity {
        Opportunity {
            id: "op1".to_string(),
            title: "Frontend Development Intern".to_string(),
            company: "TechCorp Solutions".to_string(),
            domain: "Web Development".to_string(),
            description: "Work on React applications".to_string(),
            duration_weeks: 12,
            stipend: Some(15000),
            status: OpportunityStatus::Open,
            created_by: "u3".to_string(),
            requirements: Some(vec!["React".to_string(), "Git".to_string()]),
            location: Some("Remote".to_string()),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(listing().matches_search(""));
    }

    #[test]
    fn search_covers_title_company_and_domain() {
        let opp = listing();
        assert!(opp.matches_search("frontend"));
        assert!(opp.matches_search("techcorp"));
        assert!(opp.matches_search("web"));
        assert!(!opp.matches_search("embedded"));
    }

    #[test]
    fn search_ignores_case() {
        assert!(listing().matches_search("FRONTEND"));
        assert!(listing().matches_search("TechCorp"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OpportunityStatus::Open).expect("serialize status");
        assert_eq!(json, "\"open\"");
        assert_eq!(OpportunityStatus::Closed.to_string(), "closed");
    }
}
