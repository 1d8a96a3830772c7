//! Internship model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipStatus {
    /// Currently running
    Active,
    /// Finished
    Completed,
    /// Paused
    OnHold,
}

impl fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        };
        write!(f, "{as_str}")
    }
}

/// A placement of one student with one mentor against one opportunity
///
/// The mentor, student, and opportunity ids are expected to resolve in the
/// data store; views degrade to blank fields when they do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    /// Internship identifier (e.g., "i1")
    pub id: String,

    /// Opportunity this placement was made against
    pub opportunity_id: String,

    /// Supervising mentor's user id
    pub mentor_id: String,

    /// Placed student's user id
    pub student_id: String,

    /// Start date (RFC 3339 date)
    pub start_date: String,

    /// End date, once finished
    pub end_date: Option<String>,

    /// Placement status
    pub status: InternshipStatus,
}

impl Internship {
    /// Whether the placement is currently running
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, InternshipStatus::Active)
    }
}
