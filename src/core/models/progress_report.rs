//! Progress report model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    /// Every week
    Weekly,
    /// Every two weeks
    BiWeekly,
    /// Every month
    Monthly,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
        };
        write!(f, "{as_str}")
    }
}

/// A student-submitted progress report for an internship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Report identifier (e.g., "r1")
    pub id: String,

    /// Internship the report covers
    pub internship_id: String,

    /// Submitting student's user id
    pub student_id: String,

    /// Reporting cadence
    pub period: ReportPeriod,

    /// Week of the internship the report covers (1-based)
    pub week_number: u32,

    /// One-line summary
    pub summary: String,

    /// Achievements, in submission order
    pub achievements: Vec<String>,

    /// Challenges hit during the period, if any
    pub challenges: Option<Vec<String>>,

    /// Supporting links, if any
    pub links: Option<Vec<String>>,

    /// Submission timestamp (RFC 3339)
    pub created_at: String,
}
