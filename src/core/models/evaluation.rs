//! Evaluation model

use serde::{Deserialize, Serialize};

/// One scored dimension within an evaluation (e.g., "Communication")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriteria {
    /// Dimension name
    pub name: String,

    /// Awarded score (score ≤ `max_score`, not enforced in this build)
    pub score: u32,

    /// Maximum awardable score
    pub max_score: u32,

    /// Relative weight, if the rubric uses one
    pub weight: Option<f32>,
}

/// A mentor's scored evaluation of a student's internship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Evaluation identifier (e.g., "e1")
    pub id: String,

    /// Internship being evaluated
    pub internship_id: String,

    /// Evaluated student's user id
    pub student_id: String,

    /// Evaluating mentor's user id
    pub mentor_id: String,

    /// Scored dimensions, in rubric order
    pub criteria: Vec<EvaluationCriteria>,

    /// Total awarded score (≤ sum of criteria max scores, not enforced)
    pub total_score: u32,

    /// Total awardable score
    pub max_score: u32,

    /// Free-form mentor comments
    pub comments: Option<String>,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}
