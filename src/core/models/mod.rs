//! Domain models for the internship platform
//!
//! All entities are immutable value records; the fixture store never
//! mutates them after construction.

pub mod evaluation;
pub mod feedback;
pub mod internship;
pub mod opportunity;
pub mod progress_report;
pub mod task;
pub mod user;

pub use evaluation::{Evaluation, EvaluationCriteria};
pub use feedback::Feedback;
pub use internship::{Internship, InternshipStatus};
pub use opportunity::{Opportunity, OpportunityStatus};
pub use progress_report::{ProgressReport, ReportPeriod};
pub use task::{Task, TaskPriority, TaskStatus};
pub use user::{Role, User};
