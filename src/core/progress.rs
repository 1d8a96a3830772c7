//! Task and evaluation aggregation
//!
//! Pure count/percentage derivations used by the dashboard and admin
//! views. Every percentage here defines the zero-denominator case as 0
//! rather than propagating a NaN into the presentation.

use crate::core::models::{Evaluation, Task, TaskStatus};
use crate::core::store::DataStore;

/// Aggregate statistics for a collection of tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Total number of tasks
    pub total: usize,
    /// Tasks in the done state
    pub done: usize,
    /// Tasks in the in-progress state
    pub in_progress: usize,
    /// `round(100 * done / total)`, 0 when there are no tasks
    pub completion_pct: u32,
}

impl TaskStats {
    /// Aggregate a borrowed task collection
    #[must_use]
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut total = 0;
        let mut done = 0;
        let mut in_progress = 0;

        for task in tasks {
            total += 1;
            match task.status {
                TaskStatus::Done => done += 1,
                TaskStatus::InProgress => in_progress += 1,
                TaskStatus::Todo | TaskStatus::Review => {}
            }
        }

        Self {
            total,
            done,
            in_progress,
            completion_pct: percentage(done, total),
        }
    }
}

/// Completion statistics for one internship's tasks
#[must_use]
pub fn for_internship(store: &DataStore, internship_id: &str) -> TaskStats {
    TaskStats::from_tasks(store.tasks_for(internship_id).into_iter())
}

/// The most recent evaluation by creation time, if any
#[must_use]
pub fn latest_evaluation(evaluations: &[Evaluation]) -> Option<&Evaluation> {
    evaluations.iter().max_by(|a, b| {
        // RFC 3339 timestamps order chronologically as strings
        a.created_at.cmp(&b.created_at)
    })
}

/// Overall score of an evaluation as a rounded percentage
///
/// A zero max score yields 0.
#[must_use]
pub fn evaluation_percentage(evaluation: &Evaluation) -> u32 {
    percentage(
        evaluation.total_score as usize,
        evaluation.max_score as usize,
    )
}

/// `round(100 * part / whole)` with the zero-denominator case pinned to 0
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (100.0 * part as f64 / whole as f64).round() as u32;
    pct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{EvaluationCriteria, TaskPriority};

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            internship_id: "i1".to_string(),
            title: format!("Task {id}"),
            description: None,
            due_date: None,
            status,
            created_at: "2025-01-15T10:00:00Z".to_string(),
            priority: Some(TaskPriority::Medium),
        }
    }

    fn evaluation(id: &str, total: u32, max: u32, created_at: &str) -> Evaluation {
        Evaluation {
            id: id.to_string(),
            internship_id: "i1".to_string(),
            student_id: "u1".to_string(),
            mentor_id: "u2".to_string(),
            criteria: vec![EvaluationCriteria {
                name: "Overall".to_string(),
                score: total,
                max_score: max,
                weight: None,
            }],
            total_score: total,
            max_score: max,
            comments: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn empty_task_list_yields_zero_percent() {
        let stats = TaskStats::from_tasks([].iter());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.done, 0);
        assert_eq!(stats.completion_pct, 0);
    }

    #[test]
    fn all_done_yields_one_hundred_percent() {
        let tasks = vec![task("t1", TaskStatus::Done), task("t2", TaskStatus::Done)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.completion_pct, 100);
    }

    #[test]
    fn two_done_of_six_rounds_to_thirty_three() {
        let tasks = vec![
            task("t1", TaskStatus::Done),
            task("t2", TaskStatus::Done),
            task("t3", TaskStatus::InProgress),
            task("t4", TaskStatus::Review),
            task("t5", TaskStatus::Todo),
            task("t6", TaskStatus::Todo),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completion_pct, 33);
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 1 of 8 is 12.5, rounds away from zero
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn sample_store_dashboard_numbers() {
        let store = DataStore::sample();
        let stats = TaskStats::from_tasks(&store.tasks);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completion_pct, 33);

        let latest = latest_evaluation(&store.evaluations).expect("sample evaluation");
        assert_eq!(evaluation_percentage(latest), 86);
    }

    #[test]
    fn evaluation_percentage_guards_zero_max_score() {
        let eval = evaluation("e1", 0, 0, "2025-02-15T10:00:00Z");
        assert_eq!(evaluation_percentage(&eval), 0);
    }

    #[test]
    fn latest_evaluation_picks_newest_by_created_at() {
        let evals = vec![
            evaluation("e1", 300, 500, "2025-02-15T10:00:00Z"),
            evaluation("e2", 428, 500, "2025-03-01T10:00:00Z"),
            evaluation("e3", 350, 500, "2025-01-10T10:00:00Z"),
        ];
        let latest = latest_evaluation(&evals).expect("latest");
        assert_eq!(latest.id, "e2");
    }

    #[test]
    fn latest_evaluation_of_empty_slice_is_none() {
        assert!(latest_evaluation(&[]).is_none());
    }

    #[test]
    fn per_internship_stats_only_count_that_internship() {
        let store = DataStore::sample();
        let stats = for_internship(&store, "i1");
        assert_eq!(stats.total, 6);
        assert_eq!(stats.done, 2);

        let missing = for_internship(&store, "i404");
        assert_eq!(missing.total, 0);
        assert_eq!(missing.completion_pct, 0);
    }
}
