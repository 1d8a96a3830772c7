//! Dashboard view
//!
//! The personal page behind `/dashboard`: task statistics, the task
//! board, recent feedback, progress reports, and the latest evaluation.

use crate::core::models::TaskStatus;
use crate::core::progress::{self, TaskStats};
use crate::core::views::{display_date, progress_bar, Render, ViewContext};
use std::fmt::Write;

/// How many feedback entries the dashboard shows
const RECENT_FEEDBACK_LIMIT: usize = 3;

/// How many achievements each report card lists
const REPORT_ACHIEVEMENT_LIMIT: usize = 2;

/// Personal dashboard page
pub struct DashboardView;

impl DashboardView {
    fn render_stats(ctx: &ViewContext, stats: TaskStats, out: &mut String) {
        let _ = writeln!(
            out,
            "Total Tasks:      {} ({} completed)",
            stats.total, stats.done
        );
        let _ = writeln!(out, "In Progress:      {}", stats.in_progress);
        let _ = writeln!(
            out,
            "Completion Rate:  {:>3}% {}",
            stats.completion_pct,
            progress_bar(stats.completion_pct, 20)
        );

        let performance = progress::latest_evaluation(&ctx.store.evaluations)
            .map_or(0, progress::evaluation_percentage);
        let _ = writeln!(
            out,
            "Performance:      {performance:>3}% (latest evaluation)"
        );
    }

    fn render_board(ctx: &ViewContext, out: &mut String) {
        out.push_str("\n=== Task Board ===\n");

        for status in [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done,
        ] {
            let column: Vec<_> = ctx
                .store
                .tasks
                .iter()
                .filter(|t| t.status == status)
                .collect();

            let _ = writeln!(out, "\n{} ({})", status.label(), column.len());
            for task in column {
                let _ = write!(out, "  - {}", task.title);
                if let Some(priority) = task.priority {
                    let _ = write!(out, " [{priority}]");
                }
                if let Some(due) = &task.due_date {
                    let _ = write!(out, " (due {due})");
                }
                out.push('\n');
            }
        }
    }

    fn render_feedback(ctx: &ViewContext, out: &mut String) {
        let _ = writeln!(
            out,
            "\n=== Recent Feedback ({}) ===",
            ctx.store.feedback.len()
        );

        if ctx.store.feedback.is_empty() {
            out.push_str("\nNo feedback yet\n");
            return;
        }

        for entry in ctx.store.feedback.iter().take(RECENT_FEEDBACK_LIMIT) {
            let _ = write!(out, "\n  {}", entry.author_name);
            if let Some(rating) = entry.rating {
                let _ = write!(out, " — {rating}/5");
            }
            let _ = writeln!(out, " ({})", display_date(&entry.created_at));
            let _ = writeln!(out, "    {}", entry.message);
        }
    }

    fn render_reports(ctx: &ViewContext, out: &mut String) {
        out.push_str("\n=== Progress Reports ===\n");

        if ctx.store.reports.is_empty() {
            out.push_str("\nNo reports submitted yet\n");
            return;
        }

        for report in &ctx.store.reports {
            let _ = writeln!(
                out,
                "\n  Week {} Report [{}] ({})",
                report.week_number,
                report.period,
                display_date(&report.created_at)
            );
            let _ = writeln!(out, "    {}", report.summary);

            out.push_str("    Achievements:\n");
            for achievement in report.achievements.iter().take(REPORT_ACHIEVEMENT_LIMIT) {
                let _ = writeln!(out, "      + {achievement}");
            }
        }
    }

    fn render_evaluation(ctx: &ViewContext, out: &mut String) {
        let Some(evaluation) = progress::latest_evaluation(&ctx.store.evaluations) else {
            return;
        };

        out.push_str("\n=== Latest Evaluation ===\n");
        let _ = writeln!(
            out,
            "\n  {}/{} — {}% Overall Score ({})",
            evaluation.total_score,
            evaluation.max_score,
            progress::evaluation_percentage(evaluation),
            display_date(&evaluation.created_at)
        );

        for criterion in &evaluation.criteria {
            let pct = progress::percentage(criterion.score as usize, criterion.max_score as usize);
            let _ = writeln!(
                out,
                "  {:<18} {:>3}/{:<3} {}",
                criterion.name,
                criterion.score,
                criterion.max_score,
                progress_bar(pct, 20)
            );
        }

        if let Some(comments) = &evaluation.comments {
            let _ = writeln!(out, "\n  Mentor's Comments: {comments}");
        }
    }
}

impl Render for DashboardView {
    fn render(&self, ctx: &ViewContext) -> String {
        let mut out = String::new();

        // Greeting degrades gracefully when rendered without a session
        let name = ctx.user.map_or("there", |u| u.name.as_str());
        let _ = writeln!(out, "Welcome back, {name}!");
        out.push_str("Track your internship progress and stay on top of your tasks.\n\n");

        let stats = TaskStats::from_tasks(&ctx.store.tasks);
        Self::render_stats(ctx, stats, &mut out);
        Self::render_board(ctx, &mut out);
        Self::render_feedback(ctx, &mut out);
        Self::render_reports(ctx, &mut out);
        Self::render_evaluation(ctx, &mut out);

        out
    }
}
