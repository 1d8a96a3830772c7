//! Fixture data store
//!
//! A static, read-only snapshot of sample entities standing in for a
//! database. Nothing in the system writes to the store after construction;
//! all "create"/"edit" surfaces in this build are inert.

use crate::core::models::{
    Evaluation, EvaluationCriteria, Feedback, Internship, InternshipStatus, Opportunity,
    OpportunityStatus, ProgressReport, ReportPeriod, Role, Task, TaskPriority, TaskStatus, User,
};

/// Read-only snapshot of all platform entities
///
/// Lookups return `Option`; callers rendering a view degrade to blank
/// fields when a foreign reference does not resolve rather than failing
/// the whole view.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    /// Platform accounts
    pub users: Vec<User>,
    /// Posted internship listings
    pub opportunities: Vec<Opportunity>,
    /// Placements
    pub internships: Vec<Internship>,
    /// Work items across all placements
    pub tasks: Vec<Task>,
    /// Mentor notes across all placements
    pub feedback: Vec<Feedback>,
    /// Student progress reports across all placements
    pub reports: Vec<ProgressReport>,
    /// Mentor evaluations across all placements
    pub evaluations: Vec<Evaluation>,
}

impl DataStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            opportunities: Vec::new(),
            internships: Vec::new(),
            tasks: Vec::new(),
            feedback: Vec::new(),
            reports: Vec::new(),
            evaluations: Vec::new(),
        }
    }

    /// Look up a user by id
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up the first user carrying a role
    ///
    /// Login selects accounts by role, not by id; the fixture set carries
    /// one account per role.
    #[must_use]
    pub fn user_by_role(&self, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.role == role)
    }

    /// Look up an opportunity by id
    #[must_use]
    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }

    /// Look up an internship by id
    #[must_use]
    pub fn internship(&self, id: &str) -> Option<&Internship> {
        self.internships.iter().find(|i| i.id == id)
    }

    /// Tasks belonging to an internship, in creation order
    #[must_use]
    pub fn tasks_for(&self, internship_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.internship_id == internship_id)
            .collect()
    }

    /// Feedback left on an internship, in creation order
    #[must_use]
    pub fn feedback_for(&self, internship_id: &str) -> Vec<&Feedback> {
        self.feedback
            .iter()
            .filter(|f| f.internship_id == internship_id)
            .collect()
    }

    /// Progress reports submitted for an internship, in submission order
    #[must_use]
    pub fn reports_for(&self, internship_id: &str) -> Vec<&ProgressReport> {
        self.reports
            .iter()
            .filter(|r| r.internship_id == internship_id)
            .collect()
    }

    /// Evaluations recorded for an internship
    #[must_use]
    pub fn evaluations_for(&self, internship_id: &str) -> Vec<&Evaluation> {
        self.evaluations
            .iter()
            .filter(|e| e.internship_id == internship_id)
            .collect()
    }

    /// Number of currently active placements
    #[must_use]
    pub fn active_internships(&self) -> usize {
        self.internships.iter().filter(|i| i.is_active()).count()
    }

    /// The bundled sample dataset
    ///
    /// Three accounts (one per role), four open listings, one active
    /// placement with its tasks, feedback, reports, and a single
    /// evaluation.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            users: sample_users(),
            opportunities: sample_opportunities(),
            internships: sample_internships(),
            tasks: sample_tasks(),
            feedback: sample_feedback(),
            reports: sample_reports(),
            evaluations: sample_evaluations(),
        }
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new(
            "u1".to_string(),
            "John Student".to_string(),
            "john@student.com".to_string(),
            Role::Student,
        ),
        User::new(
            "u2".to_string(),
            "Sarah Mentor".to_string(),
            "sarah@mentor.com".to_string(),
            Role::Mentor,
        ),
        User::new(
            "u3".to_string(),
            "Admin User".to_string(),
            "admin@company.com".to_string(),
            Role::Admin,
        ),
    ]
}

fn sample_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "op1".to_string(),
            title: "Frontend Development Intern".to_string(),
            company: "TechCorp Solutions".to_string(),
            domain: "Web Development".to_string(),
            description: "Work on cutting-edge React applications and learn modern web \
                          development practices."
                .to_string(),
            duration_weeks: 12,
            stipend: Some(15000),
            status: OpportunityStatus::Open,
            created_by: "u3".to_string(),
            requirements: Some(vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Git".to_string(),
            ]),
            location: Some("Remote".to_string()),
        },
        Opportunity {
            id: "op2".to_string(),
            title: "Data Analytics Intern".to_string(),
            company: "DataViz Inc".to_string(),
            domain: "Data Science".to_string(),
            description: "Help build interactive dashboards and perform data analysis on \
                          real-world datasets."
                .to_string(),
            duration_weeks: 10,
            stipend: Some(12000),
            status: OpportunityStatus::Open,
            created_by: "u3".to_string(),
            requirements: Some(vec![
                "Python".to_string(),
                "SQL".to_string(),
                "Data Visualization".to_string(),
            ]),
            location: Some("Hybrid".to_string()),
        },
        Opportunity {
            id: "op3".to_string(),
            title: "Mobile App Development Intern".to_string(),
            company: "AppWorks Studio".to_string(),
            domain: "Mobile Development".to_string(),
            description: "Build cross-platform mobile applications using React Native."
                .to_string(),
            duration_weeks: 16,
            stipend: Some(18000),
            status: OpportunityStatus::Open,
            created_by: "u2".to_string(),
            requirements: Some(vec![
                "React Native".to_string(),
                "JavaScript".to_string(),
                "Mobile UI/UX".to_string(),
            ]),
            location: Some("Remote".to_string()),
        },
        Opportunity {
            id: "op4".to_string(),
            title: "Backend Engineering Intern".to_string(),
            company: "CloudSystems Ltd".to_string(),
            domain: "Backend Development".to_string(),
            description: "Work with Node.js and cloud infrastructure to build scalable APIs."
                .to_string(),
            duration_weeks: 12,
            stipend: None,
            status: OpportunityStatus::Open,
            created_by: "u3".to_string(),
            requirements: Some(vec![
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "REST APIs".to_string(),
            ]),
            location: Some("Remote".to_string()),
        },
    ]
}

fn sample_internships() -> Vec<Internship> {
    vec![Internship {
        id: "i1".to_string(),
        opportunity_id: "op1".to_string(),
        mentor_id: "u2".to_string(),
        student_id: "u1".to_string(),
        start_date: "2025-01-15".to_string(),
        end_date: None,
        status: InternshipStatus::Active,
    }]
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            internship_id: "i1".to_string(),
            title: "Set up development environment".to_string(),
            description: Some(
                "Install Node.js, npm, and clone the project repository".to_string(),
            ),
            due_date: None,
            status: TaskStatus::Done,
            created_at: "2025-01-15T10:00:00Z".to_string(),
            priority: Some(TaskPriority::High),
        },
        Task {
            id: "t2".to_string(),
            internship_id: "i1".to_string(),
            title: "Complete React fundamentals tutorial".to_string(),
            description: Some(
                "Go through the official React documentation and build sample components"
                    .to_string(),
            ),
            due_date: Some("2025-01-25".to_string()),
            status: TaskStatus::Done,
            created_at: "2025-01-16T10:00:00Z".to_string(),
            priority: Some(TaskPriority::High),
        },
        Task {
            id: "t3".to_string(),
            internship_id: "i1".to_string(),
            title: "Build user authentication flow".to_string(),
            description: Some(
                "Implement login and registration components with form validation".to_string(),
            ),
            due_date: Some("2025-02-05".to_string()),
            status: TaskStatus::InProgress,
            created_at: "2025-01-20T10:00:00Z".to_string(),
            priority: Some(TaskPriority::High),
        },
        Task {
            id: "t4".to_string(),
            internship_id: "i1".to_string(),
            title: "Create dashboard layout".to_string(),
            description: Some(
                "Design and implement responsive dashboard with navigation".to_string(),
            ),
            due_date: Some("2025-02-15".to_string()),
            status: TaskStatus::Review,
            created_at: "2025-01-22T10:00:00Z".to_string(),
            priority: Some(TaskPriority::Medium),
        },
        Task {
            id: "t5".to_string(),
            internship_id: "i1".to_string(),
            title: "Integrate API endpoints".to_string(),
            description: Some(
                "Connect frontend components to backend API services".to_string(),
            ),
            due_date: Some("2025-02-28".to_string()),
            status: TaskStatus::Todo,
            created_at: "2025-01-25T10:00:00Z".to_string(),
            priority: Some(TaskPriority::Medium),
        },
        Task {
            id: "t6".to_string(),
            internship_id: "i1".to_string(),
            title: "Write unit tests".to_string(),
            description: Some("Add test coverage for critical components".to_string()),
            due_date: Some("2025-03-10".to_string()),
            status: TaskStatus::Todo,
            created_at: "2025-01-28T10:00:00Z".to_string(),
            priority: Some(TaskPriority::Low),
        },
    ]
}

fn sample_feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "f1".to_string(),
            internship_id: "i1".to_string(),
            author_id: "u2".to_string(),
            author_name: "Sarah Mentor".to_string(),
            message: "Great job on setting up the development environment! Your attention to \
                      detail is impressive."
                .to_string(),
            created_at: "2025-01-16T14:30:00Z".to_string(),
            rating: Some(5),
        },
        Feedback {
            id: "f2".to_string(),
            internship_id: "i1".to_string(),
            author_id: "u2".to_string(),
            author_name: "Sarah Mentor".to_string(),
            message: "The authentication flow looks good. Consider adding password strength \
                      validation for better security."
                .to_string(),
            created_at: "2025-02-03T11:15:00Z".to_string(),
            rating: Some(4),
        },
        Feedback {
            id: "f3".to_string(),
            internship_id: "i1".to_string(),
            author_id: "u2".to_string(),
            author_name: "Sarah Mentor".to_string(),
            message: "Dashboard layout is coming along nicely. Make sure to test on different \
                      screen sizes."
                .to_string(),
            created_at: "2025-02-14T16:45:00Z".to_string(),
            rating: Some(4),
        },
    ]
}

fn sample_reports() -> Vec<ProgressReport> {
    vec![
        ProgressReport {
            id: "r1".to_string(),
            internship_id: "i1".to_string(),
            student_id: "u1".to_string(),
            period: ReportPeriod::Weekly,
            week_number: 1,
            summary: "Successfully completed onboarding and environment setup".to_string(),
            achievements: vec![
                "Set up development environment".to_string(),
                "Completed React fundamentals tutorial".to_string(),
                "Met with team members".to_string(),
            ],
            challenges: None,
            links: None,
            created_at: "2025-01-22T10:00:00Z".to_string(),
        },
        ProgressReport {
            id: "r2".to_string(),
            internship_id: "i1".to_string(),
            student_id: "u1".to_string(),
            period: ReportPeriod::Weekly,
            week_number: 2,
            summary: "Started working on authentication module".to_string(),
            achievements: vec![
                "Implemented login form".to_string(),
                "Added form validation".to_string(),
                "Learned about React hooks".to_string(),
            ],
            challenges: Some(vec!["Understanding advanced TypeScript types".to_string()]),
            links: None,
            created_at: "2025-01-29T10:00:00Z".to_string(),
        },
    ]
}

fn sample_evaluations() -> Vec<Evaluation> {
    vec![Evaluation {
        id: "e1".to_string(),
        internship_id: "i1".to_string(),
        student_id: "u1".to_string(),
        mentor_id: "u2".to_string(),
        criteria: vec![
            EvaluationCriteria {
                name: "Technical Skills".to_string(),
                score: 85,
                max_score: 100,
                weight: None,
            },
            EvaluationCriteria {
                name: "Communication".to_string(),
                score: 90,
                max_score: 100,
                weight: None,
            },
            EvaluationCriteria {
                name: "Problem Solving".to_string(),
                score: 80,
                max_score: 100,
                weight: None,
            },
            EvaluationCriteria {
                name: "Code Quality".to_string(),
                score: 85,
                max_score: 100,
                weight: None,
            },
            EvaluationCriteria {
                name: "Time Management".to_string(),
                score: 88,
                max_score: 100,
                weight: None,
            },
        ],
        total_score: 428,
        max_score: 500,
        comments: Some(
            "Excellent progress so far. Shows strong learning ability and dedication."
                .to_string(),
        ),
        created_at: "2025-02-15T10:00:00Z".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_carries_one_account_per_role() {
        let store = DataStore::sample();
        assert_eq!(store.users.len(), 3);
        assert!(store.user_by_role(Role::Student).is_some());
        assert!(store.user_by_role(Role::Mentor).is_some());
        assert!(store.user_by_role(Role::Admin).is_some());
    }

    #[test]
    fn sample_references_all_resolve() {
        let store = DataStore::sample();

        for internship in &store.internships {
            assert!(store.opportunity(&internship.opportunity_id).is_some());
            assert!(store.user(&internship.mentor_id).is_some());
            assert!(store.user(&internship.student_id).is_some());
        }
        for task in &store.tasks {
            assert!(store.internship(&task.internship_id).is_some());
        }
        for opportunity in &store.opportunities {
            assert!(store.user(&opportunity.created_by).is_some());
        }
    }

    #[test]
    fn per_internship_slices_filter_by_id() {
        let store = DataStore::sample();
        assert_eq!(store.tasks_for("i1").len(), 6);
        assert_eq!(store.feedback_for("i1").len(), 3);
        assert_eq!(store.reports_for("i1").len(), 2);
        assert_eq!(store.evaluations_for("i1").len(), 1);

        assert!(store.tasks_for("i99").is_empty());
    }

    #[test]
    fn unknown_ids_return_none() {
        let store = DataStore::sample();
        assert!(store.user("u99").is_none());
        assert!(store.opportunity("op99").is_none());
        assert!(store.internship("i99").is_none());
    }

    #[test]
    fn one_active_placement_in_sample() {
        let store = DataStore::sample();
        assert_eq!(store.active_internships(), 1);
    }
}
