//! Integration tests for catalog filtering and progress aggregation
//! against the bundled sample dataset

use internhub::catalog;
use internhub::models::{Opportunity, OpportunityStatus};
use internhub::progress::{self, TaskStats};
use internhub::store::DataStore;

fn opportunity(id: &str, title: &str, company: &str, domain: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        domain: domain.to_string(),
        description: String::new(),
        duration_weeks: 12,
        stipend: None,
        status: OpportunityStatus::Open,
        created_by: "u3".to_string(),
        requirements: None,
        location: None,
    }
}

#[test]
fn test_empty_query_returns_exactly_the_open_set() {
    let mut opps = DataStore::sample().opportunities;
    opps.push(Opportunity {
        status: OpportunityStatus::Closed,
        ..opportunity("op9", "Closed Role", "Gone Inc", "Web Development")
    });

    let result = catalog::filter(&opps, "", None);
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|o| o.is_open()));
}

#[test]
fn test_query_matches_any_of_title_company_domain() {
    let opps = vec![
        opportunity("a", "Rust Intern", "Acme", "Systems"),
        opportunity("b", "QA Intern", "Rustling Labs", "Testing"),
        opportunity("c", "Data Intern", "Acme", "Trust & Safety"),
        opportunity("d", "Design Intern", "Pixel Co", "Design"),
    ];

    let hits = catalog::filter(&opps, "rust", None);
    let ids: Vec<&str> = hits.iter().map(|o| o.id.as_str()).collect();
    // Title hit, company hit, and domain hit; the design role stays out
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_domain_filter_selects_exact_matches_only() {
    let opps = DataStore::sample().opportunities;

    let result = catalog::filter(&opps, "", Some("Backend Development"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Backend Engineering Intern");
}

#[test]
fn test_search_and_domain_filters_intersect() {
    let opps = DataStore::sample().opportunities;

    // Query matches several listings; the domain chip narrows to one
    let result = catalog::filter(&opps, "intern", Some("Data Science"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "op2");

    // Disjoint query and domain yield nothing
    assert!(catalog::filter(&opps, "mobile", Some("Data Science")).is_empty());
}

#[test]
fn test_domain_extraction_is_order_stable_and_idempotent() {
    let opps = vec![
        opportunity("a", "A", "A Co", "Web Development"),
        opportunity("b", "B", "B Co", "Data Science"),
        opportunity("c", "C", "C Co", "Web Development"),
        opportunity("d", "D", "D Co", "Design"),
    ];

    let first = catalog::domains(&opps);
    assert_eq!(first, vec!["Web Development", "Data Science", "Design"]);

    let second = catalog::domains(&opps);
    assert_eq!(first, second);
}

#[test]
fn test_sample_dashboard_aggregates() {
    let store = DataStore::sample();

    let stats = TaskStats::from_tasks(&store.tasks);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.done, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completion_pct, 33);

    let latest = progress::latest_evaluation(&store.evaluations).expect("sample evaluation");
    assert_eq!(latest.total_score, 428);
    assert_eq!(latest.max_score, 500);
    assert_eq!(progress::evaluation_percentage(latest), 86);
}

#[test]
fn test_zero_task_internship_reports_zero_percent() {
    let store = DataStore::sample();

    let stats = progress::for_internship(&store, "i-does-not-exist");
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_pct, 0);
}

#[test]
fn test_per_internship_progress_matches_store_slices() {
    let store = DataStore::sample();

    let stats = progress::for_internship(&store, "i1");
    assert_eq!(stats.total, store.tasks_for("i1").len());
    assert_eq!(stats.done, 2);
    assert_eq!(stats.completion_pct, 33);
}
