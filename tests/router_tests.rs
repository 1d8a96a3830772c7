//! Integration tests for role-gated routing against persisted sessions

use internhub::models::Role;
use internhub::router::{resolve, Page, Resolution};
use internhub::session::SessionStore;
use internhub::store::DataStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Log the sample account with the given role into a fresh session file
fn session_with_role(dir: &TempDir, role: Role) -> SessionStore {
    let data = DataStore::sample();
    let user = data.user_by_role(role).expect("sample account").clone();

    let path: PathBuf = dir.path().join("session.json");
    let mut session = SessionStore::load(path);
    session.login(user).expect("login");
    session
}

#[test]
fn test_anonymous_dashboard_redirects_to_login() {
    let dir = TempDir::new().expect("temp dir");
    let session = SessionStore::load(dir.path().join("session.json"));

    assert_eq!(
        resolve("/dashboard", session.current_user()),
        Resolution::Redirect("/login")
    );
}

#[test]
fn test_student_reaches_dashboard_but_not_admin() {
    let dir = TempDir::new().expect("temp dir");
    let session = session_with_role(&dir, Role::Student);

    assert_eq!(
        resolve("/dashboard", session.current_user()),
        Resolution::Page(Page::Dashboard)
    );
    // Students bounce to the catalog, not the login page
    assert_eq!(
        resolve("/admin", session.current_user()),
        Resolution::Redirect("/")
    );
}

#[test]
fn test_mentor_reaches_the_admin_panel() {
    let dir = TempDir::new().expect("temp dir");
    let session = session_with_role(&dir, Role::Mentor);

    assert_eq!(
        resolve("/admin", session.current_user()),
        Resolution::Page(Page::Admin)
    );
}

#[test]
fn test_admin_reaches_the_admin_panel() {
    let dir = TempDir::new().expect("temp dir");
    let session = session_with_role(&dir, Role::Admin);

    assert_eq!(
        resolve("/admin", session.current_user()),
        Resolution::Page(Page::Admin)
    );
}

#[test]
fn test_gating_tracks_session_changes() {
    let dir = TempDir::new().expect("temp dir");
    let mut session = session_with_role(&dir, Role::Admin);

    assert_eq!(
        resolve("/admin", session.current_user()),
        Resolution::Page(Page::Admin)
    );

    // The write's effect is visible to the next resolution
    session.logout().expect("logout");
    assert_eq!(
        resolve("/admin", session.current_user()),
        Resolution::Redirect("/")
    );
    assert_eq!(
        resolve("/dashboard", session.current_user()),
        Resolution::Redirect("/login")
    );
}

#[test]
fn test_not_found_ignores_session_state() {
    let dir = TempDir::new().expect("temp dir");
    let session = session_with_role(&dir, Role::Admin);

    assert_eq!(
        resolve("/does-not-exist", session.current_user()),
        Resolution::Page(Page::NotFound)
    );
    assert_eq!(resolve("/does-not-exist", None), Resolution::Page(Page::NotFound));
}

#[test]
fn test_public_routes_need_no_session() {
    assert_eq!(resolve("/", None), Resolution::Page(Page::Catalog));
    assert_eq!(resolve("/login", None), Resolution::Page(Page::Login));
}
