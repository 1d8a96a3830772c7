//! Session command handlers: login, logout, whoami
//!
//! Login mirrors the platform's role picker: it selects the demo account
//! carrying the chosen role, persists the session, and lands on the
//! dashboard.

use internhub::config::Config;
use internhub::models::Role;
use internhub::session::SessionStore;
use internhub::store::DataStore;
use internhub::views::{DashboardView, Render, ViewContext};
use internhub::{error, info, warn};

/// Run the login command.
///
/// # Arguments
/// * `role` - Role whose demo account should be logged in
/// * `config` - Configuration providing the session file path
pub fn login(role: Role, config: &Config) {
    let store = DataStore::sample();

    let Some(user) = store.user_by_role(role) else {
        error!("No account carries the '{role}' role");
        eprintln!("✗ No account carries the '{role}' role");
        return;
    };

    let mut session = SessionStore::load(config.session_file_path());
    if let Err(e) = session.login(user.clone()) {
        // The in-memory session stays valid for this run either way
        warn!("Session not persisted: {e}");
    }

    println!("✓ Logged in as {} ({role})", user.name);
    info!("Session started for {} ({role})", user.id);

    // The platform lands on the dashboard right after login
    let ctx = ViewContext::new(&store, session.current_user());
    print!("\n{}", DashboardView.render(&ctx));
}

/// Run the logout command.
pub fn logout(config: &Config) {
    let mut session = SessionStore::load(config.session_file_path());
    let was_logged_in = session.current_user().is_some();

    if let Err(e) = session.logout() {
        error!("Logout failed: {e}");
        eprintln!("{e}");
        return;
    }

    if was_logged_in {
        println!("✓ Logged out");
    } else {
        println!("✓ No active session");
    }
}

/// Run the whoami command.
pub fn whoami(config: &Config) {
    let session = SessionStore::load(config.session_file_path());

    match session.current_user() {
        Some(user) => {
            println!("{} <{}> — {}", user.name, user.email, user.role);
        }
        None => println!("Not logged in. Run `internhub login <role>` to start a session."),
    }
}
