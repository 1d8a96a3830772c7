//! Login view
//!
//! The role picker. Actual login happens through the `login` command,
//! which selects the fixture account carrying the chosen role; this page
//! only presents the choices.

use crate::core::models::Role;
use crate::core::views::{Render, ViewContext};
use std::fmt::Write;

/// Role-picker page
pub struct LoginView;

impl Render for LoginView {
    fn render(&self, _ctx: &ViewContext) -> String {
        let mut out = String::new();

        out.push_str("=== Welcome to InternHub ===\n");
        out.push_str("Select your role to access the platform\n\n");

        for role in [Role::Student, Role::Mentor, Role::Admin] {
            let _ = writeln!(out, "  {role:<8} {}", role.description());
        }

        out.push_str("\nRun `internhub login <role>` to continue.\n\n");
        out.push_str(
            "Demo Access: this is a demonstration system. Pick any role above to\n\
             explore the platform. In production, this would be connected to a real\n\
             authentication system.\n",
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DataStore;

    #[test]
    fn all_three_roles_are_offered() {
        let store = DataStore::sample();
        let ctx = ViewContext::new(&store, None);
        let out = LoginView.render(&ctx);

        assert!(out.contains("student"));
        assert!(out.contains("mentor"));
        assert!(out.contains("admin"));
        assert!(out.contains("Guide interns and provide feedback"));
    }
}
