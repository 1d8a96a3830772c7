//! Role-gated route resolution
//!
//! Maps a requested path and the current session to exactly one outcome.
//! The function is pure and stateless; it is re-evaluated on every
//! navigation and holds nothing beyond what the session provides.

use crate::core::models::User;
use std::fmt;

/// A renderable page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Public opportunity catalog (`/`)
    Catalog,
    /// Role picker (`/login`)
    Login,
    /// Personal dashboard (`/dashboard`, requires a session)
    Dashboard,
    /// Admin panel (`/admin`, requires an admin or mentor session)
    Admin,
    /// Terminal 404 page (any unrecognized path)
    NotFound,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Catalog => "catalog",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Admin => "admin",
            Self::NotFound => "not found",
        };
        write!(f, "{as_str}")
    }
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render this page
    Page(Page),
    /// Navigate again to this path
    Redirect(&'static str),
}

/// Resolve a path against the current session
///
/// Unauthenticated requests for `/dashboard` redirect to `/login`.
/// Unauthorized requests for `/admin` redirect to `/`, not `/login`:
/// a logged-in student gains nothing from the login page. Unrecognized
/// paths resolve to the 404 page no matter the session.
#[must_use]
pub fn resolve(path: &str, user: Option<&User>) -> Resolution {
    match path {
        "/" => Resolution::Page(Page::Catalog),
        "/login" => Resolution::Page(Page::Login),
        "/dashboard" => {
            if user.is_some() {
                Resolution::Page(Page::Dashboard)
            } else {
                Resolution::Redirect("/login")
            }
        }
        "/admin" => {
            if user.is_some_and(|u| u.role.can_access_admin()) {
                Resolution::Page(Page::Admin)
            } else {
                Resolution::Redirect("/")
            }
        }
        _ => Resolution::Page(Page::NotFound),
    }
}
