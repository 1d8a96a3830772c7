//! User model and role-based authorization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user acts under
///
/// The role is the sole authorization signal in this build; there is no
/// server-verified identity behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Applies for internships and tracks progress
    Student,
    /// Guides interns and provides feedback
    Mentor,
    /// Manages opportunities and evaluates interns
    Admin,
}

impl Role {
    /// Whether this role may open the admin panel
    ///
    /// Mentors share the panel with admins so they can track their interns.
    /// All routes consult this predicate instead of comparing role values
    /// inline.
    #[must_use]
    pub const fn can_access_admin(self) -> bool {
        matches!(self, Self::Admin | Self::Mentor)
    }

    /// Short blurb shown on the login role cards
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Student => "Apply for internships and track your progress",
            Self::Mentor => "Guide interns and provide feedback",
            Self::Admin => "Manage opportunities and evaluate interns",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Student => "student",
            Self::Mentor => "mentor",
            Self::Admin => "admin",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "mentor" => Ok(Self::Mentor),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Unknown role: '{s}'. Use: student, mentor, admin")),
        }
    }
}

/// A platform account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier (e.g., "u1")
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Acting role
    pub role: Role,
}

impl User {
    /// Create a new user
    ///
    /// # Arguments
    /// * `id` - User identifier
    /// * `name` - Display name
    /// * `email` - Contact email
    /// * `role` - Acting role
    #[must_use]
    pub const fn new(id: String, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }
}
