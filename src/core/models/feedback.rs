//! Feedback model

use serde::{Deserialize, Serialize};

/// A mentor note left on an internship
///
/// The author name is denormalized so feedback still renders when the
/// author id no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Feedback identifier (e.g., "f1")
    pub id: String,

    /// Internship the note belongs to
    pub internship_id: String,

    /// Author's user id
    pub author_id: String,

    /// Author's display name at the time of writing
    pub author_name: String,

    /// Note body
    pub message: String,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Rating on a 1-5 scale, if given (not enforced in this build)
    pub rating: Option<u8>,
}
