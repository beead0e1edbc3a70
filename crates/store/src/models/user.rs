//! User model.

use ecomdemo_core::{Email, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// Absence of a `User` on the session means logged-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub avatar_url: Option<String>,
}
