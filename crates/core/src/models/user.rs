use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Carries no secret material: the stored credential lives in a separate
/// [`Credential`] record so that query paths never hand out password data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (primary key), e.g. `"user01"`
    pub id: String,

    /// Display name, e.g. `"이경희"`
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored credential: the salted Argon2id hash of a user's password,
/// in PHC string format.
///
/// Kept in its own table, keyed by `user_id`. Public store queries never
/// return this type — only the authentication gate reads it, through the
/// `CredentialStore` seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: String,

    /// PHC-format hash string (`$argon2id$v=19$...`)
    pub password_hash: String,
}
