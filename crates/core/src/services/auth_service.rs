use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::user::User;
use crate::storage::database::CredentialStore;

/// Hash a password into a salted Argon2id PHC string for storage.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a claimed password against a stored PHC hash string.
/// A malformed stored hash verifies as `false`, not as an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            warn!(error = %e, "stored credential hash is malformed");
            false
        }
    }
}

/// The authentication gate: validates a claimed identity + password against
/// the stored credential.
///
/// Depends on the [`CredentialStore`] seam rather than the concrete store,
/// so callers holding only credential data (or tests with a fixed set) can
/// drive it directly.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Validate credentials and return the matching user.
    ///
    /// Every failure mode — unknown user, missing or malformed credential,
    /// wrong password — collapses to `None`. Callers cannot tell them apart,
    /// which keeps the login surface from leaking which user ids exist.
    pub async fn authenticate<S: CredentialStore + ?Sized>(
        &self,
        store: &S,
        user_id: &str,
        password: &str,
    ) -> Option<User> {
        debug!(user_id, "authentication attempt");

        let user = store.lookup_user(user_id).await;
        let credential = store.credential_for(user_id).await;

        match (user, credential) {
            (Some(user), Some(credential))
                if verify_password(password, &credential.password_hash) =>
            {
                debug!(user_id, "authentication succeeded");
                Some(user)
            }
            _ => {
                debug!(user_id, "authentication failed");
                None
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
