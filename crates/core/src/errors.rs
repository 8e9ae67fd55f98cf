use thiserror::Error;

/// Unified error type for the entire kiwoomy-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Lookup misses are deliberately NOT errors: point lookups return
/// `Option`, and a failed authentication is `None` regardless of whether
/// the user was missing or the password was wrong.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Store / Snapshot ────────────────────────────────────────────
    #[error("Store unavailable: {0}")]
    Store(String),

    #[error("Invalid snapshot format: {0}")]
    InvalidSnapshot(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u16),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed — wrong password or corrupted snapshot")]
    Decryption,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Credentials ─────────────────────────────────────────────────
    #[error("Credential hashing failed: {0}")]
    Credential(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<aes_gcm::Error> for CoreError {
    fn from(_: aes_gcm::Error) -> Self {
        CoreError::Decryption
    }
}

impl From<argon2::password_hash::Error> for CoreError {
    fn from(e: argon2::password_hash::Error) -> Self {
        CoreError::Credential(e.to_string())
    }
}
