use crate::errors::CoreError;
use crate::storage::database::Tables;

use super::encryption::{self, KdfParams};

/// Magic bytes identifying a Kiwoomy snapshot file.
pub const MAGIC: &[u8; 4] = b"KWMY";

/// Current snapshot format version.
pub const CURRENT_VERSION: u16 = 1;

/// Fixed header size in bytes:
/// magic(4) + version(2) + kdf_params(12) + salt(16) + nonce(12) = 46.
/// Everything after the header is ciphertext.
pub const HEADER_SIZE: usize = 46;

/// Parsed header of a snapshot file.
#[derive(Debug)]
pub struct SnapshotHeader {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
}

/// Serialize and encrypt the full table set to portable snapshot bytes.
///
/// Flow: Tables → bincode → AES-256-GCM(Argon2id(password)) → KWMY bytes.
pub fn encode(tables: &Tables, password: &str) -> Result<Vec<u8>, CoreError> {
    let plaintext = bincode::serialize(tables)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize tables: {e}")))?;

    let salt = encryption::generate_salt()?;
    let nonce = encryption::generate_nonce()?;
    let kdf_params = KdfParams::default();
    let key = encryption::derive_key(password, &salt, &kdf_params)?;
    let ciphertext = encryption::seal(&plaintext, &key, &nonce)?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&CURRENT_VERSION.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(&salt);
    buf.extend_from_slice(&nonce);
    buf.extend_from_slice(&ciphertext);

    Ok(buf)
}

/// Decrypt and deserialize a snapshot produced by [`encode`].
pub fn decode(data: &[u8], password: &str) -> Result<Tables, CoreError> {
    let (header, ciphertext) = read_header(data)?;

    let key = encryption::derive_key(password, &header.salt, &header.kdf_params)?;
    let plaintext = encryption::open(ciphertext, &key, &header.nonce)?;

    bincode::deserialize(&plaintext)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize tables: {e}")))
}

/// Parse the fixed header and return it with the trailing ciphertext.
///
/// KDF parameters are bounds-checked so a crafted header cannot force the
/// loader into gigabytes of Argon2 memory.
pub fn read_header(data: &[u8]) -> Result<(SnapshotHeader, &[u8]), CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidSnapshot(
            "File too small to be a valid KWMY snapshot".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidSnapshot(
            "Invalid magic bytes — not a KWMY snapshot".into(),
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let read_u32 = |offset: usize, field: &str| -> Result<u32, CoreError> {
        data[offset..offset + 4]
            .try_into()
            .map(u32::from_le_bytes)
            .map_err(|_| CoreError::InvalidSnapshot(format!("Failed to read KDF {field}")))
    };
    let memory_cost = read_u32(6, "memory_cost")?;
    let time_cost = read_u32(10, "time_cost")?;
    let parallelism = read_u32(14, "parallelism")?;

    // memory_cost: 8 KiB (Argon2 minimum) .. 1 GiB; time_cost: 1..20;
    // parallelism: 1..16.
    if !(8..=1_048_576).contains(&memory_cost) {
        return Err(CoreError::InvalidSnapshot(format!(
            "KDF memory_cost out of safe range: {memory_cost} KiB (expected 8..1048576)"
        )));
    }
    if !(1..=20).contains(&time_cost) {
        return Err(CoreError::InvalidSnapshot(format!(
            "KDF time_cost out of safe range: {time_cost} (expected 1..20)"
        )));
    }
    if !(1..=16).contains(&parallelism) {
        return Err(CoreError::InvalidSnapshot(format!(
            "KDF parallelism out of safe range: {parallelism} (expected 1..16)"
        )));
    }

    let mut salt = [0u8; 16];
    salt.copy_from_slice(&data[18..34]);

    let mut nonce = [0u8; 12];
    nonce.copy_from_slice(&data[34..46]);

    let header = SnapshotHeader {
        version,
        kdf_params: KdfParams {
            memory_cost,
            time_cost,
            parallelism,
        },
        salt,
        nonce,
    };

    Ok((header, &data[HEADER_SIZE..]))
}

/// Write an encrypted snapshot to disk (native only, not WASM).
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to_file(tables: &Tables, path: &str, password: &str) -> Result<(), CoreError> {
    let bytes = encode(tables, password)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Load an encrypted snapshot from disk (native only, not WASM).
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_file(path: &str, password: &str) -> Result<Tables, CoreError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes, password)
}
