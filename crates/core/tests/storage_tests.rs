// ═══════════════════════════════════════════════════════════════════
// Storage Tests — encryption, snapshot format, Database, seed data
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDateTime;
use kiwoomy_core::errors::CoreError;
use kiwoomy_core::models::account::Account;
use kiwoomy_core::models::stock::UserStock;
use kiwoomy_core::models::trade::{Trade, TradeSide};
use kiwoomy_core::models::user::{Credential, User};
use kiwoomy_core::storage::database::{CredentialStore, Database, Tables};
use kiwoomy_core::storage::encryption::{
    derive_key, generate_nonce, generate_salt, open, seal, KdfParams,
};
use kiwoomy_core::storage::seed::ensure_seed_data;
use kiwoomy_core::storage::snapshot::{self, CURRENT_VERSION, HEADER_SIZE, MAGIC};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn make_stock(user_id: &str, code: &str, name: &str) -> UserStock {
    UserStock {
        user_id: user_id.into(),
        stock_code: code.into(),
        stock_name: name.into(),
        quantity: 10,
        avg_price: 50_000,
        current_price: 55_000,
        total_value: 550_000,
        profit_loss: 50_000,
        profit_rate: "10.00%".into(),
    }
}

fn make_trade(id: &str, user_id: &str, executed_at: &str) -> Trade {
    Trade {
        id: id.into(),
        user_id: user_id.into(),
        account_number: "1111-1111".into(),
        stock_name: "한미약품".into(),
        stock_code: "128940".into(),
        executed_at: dt(executed_at),
        side: TradeSide::Buy,
        quantity: 1,
        price: 100_000,
        description: "테스트 매수".into(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// KdfParams
// ═══════════════════════════════════════════════════════════════════

mod kdf_params {
    use super::*;

    #[test]
    fn default_values() {
        let p = KdfParams::default();
        assert_eq!(p.memory_cost, 65_536);
        assert_eq!(p.time_cost, 3);
        assert_eq!(p.parallelism, 4);
    }

    #[test]
    fn copy_semantics() {
        let p = KdfParams::default();
        let p2 = p;
        let p3 = p;
        assert_eq!(p2, p3);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Key Derivation
// ═══════════════════════════════════════════════════════════════════

mod key_derivation {
    use super::*;

    fn light_params() -> KdfParams {
        KdfParams {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let salt = [42u8; 16];
        let key1 = derive_key("same-password", &salt, &light_params()).unwrap();
        let key2 = derive_key("same-password", &salt, &light_params()).unwrap();
        assert_eq!(key1, key2);
    }

    #[test]
    fn different_passwords_different_keys() {
        let salt = [7u8; 16];
        let key1 = derive_key("password-a", &salt, &light_params()).unwrap();
        let key2 = derive_key("password-b", &salt, &light_params()).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn different_salts_different_keys() {
        let key1 = derive_key("pw", &[1u8; 16], &light_params()).unwrap();
        let key2 = derive_key("pw", &[2u8; 16], &light_params()).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn unicode_password() {
        let result = derive_key("비밀번호🔑", &[5u8; 16], &light_params());
        assert!(result.is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Seal / Open
// ═══════════════════════════════════════════════════════════════════

mod seal_open {
    use super::*;

    #[test]
    fn round_trip() {
        let key = [42u8; 32];
        let nonce = [7u8; 12];
        let plaintext = b"record store bytes";

        let ciphertext = seal(plaintext, &key, &nonce).unwrap();
        let decrypted = open(&ciphertext, &key, &nonce).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn ciphertext_carries_auth_tag() {
        let ciphertext = seal(b"test", &[1u8; 32], &[2u8; 12]).unwrap();
        assert_eq!(ciphertext.len(), 4 + 16);
    }

    #[test]
    fn wrong_key_fails() {
        let ciphertext = seal(b"secret", &[10u8; 32], &[11u8; 12]).unwrap();
        assert!(open(&ciphertext, &[99u8; 32], &[11u8; 12]).is_err());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let mut ciphertext = seal(b"integrity", &[14u8; 32], &[15u8; 12]).unwrap();
        ciphertext[0] ^= 0xFF;
        let result = open(&ciphertext, &[14u8; 32], &[15u8; 12]);
        assert!(matches!(result, Err(CoreError::Decryption)));
    }

    #[test]
    fn empty_ciphertext_fails() {
        assert!(open(&[], &[1u8; 32], &[2u8; 12]).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Random Generation
// ═══════════════════════════════════════════════════════════════════

mod random_generation {
    use super::*;

    #[test]
    fn salt_is_16_bytes_and_unique() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_eq!(s1.len(), 16);
        assert_ne!(s1, s2);
    }

    #[test]
    fn nonce_is_12_bytes_and_unique() {
        let n1 = generate_nonce().unwrap();
        let n2 = generate_nonce().unwrap();
        assert_eq!(n1.len(), 12);
        assert_ne!(n1, n2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot format — encode / decode
// ═══════════════════════════════════════════════════════════════════

mod snapshot_format {
    use super::*;

    fn sample_tables() -> Tables {
        let mut tables = Tables::default();
        tables
            .users
            .insert("user99".into(), User::new("user99", "테스터"));
        tables.accounts.insert(
            "user99".into(),
            Account::new("user99", 123_456),
        );
        tables.stocks.insert(
            ("user99".into(), "11200".into()),
            make_stock("user99", "11200", "HMM"),
        );
        tables
            .trades
            .insert("t1".into(), make_trade("t1", "user99", "2024-03-02 10:30"));
        tables
    }

    #[test]
    fn round_trip() {
        let tables = sample_tables();
        let bytes = snapshot::encode(&tables, "snapshot-pw").unwrap();
        let loaded = snapshot::decode(&bytes, "snapshot-pw").unwrap();
        assert_eq!(loaded, tables);
    }

    #[test]
    fn round_trip_empty_tables() {
        let bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        let loaded = snapshot::decode(&bytes, "pw").unwrap();
        assert_eq!(loaded, Tables::default());
    }

    #[test]
    fn output_starts_with_magic() {
        let bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        assert_eq!(&bytes[0..4], MAGIC);
    }

    #[test]
    fn output_has_current_version() {
        let bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn encode_twice_differs() {
        // Fresh salt and nonce per save
        let b1 = snapshot::encode(&Tables::default(), "pw").unwrap();
        let b2 = snapshot::encode(&Tables::default(), "pw").unwrap();
        assert_ne!(b1, b2);
    }

    #[test]
    fn wrong_password_fails() {
        let bytes = snapshot::encode(&Tables::default(), "correct").unwrap();
        let result = snapshot::decode(&bytes, "wrong");
        assert!(matches!(result, Err(CoreError::Decryption)));
    }

    #[test]
    fn corrupted_ciphertext_fails() {
        let mut bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert!(snapshot::decode(&bytes, "pw").is_err());
    }

    #[test]
    fn too_small_fails() {
        let result = snapshot::decode(&vec![0u8; HEADER_SIZE - 1], "pw");
        match result {
            Err(CoreError::InvalidSnapshot(msg)) => assert!(msg.contains("too small"), "{msg}"),
            other => panic!("expected InvalidSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn wrong_magic_fails() {
        let mut bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        bytes[0..4].copy_from_slice(b"XYZW");
        match snapshot::decode(&bytes, "pw") {
            Err(CoreError::InvalidSnapshot(msg)) => assert!(msg.contains("magic"), "{msg}"),
            other => panic!("expected InvalidSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn future_version_rejected() {
        let mut bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        bytes[4..6].copy_from_slice(&(CURRENT_VERSION + 1).to_le_bytes());
        match snapshot::decode(&bytes, "pw") {
            Err(CoreError::UnsupportedVersion(v)) => assert_eq!(v, CURRENT_VERSION + 1),
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn version_zero_rejected() {
        let mut bytes = snapshot::encode(&Tables::default(), "pw").unwrap();
        bytes[4..6].copy_from_slice(&0u16.to_le_bytes());
        assert!(matches!(
            snapshot::decode(&bytes, "pw"),
            Err(CoreError::UnsupportedVersion(0))
        ));
    }

    #[test]
    fn header_size_constant() {
        // 4 (magic) + 2 (version) + 12 (kdf) + 16 (salt) + 12 (nonce) = 46
        assert_eq!(HEADER_SIZE, 46);
    }

    #[test]
    fn magic_is_kwmy() {
        assert_eq!(MAGIC, b"KWMY");
    }
}

// ═══════════════════════════════════════════════════════════════════
// KDF bounds validation — crafted malicious headers
// ═══════════════════════════════════════════════════════════════════

mod kdf_bounds_validation {
    use super::*;

    /// Build a minimal KWMY byte array with the given KDF params.
    fn craft_bytes(memory_cost: u32, time_cost: u32, parallelism: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"KWMY");
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&memory_cost.to_le_bytes());
        buf.extend_from_slice(&time_cost.to_le_bytes());
        buf.extend_from_slice(&parallelism.to_le_bytes());
        buf.extend_from_slice(&[0u8; 16]); // salt
        buf.extend_from_slice(&[0u8; 12]); // nonce
        buf
    }

    #[test]
    fn reject_memory_cost_zero() {
        match snapshot::read_header(&craft_bytes(0, 3, 4)) {
            Err(CoreError::InvalidSnapshot(msg)) => assert!(msg.contains("memory_cost"), "{msg}"),
            other => panic!("expected InvalidSnapshot for memory_cost 0, got {other:?}"),
        }
    }

    #[test]
    fn reject_memory_cost_too_high() {
        assert!(snapshot::read_header(&craft_bytes(2_000_000, 3, 4)).is_err());
    }

    #[test]
    fn reject_time_cost_zero() {
        match snapshot::read_header(&craft_bytes(65_536, 0, 4)) {
            Err(CoreError::InvalidSnapshot(msg)) => assert!(msg.contains("time_cost"), "{msg}"),
            other => panic!("expected InvalidSnapshot for time_cost 0, got {other:?}"),
        }
    }

    #[test]
    fn reject_time_cost_too_high() {
        assert!(snapshot::read_header(&craft_bytes(65_536, 21, 4)).is_err());
    }

    #[test]
    fn reject_parallelism_zero() {
        match snapshot::read_header(&craft_bytes(65_536, 3, 0)) {
            Err(CoreError::InvalidSnapshot(msg)) => assert!(msg.contains("parallelism"), "{msg}"),
            other => panic!("expected InvalidSnapshot for parallelism 0, got {other:?}"),
        }
    }

    #[test]
    fn reject_parallelism_too_high() {
        assert!(snapshot::read_header(&craft_bytes(65_536, 3, 17)).is_err());
    }

    #[test]
    fn accept_valid_boundaries() {
        assert!(snapshot::read_header(&craft_bytes(8, 1, 1)).is_ok());
        assert!(snapshot::read_header(&craft_bytes(1_048_576, 20, 16)).is_ok());
        assert!(snapshot::read_header(&craft_bytes(65_536, 3, 4)).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Database — point lookups, index scans, upserts
// ═══════════════════════════════════════════════════════════════════

mod database {
    use super::*;

    #[tokio::test]
    async fn put_and_get_user() {
        let db = Database::new();
        db.put_user(User::new("u1", "홍길동")).await;

        let user = db.get_user("u1").await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "홍길동");
    }

    #[tokio::test]
    async fn get_missing_user_is_none() {
        let db = Database::new();
        assert!(db.get_user("nobody").await.is_none());
    }

    #[tokio::test]
    async fn put_user_upsert_replaces() {
        let db = Database::new();
        db.put_user(User::new("u1", "이전이름")).await;
        db.put_user(User::new("u1", "새이름")).await;

        assert_eq!(db.user_count().await, 1);
        assert_eq!(db.get_user("u1").await.unwrap().name, "새이름");
    }

    #[tokio::test]
    async fn stock_scan_returns_only_that_user() {
        let db = Database::new();
        db.put_user_stock(make_stock("u1", "11200", "HMM")).await;
        db.put_user_stock(make_stock("u1", "128940", "한미약품")).await;
        db.put_user_stock(make_stock("u2", "11200", "HMM")).await;

        let stocks = db.get_user_stocks("u1").await;
        assert_eq!(stocks.len(), 2);
        assert!(stocks.iter().all(|s| s.user_id == "u1"));
    }

    #[tokio::test]
    async fn stock_scan_empty_for_unknown_user() {
        let db = Database::new();
        db.put_user_stock(make_stock("u1", "11200", "HMM")).await;
        assert!(db.get_user_stocks("u9").await.is_empty());
    }

    #[tokio::test]
    async fn stock_scan_does_not_bleed_across_prefix() {
        // "u1" must not pick up "u10" rows even though "u10" sorts after it
        let db = Database::new();
        db.put_user_stock(make_stock("u1", "11200", "HMM")).await;
        db.put_user_stock(make_stock("u10", "11200", "HMM")).await;

        let stocks = db.get_user_stocks("u1").await;
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].user_id, "u1");
    }

    #[tokio::test]
    async fn composite_key_upsert_replaces_holding() {
        let db = Database::new();
        db.put_user_stock(make_stock("u1", "11200", "HMM")).await;

        let mut updated = make_stock("u1", "11200", "HMM");
        updated.current_price = 60_000;
        updated.total_value = 600_000;
        db.put_user_stock(updated).await;

        let stocks = db.get_user_stocks("u1").await;
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].total_value, 600_000);
    }

    #[tokio::test]
    async fn trade_history_sorted_most_recent_first() {
        let db = Database::new();
        db.put_trade(make_trade("t1", "u1", "2022-01-08 09:56")).await;
        db.put_trade(make_trade("t2", "u1", "2022-11-11 15:07")).await;
        db.put_trade(make_trade("t3", "u1", "2022-06-25 10:11")).await;

        let trades = db.get_trade_history("u1").await;
        assert_eq!(trades.len(), 3);
        for pair in trades.windows(2) {
            assert!(pair[0].executed_at >= pair[1].executed_at);
        }
        assert_eq!(trades[0].id, "t2");
        assert_eq!(trades[2].id, "t1");
    }

    #[tokio::test]
    async fn trade_history_filters_by_user() {
        let db = Database::new();
        db.put_trade(make_trade("t1", "u1", "2022-01-08 09:56")).await;
        db.put_trade(make_trade("t2", "u2", "2022-01-09 09:56")).await;

        let trades = db.get_trade_history("u1").await;
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].id, "t1");
    }

    #[tokio::test]
    async fn account_put_and_get() {
        let db = Database::new();
        db.put_account(Account::new("u1", 2_016_927)).await;
        assert_eq!(db.get_account("u1").await.unwrap().deposit, 2_016_927);
        assert!(db.get_account("u2").await.is_none());
    }

    #[tokio::test]
    async fn snapshot_and_restore_preserve_records() {
        let db = Database::new();
        db.put_user(User::new("u1", "홍길동")).await;
        db.put_user_stock(make_stock("u1", "11200", "HMM")).await;
        db.put_trade(make_trade("t1", "u1", "2022-01-08 09:56")).await;

        let tables = db.snapshot().await;
        let restored = Database::from_tables(tables);

        assert_eq!(restored.user_count().await, 1);
        assert_eq!(restored.get_user_stocks("u1").await.len(), 1);
        assert_eq!(restored.get_trade_history("u1").await.len(), 1);
    }

    #[tokio::test]
    async fn credential_store_seam_returns_stored_hash() {
        let db = Database::new();
        db.put_user(User::new("u1", "홍길동")).await;
        db.put_credential(Credential {
            user_id: "u1".into(),
            password_hash: "$argon2id$fake".into(),
        })
        .await;

        let credential = db.credential_for("u1").await.unwrap();
        assert_eq!(credential.password_hash, "$argon2id$fake");
        assert!(db.credential_for("u2").await.is_none());

        let user = db.lookup_user("u1").await.unwrap();
        assert_eq!(user.name, "홍길동");
    }

    #[tokio::test]
    async fn concurrent_upserts_to_same_key_leave_one_row() {
        let db = std::sync::Arc::new(Database::new());

        let a = {
            let db = db.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    db.put_user_stock(make_stock("u1", "11200", "HMM")).await;
                }
            })
        };
        let b = {
            let db = db.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let mut s = make_stock("u1", "11200", "HMM");
                    s.current_price = 60_000;
                    s.total_value = 600_000;
                    db.put_user_stock(s).await;
                }
            })
        };
        a.await.unwrap();
        b.await.unwrap();

        let stocks = db.get_user_stocks("u1").await;
        assert_eq!(stocks.len(), 1);
        // One of the two written values, never a mixture
        assert!(
            stocks[0].total_value == 550_000 || stocks[0].total_value == 600_000,
            "unexpected value: {}",
            stocks[0].total_value
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Seed data
// ═══════════════════════════════════════════════════════════════════

mod seeding {
    use super::*;

    #[tokio::test]
    async fn first_run_seeds_all_tables() {
        let db = Database::new();
        assert!(ensure_seed_data(&db).await);

        assert_eq!(db.user_count().await, 6);
        assert_eq!(db.account_count().await, 6);
        assert_eq!(db.stock_count().await, 14);
        assert_eq!(db.trade_count().await, 5);
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let db = Database::new();
        assert!(ensure_seed_data(&db).await);
        assert!(!ensure_seed_data(&db).await);

        assert_eq!(db.user_count().await, 6);
        assert_eq!(db.stock_count().await, 14);
        assert_eq!(db.trade_count().await, 5);
    }

    #[tokio::test]
    async fn user01_is_kyunghee_lee() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        let user = db.get_user("user01").await.unwrap();
        assert_eq!(user.name, "이경희");
    }

    #[tokio::test]
    async fn seeded_holdings_per_user() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        assert_eq!(db.get_user_stocks("user01").await.len(), 3);
        assert_eq!(db.get_user_stocks("user02").await.len(), 2);
        assert_eq!(db.get_user_stocks("user03").await.len(), 1);
        assert_eq!(db.get_user_stocks("user04").await.len(), 3);
        assert_eq!(db.get_user_stocks("user05").await.len(), 1);
        assert_eq!(db.get_user_stocks("user06").await.len(), 4);
    }

    #[tokio::test]
    async fn seeded_user01_hanmi_position() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        let stocks = db.get_user_stocks("user01").await;
        let hanmi = stocks.iter().find(|s| s.stock_code == "128940").unwrap();
        assert_eq!(hanmi.stock_name, "한미약품");
        assert_eq!(hanmi.quantity, 27);
        assert_eq!(hanmi.avg_price, 116_924);
        assert_eq!(hanmi.current_price, 114_084);
        assert_eq!(hanmi.total_value, 3_080_268);
        assert_eq!(hanmi.profit_loss, -76_680);
        assert_eq!(hanmi.profit_rate, "-2.43%");
    }

    #[tokio::test]
    async fn seeded_total_value_consistency() {
        // total_value == quantity * current_price for every seeded holding
        let db = Database::new();
        ensure_seed_data(&db).await;

        for user_id in ["user01", "user02", "user03", "user04", "user05", "user06"] {
            for stock in db.get_user_stocks(user_id).await {
                assert_eq!(
                    stock.total_value,
                    i64::from(stock.quantity) * stock.current_price,
                    "inconsistent total for {} {}",
                    user_id,
                    stock.stock_code
                );
            }
        }
    }

    #[tokio::test]
    async fn seeded_deposits() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        assert_eq!(db.get_account("user01").await.unwrap().deposit, 2_016_927);
        assert_eq!(db.get_account("user06").await.unwrap().deposit, 1_371_179);
    }

    #[tokio::test]
    async fn seeded_trades_all_belong_to_user01() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        let trades = db.get_trade_history("user01").await;
        assert_eq!(trades.len(), 5);
        for pair in trades.windows(2) {
            assert!(pair[0].executed_at >= pair[1].executed_at);
        }
        // Most recent: the NAVER buy from 2022-11-11
        assert_eq!(trades[0].id, "5");
        assert_eq!(trades[0].stock_name, "NAVER");
        assert_eq!(trades[0].side, TradeSide::Buy);
        // The single sell is the 한미약품 rebalancing
        let sell = trades.iter().find(|t| t.side == TradeSide::Sell).unwrap();
        assert_eq!(sell.id, "4");
        assert_eq!(sell.quantity, 4);
        assert_eq!(sell.price, 116_060);
    }

    #[tokio::test]
    async fn seeded_credentials_are_hashed_not_plaintext() {
        let db = Database::new();
        ensure_seed_data(&db).await;

        let credential = db.credential_for("user01").await.unwrap();
        assert_ne!(credential.password_hash, "1234");
        assert!(credential.password_hash.starts_with("$argon2id$"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot file I/O (native only)
// ═══════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
mod file_io {
    use super::*;

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.kwmy");
        let path_str = path.to_str().unwrap();

        let mut tables = Tables::default();
        tables
            .users
            .insert("u1".into(), User::new("u1", "홍길동"));

        snapshot::save_to_file(&tables, path_str, "file-pw").unwrap();
        let loaded = snapshot::load_from_file(path_str, "file-pw").unwrap();
        assert_eq!(loaded, tables);
    }

    #[test]
    fn load_nonexistent_file_fails() {
        let result = snapshot::load_from_file("/tmp/nonexistent_kwmy_snapshot.kwmy", "pw");
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }

    #[test]
    fn file_wrong_password_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong_pw.kwmy");
        let path_str = path.to_str().unwrap();

        snapshot::save_to_file(&Tables::default(), path_str, "correct").unwrap();
        assert!(snapshot::load_from_file(path_str, "incorrect").is_err());
    }

    #[test]
    fn file_starts_with_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magic.kwmy");
        let path_str = path.to_str().unwrap();

        snapshot::save_to_file(&Tables::default(), path_str, "pw").unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"KWMY");
    }
}
