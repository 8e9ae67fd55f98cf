use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::account::Account;
use crate::models::stock::UserStock;
use crate::models::trade::Trade;
use crate::models::user::{Credential, User};

/// The complete record set. This is what gets serialized, encrypted, and
/// written out as a snapshot.
///
/// Holdings are keyed by the composite `(user_id, stock_code)`, which makes
/// the per-user index scan a plain key-range read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    pub users: BTreeMap<String, User>,

    /// Stored password hashes, keyed by user id. Never returned by public
    /// store queries; only the authentication gate reads them.
    pub credentials: BTreeMap<String, Credential>,

    pub accounts: BTreeMap<String, Account>,

    pub stocks: BTreeMap<(String, String), UserStock>,

    pub trades: BTreeMap<String, Trade>,
}

/// Credential access seam for the authentication gate.
///
/// The gate depends on this trait rather than on `Database` directly, so
/// tests can substitute a fixed credential set and nothing else ever needs
/// to touch stored hashes.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn lookup_user(&self, user_id: &str) -> Option<User>;
    async fn credential_for(&self, user_id: &str) -> Option<Credential>;
}

/// The record store: users, credentials, accounts, holdings, and trade
/// history behind a single writer lock.
///
/// All operations are async and logically serialized per key — a reader
/// never observes a half-applied upsert, and two concurrent upserts to the
/// same key resolve to one of the two values, never a mixture.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing record set (e.g. one decoded from a snapshot).
    #[must_use]
    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Clone out the full record set, for snapshotting.
    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }

    // ── Point lookups ───────────────────────────────────────────────

    /// Look up a user by primary key.
    pub async fn get_user(&self, user_id: &str) -> Option<User> {
        self.tables.read().await.users.get(user_id).cloned()
    }

    /// Look up a user's account record.
    pub async fn get_account(&self, user_id: &str) -> Option<Account> {
        self.tables.read().await.accounts.get(user_id).cloned()
    }

    // ── Index scans ─────────────────────────────────────────────────

    /// All holdings of one user, via a key-range scan on the composite key.
    ///
    /// The returned order is storage order (by stock code); callers must
    /// not rely on it.
    pub async fn get_user_stocks(&self, user_id: &str) -> Vec<UserStock> {
        let tables = self.tables.read().await;
        tables
            .stocks
            .range((user_id.to_string(), String::new())..)
            .take_while(|((uid, _), _)| uid == user_id)
            .map(|(_, stock)| stock.clone())
            .collect()
    }

    /// One user's trade history, most recent first.
    ///
    /// The descending sort is part of the contract — callers render
    /// "recent trades" straight off the front of this list.
    pub async fn get_trade_history(&self, user_id: &str) -> Vec<Trade> {
        let tables = self.tables.read().await;
        let mut trades: Vec<Trade> = tables
            .trades
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trades.sort_by(|a, b| b.executed_at.cmp(&a.executed_at));
        trades
    }

    // ── Upserts ─────────────────────────────────────────────────────

    /// Insert or replace a user record.
    pub async fn put_user(&self, user: User) {
        let mut tables = self.tables.write().await;
        debug!(user_id = %user.id, "put user");
        tables.users.insert(user.id.clone(), user);
    }

    /// Insert or replace a stored credential.
    pub async fn put_credential(&self, credential: Credential) {
        let mut tables = self.tables.write().await;
        debug!(user_id = %credential.user_id, "put credential");
        tables
            .credentials
            .insert(credential.user_id.clone(), credential);
    }

    /// Insert or replace an account record.
    pub async fn put_account(&self, account: Account) {
        let mut tables = self.tables.write().await;
        debug!(user_id = %account.user_id, "put account");
        tables.accounts.insert(account.user_id.clone(), account);
    }

    /// Insert or replace a holding, keyed by `(user_id, stock_code)`.
    pub async fn put_user_stock(&self, stock: UserStock) {
        let mut tables = self.tables.write().await;
        debug!(user_id = %stock.user_id, stock_code = %stock.stock_code, "put holding");
        tables.stocks.insert(stock.key(), stock);
    }

    /// Insert or replace a trade record.
    pub async fn put_trade(&self, trade: Trade) {
        let mut tables = self.tables.write().await;
        debug!(trade_id = %trade.id, user_id = %trade.user_id, "put trade");
        tables.trades.insert(trade.id.clone(), trade);
    }

    // ── Counts ──────────────────────────────────────────────────────

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn account_count(&self) -> usize {
        self.tables.read().await.accounts.len()
    }

    pub async fn stock_count(&self) -> usize {
        self.tables.read().await.stocks.len()
    }

    pub async fn trade_count(&self) -> usize {
        self.tables.read().await.trades.len()
    }
}

#[async_trait]
impl CredentialStore for Database {
    async fn lookup_user(&self, user_id: &str) -> Option<User> {
        self.get_user(user_id).await
    }

    async fn credential_for(&self, user_id: &str) -> Option<Credential> {
        self.tables.read().await.credentials.get(user_id).cloned()
    }
}
