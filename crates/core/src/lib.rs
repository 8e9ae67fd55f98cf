pub mod chat;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use tracing::info;

use errors::CoreError;
use models::{
    account::Account,
    context::UserContext,
    stock::UserStock,
    trade::Trade,
    user::{Credential, User},
};
use services::{
    auth_service::{self, AuthService},
    context_service::ContextService,
    portfolio_service::PortfolioService,
};
use storage::{database::Database, seed, snapshot};

/// Main entry point for the Kiwoomy core library.
///
/// Owns the record store and at most one active user session. The session
/// (a [`UserContext`]) is created by `login`, replaced by a later `login`,
/// and destroyed by `logout` — there is no shared global state, so two
/// `Kiwoomy` values are fully independent.
#[must_use]
pub struct Kiwoomy {
    db: Database,
    auth_service: AuthService,
    portfolio_service: PortfolioService,
    context_service: ContextService,
    session: Option<UserContext>,
    /// Tracks whether any record mutation has occurred since the last
    /// save/load.
    dirty: bool,
}

impl std::fmt::Debug for Kiwoomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kiwoomy")
            .field(
                "session",
                &self.session.as_ref().map(|c| c.user.id.as_str()),
            )
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Kiwoomy {
    /// Create a fresh in-memory store, seeded with the reference dataset.
    pub async fn initialize() -> Self {
        let db = Database::new();
        seed::ensure_seed_data(&db).await;
        info!("store initialized");
        Self::build(db)
    }

    /// Load a store from encrypted snapshot bytes (password required).
    /// Use this for WASM / Tauri where the frontend handles file I/O.
    ///
    /// Runs the idempotent seed check afterwards, so a snapshot from before
    /// the reference dataset existed still comes up complete.
    pub async fn load_from_bytes(encrypted: &[u8], password: &str) -> Result<Self, CoreError> {
        let tables = snapshot::decode(encrypted, password)?;
        let db = Database::from_tables(tables);
        seed::ensure_seed_data(&db).await;
        Ok(Self::build(db))
    }

    /// Save the current store to encrypted snapshot bytes.
    /// Clears the unsaved-changes flag on success.
    pub async fn save_to_bytes(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        let tables = self.db.snapshot().await;
        let bytes = snapshot::encode(&tables, password)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from an encrypted snapshot file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load_from_file(path: &str, password: &str) -> Result<Self, CoreError> {
        let tables = snapshot::load_from_file(path, password)?;
        let db = Database::from_tables(tables);
        seed::ensure_seed_data(&db).await;
        Ok(Self::build(db))
    }

    /// Save to an encrypted snapshot file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn save_to_file(&mut self, path: &str, password: &str) -> Result<(), CoreError> {
        let tables = self.db.snapshot().await;
        snapshot::save_to_file(&tables, path, password)?;
        self.dirty = false;
        Ok(())
    }

    // ── Session Lifecycle ───────────────────────────────────────────

    /// Authenticate and open a session for the user.
    ///
    /// On success the freshly built context becomes the active session and
    /// is returned. On any failure nothing is published: the previous
    /// session state is left exactly as it was, and the two failure causes
    /// (unknown user, wrong password) are indistinguishable.
    pub async fn login(&mut self, user_id: &str, password: &str) -> Option<&UserContext> {
        let user = self
            .auth_service
            .authenticate(&self.db, user_id, password)
            .await?;

        let context = self.context_service.build_context(&self.db, user).await;
        info!(user_id, "session opened");
        self.session = Some(context);
        self.session.as_ref()
    }

    /// Close the active session, dropping its context entirely.
    /// After this returns, `current_context()` is `None` — nothing of the
    /// previous user's data remains observable.
    pub fn logout(&mut self) {
        if let Some(context) = self.session.take() {
            info!(user_id = %context.user.id, "session cleared");
        }
    }

    /// The active session's context, if a user is logged in.
    #[must_use]
    pub fn current_context(&self) -> Option<&UserContext> {
        self.session.as_ref()
    }

    /// Re-fetch the active user's holdings and account, recompute the
    /// summary, and re-render the prompt. Trade history and the investor
    /// profile are left as built at login. No-op without a session.
    pub async fn refresh_holdings(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let stocks = self.db.get_user_stocks(&session.user.id).await;
        let deposit = self
            .db
            .get_account(&session.user.id)
            .await
            .map(|a| a.deposit)
            .unwrap_or(0);

        session.stocks = stocks;
        session.summary = self
            .portfolio_service
            .summarize(&session.stocks, deposit);
        session.context_prompt = self.context_service.render_prompt(
            &session.user,
            &session.stocks,
            &session.trades,
            &session.summary,
            &session.profile,
        );
        info!(user_id = %session.user.id, "session holdings refreshed");
    }

    // ── Record Queries ──────────────────────────────────────────────

    /// Point lookup by user id. Never exposes credential material.
    pub async fn get_user(&self, user_id: &str) -> Option<User> {
        self.db.get_user(user_id).await
    }

    /// A user's account-level cash balance record.
    pub async fn get_account(&self, user_id: &str) -> Option<Account> {
        self.db.get_account(user_id).await
    }

    /// All holdings of one user. Order is storage order — don't rely on it.
    pub async fn get_user_stocks(&self, user_id: &str) -> Vec<UserStock> {
        self.db.get_user_stocks(user_id).await
    }

    /// One user's trade history, most recent first.
    pub async fn get_trade_history(&self, user_id: &str) -> Vec<Trade> {
        self.db.get_trade_history(user_id).await
    }

    // ── Record Upserts ──────────────────────────────────────────────

    /// Create or replace a user together with their hashed credential.
    pub async fn register_user(&mut self, user: User, password: &str) -> Result<(), CoreError> {
        let password_hash = auth_service::hash_password(password)?;
        let user_id = user.id.clone();
        self.db.put_user(user).await;
        self.db
            .put_credential(Credential {
                user_id,
                password_hash,
            })
            .await;
        self.dirty = true;
        Ok(())
    }

    /// Insert or replace an account record.
    pub async fn put_account(&mut self, account: Account) {
        self.db.put_account(account).await;
        self.dirty = true;
    }

    /// Insert or replace a holding (keyed by user id + stock code).
    pub async fn put_user_stock(&mut self, stock: UserStock) {
        self.db.put_user_stock(stock).await;
        self.dirty = true;
    }

    /// Insert or replace a trade record.
    pub async fn put_trade_history(&mut self, trade: Trade) {
        self.db.put_trade(trade).await;
        self.dirty = true;
    }

    // ── Inspection ──────────────────────────────────────────────────

    pub async fn user_count(&self) -> usize {
        self.db.user_count().await
    }

    pub async fn account_count(&self) -> usize {
        self.db.account_count().await
    }

    pub async fn stock_count(&self) -> usize {
        self.db.stock_count().await
    }

    pub async fn trade_count(&self) -> usize {
        self.db.trade_count().await
    }

    /// Returns `true` if any record has been modified since the last save
    /// or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(db: Database) -> Self {
        Self {
            db,
            auth_service: AuthService::new(),
            portfolio_service: PortfolioService::new(),
            context_service: ContextService::new(),
            session: None,
            dirty: false,
        }
    }
}
