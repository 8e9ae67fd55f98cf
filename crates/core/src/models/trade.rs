use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    /// 매수 — buying
    Buy,
    /// 매도 — selling
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "매수"),
            TradeSide::Sell => write!(f, "매도"),
        }
    }
}

/// One executed trade from the account's history.
///
/// Read-only reference data: trades are seeded once and queried, never
/// edited. Retrieval sorts most-recent-first; the stored order carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier (primary key)
    pub id: String,

    pub user_id: String,

    pub account_number: String,

    pub stock_name: String,

    pub stock_code: String,

    /// Execution time, minute granularity
    pub executed_at: NaiveDateTime,

    pub side: TradeSide,

    pub quantity: u32,

    /// Execution price per share, whole KRW
    pub price: i64,

    /// Free-text rationale recorded with the order
    pub description: String,
}

impl Trade {
    /// Execution time formatted the way the ledger displays it,
    /// e.g. `"2022-01-08 09:56"`.
    #[must_use]
    pub fn executed_at_display(&self) -> String {
        self.executed_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
