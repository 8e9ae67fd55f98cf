use serde::{Deserialize, Serialize};

/// One holding: a user's position in a single security.
///
/// Composite key `(user_id, stock_code)` — a user holds each security at
/// most once. Monetary fields are whole KRW. `total_value` is expected to
/// equal `quantity * current_price`; the store does not enforce this at
/// write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStock {
    pub user_id: String,

    /// Exchange code, e.g. `"128940"`
    pub stock_code: String,

    /// Display name, e.g. `"한미약품"`
    pub stock_name: String,

    /// Shares held
    pub quantity: u32,

    /// Average purchase price per share
    pub avg_price: i64,

    /// Latest market price per share
    pub current_price: i64,

    /// Market value of the position (`quantity * current_price`)
    pub total_value: i64,

    /// Unrealized profit/loss, signed
    pub profit_loss: i64,

    /// Formatted signed percentage, e.g. `"-2.43%"` or `"8.08%"`.
    /// Kept as the display string the rest of the app renders verbatim.
    pub profit_rate: String,
}

impl UserStock {
    /// Composite key for store operations.
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.user_id.clone(), self.stock_code.clone())
    }

    /// Numeric value of `profit_rate`, e.g. `-2.43` for `"-2.43%"`.
    /// An unparseable rate reads as `0.0`.
    #[must_use]
    pub fn profit_rate_value(&self) -> f64 {
        self.profit_rate
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0)
    }
}
