use serde::{Deserialize, Serialize};

/// Account-level cash balance for one user.
///
/// Exactly one per user. Holdings reference this record instead of
/// duplicating the deposit onto every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: String,

    /// Uninvested cash (예수금), in whole KRW
    pub deposit: i64,
}

impl Account {
    pub fn new(user_id: impl Into<String>, deposit: i64) -> Self {
        Self {
            user_id: user_id.into(),
            deposit,
        }
    }
}
