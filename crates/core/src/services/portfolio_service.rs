use crate::models::analytics::PortfolioSummary;
use crate::models::stock::UserStock;

/// Computes portfolio summary statistics from a holding set.
///
/// Pure business logic — no I/O, no store access. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a user's holdings plus their account deposit.
    ///
    /// The profit rate is return over cost basis:
    /// `total_profit_loss / (total_value - total_profit_loss) * 100`,
    /// formatted to two decimals. The denominator is what was originally
    /// invested, not the current value. When nothing is held the rate is
    /// `"0.00"` and every total is zero except the deposit.
    #[must_use]
    pub fn summarize(&self, stocks: &[UserStock], deposit: i64) -> PortfolioSummary {
        let total_value: i64 = stocks.iter().map(|s| s.total_value).sum();
        let total_profit_loss: i64 = stocks.iter().map(|s| s.profit_loss).sum();
        let total_assets = total_value + deposit;

        let profit_rate = if total_value > 0 {
            let cost_basis = (total_value - total_profit_loss) as f64;
            format!("{:.2}", total_profit_loss as f64 / cost_basis * 100.0)
        } else {
            "0.00".to_string()
        };

        PortfolioSummary {
            total_assets,
            total_value,
            total_profit_loss,
            profit_rate,
            deposit,
            stock_count: stocks.len(),
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
