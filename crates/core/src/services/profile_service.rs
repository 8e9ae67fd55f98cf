use crate::models::analytics::{
    InvestmentStyle, InvestorProfile, RiskLevel, Sector, TradingFrequency,
};
use crate::models::stock::UserStock;
use crate::models::trade::Trade;

/// Classifies a user's investment personality from their holdings and
/// trade history.
///
/// Pure heuristics with fixed thresholds; the category strings are rendered
/// into the advisor prompt and elsewhere in the app, so the classification
/// must stay stable.
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full investor profile.
    #[must_use]
    pub fn analyze(&self, stocks: &[UserStock], trades: &[Trade]) -> InvestorProfile {
        InvestorProfile {
            investment_style: Self::investment_style(stocks),
            risk_level: Self::risk_level(stocks),
            preferred_sectors: Self::preferred_sectors(stocks),
            trading_frequency: Self::trading_frequency(trades),
        }
    }

    /// More than 5 holdings → 적극형, more than 3 → 중립형, else 안정형.
    /// Thresholds are strict and checked in descending order.
    fn investment_style(stocks: &[UserStock]) -> InvestmentStyle {
        if stocks.len() > 5 {
            InvestmentStyle::Aggressive
        } else if stocks.len() > 3 {
            InvestmentStyle::Neutral
        } else {
            InvestmentStyle::Stable
        }
    }

    /// Average absolute profit rate above 10% → 공격적, above 5% → 중간,
    /// else 보수적. No holdings means no average, which reads as 보수적.
    fn risk_level(stocks: &[UserStock]) -> RiskLevel {
        if stocks.is_empty() {
            return RiskLevel::Conservative;
        }

        let avg = stocks
            .iter()
            .map(|s| s.profit_rate_value().abs())
            .sum::<f64>()
            / stocks.len() as f64;

        if avg > 10.0 {
            RiskLevel::Aggressive
        } else if avg > 5.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Conservative
        }
    }

    /// Tally holdings into sector buckets and return the top two by count.
    /// Ties break toward the earlier bucket in `Sector::ALL` order.
    fn preferred_sectors(stocks: &[UserStock]) -> Vec<Sector> {
        let mut counts = [0usize; Sector::ALL.len()];
        for stock in stocks {
            counts[Self::classify_sector(&stock.stock_name) as usize] += 1;
        }

        let mut ranked: Vec<(Sector, usize)> = Sector::ALL
            .iter()
            .map(|&sector| (sector, counts[sector as usize]))
            .collect();
        // Stable sort: equal counts keep declaration order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .take(2)
            .map(|(sector, _)| sector)
            .collect()
    }

    /// Bucket a holding by substring match on its display name, first rule
    /// wins. A fixture inherited from the product — 현대차 matches `차`,
    /// while 한화에어로스페이스 matches nothing and lands in 기타.
    fn classify_sector(stock_name: &str) -> Sector {
        if stock_name.contains("바이오") || stock_name.contains("약품") {
            Sector::BioPharma
        } else if stock_name.contains("전력") || stock_name.contains("에너지") {
            Sector::Energy
        } else if stock_name.contains("차") || stock_name.contains("모빌리티") {
            Sector::Automotive
        } else if stock_name.contains("HMM") || stock_name.contains("해운") {
            Sector::Shipping
        } else {
            Sector::Other
        }
    }

    /// More than 10 trades → 활발한 거래형, more than 5 → 중간 거래형,
    /// else 장기 보유형.
    fn trading_frequency(trades: &[Trade]) -> TradingFrequency {
        if trades.len() > 10 {
            TradingFrequency::Active
        } else if trades.len() > 5 {
            TradingFrequency::Moderate
        } else {
            TradingFrequency::LongTerm
        }
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
