use serde::{Deserialize, Serialize};

/// Summary of a user's portfolio at the moment it was computed.
///
/// Pure function of the holding set plus the account deposit; see
/// `PortfolioService::summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Invested value plus deposit
    pub total_assets: i64,

    /// Sum of holding market values
    pub total_value: i64,

    /// Sum of unrealized profit/loss, signed
    pub total_profit_loss: i64,

    /// Return over cost basis, formatted to 2 decimals (no sign prefix,
    /// no `%`), e.g. `"4.19"` or `"-2.43"`. `"0.00"` when nothing is held.
    pub profit_rate: String,

    /// Account-level cash balance
    pub deposit: i64,

    /// Number of distinct holdings
    pub stock_count: usize,
}

/// Investment style, classified from the number of distinct holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentStyle {
    /// 적극형 — more than 5 holdings
    Aggressive,
    /// 중립형 — more than 3 holdings
    Neutral,
    /// 안정형 — everything else
    Stable,
}

impl std::fmt::Display for InvestmentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentStyle::Aggressive => write!(f, "적극형"),
            InvestmentStyle::Neutral => write!(f, "중립형"),
            InvestmentStyle::Stable => write!(f, "안정형"),
        }
    }
}

/// Risk appetite, classified from the average absolute profit rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// 공격적 — average above 10%
    Aggressive,
    /// 중간 — average above 5%
    Moderate,
    /// 보수적 — everything else (including no holdings)
    Conservative,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Aggressive => write!(f, "공격적"),
            RiskLevel::Moderate => write!(f, "중간"),
            RiskLevel::Conservative => write!(f, "보수적"),
        }
    }
}

/// Trading cadence, classified from the trade-history length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingFrequency {
    /// 활발한 거래형 — more than 10 trades
    Active,
    /// 중간 거래형 — more than 5 trades
    Moderate,
    /// 장기 보유형 — everything else
    LongTerm,
}

impl std::fmt::Display for TradingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradingFrequency::Active => write!(f, "활발한 거래형"),
            TradingFrequency::Moderate => write!(f, "중간 거래형"),
            TradingFrequency::LongTerm => write!(f, "장기 보유형"),
        }
    }
}

/// Sector bucket a holding is classified into by name.
///
/// The substring rules are a fixture inherited from the product, not a
/// validated taxonomy — e.g. any name containing `차` lands in 자동차.
/// Declaration order here is the tie-break order for `preferred_sectors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    /// 바이오/제약
    BioPharma,
    /// 에너지
    Energy,
    /// 자동차
    Automotive,
    /// 해운/물류
    Shipping,
    /// 기타
    Other,
}

impl Sector {
    /// All buckets, in declaration (tie-break) order.
    pub const ALL: [Sector; 5] = [
        Sector::BioPharma,
        Sector::Energy,
        Sector::Automotive,
        Sector::Shipping,
        Sector::Other,
    ];
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sector::BioPharma => write!(f, "바이오/제약"),
            Sector::Energy => write!(f, "에너지"),
            Sector::Automotive => write!(f, "자동차"),
            Sector::Shipping => write!(f, "해운/물류"),
            Sector::Other => write!(f, "기타"),
        }
    }
}

/// Heuristic investor profile derived from holdings and trade history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub investment_style: InvestmentStyle,
    pub risk_level: RiskLevel,

    /// Up to two sector buckets, most-held first
    pub preferred_sectors: Vec<Sector>,

    pub trading_frequency: TradingFrequency,
}
