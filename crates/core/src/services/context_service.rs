use tracing::{debug, info};

use crate::models::analytics::{InvestorProfile, PortfolioSummary};
use crate::models::context::UserContext;
use crate::models::stock::UserStock;
use crate::models::trade::Trade;
use crate::models::user::User;
use crate::storage::database::Database;

use super::portfolio_service::PortfolioService;
use super::profile_service::ProfileService;

/// How many recent trades the prompt shows.
const RECENT_TRADE_LIMIT: usize = 5;

/// Group digits with thousands separators, e.g. `1234567` → `"1,234,567"`.
/// Negative values keep their sign: `-76680` → `"-76,680"`.
#[must_use]
pub fn format_amount(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Like [`format_amount`], but non-negative values get an explicit `+`,
/// the way profit/loss figures are displayed.
#[must_use]
pub fn format_signed(n: i64) -> String {
    if n >= 0 {
        format!("+{}", format_amount(n))
    } else {
        format_amount(n)
    }
}

/// Builds the per-session [`UserContext`]: fetches the user's records,
/// computes summary and profile, and renders the advisor prompt.
pub struct ContextService {
    portfolio_service: PortfolioService,
    profile_service: ProfileService,
}

impl ContextService {
    pub fn new() -> Self {
        Self {
            portfolio_service: PortfolioService::new(),
            profile_service: ProfileService::new(),
        }
    }

    /// Assemble the full context for an authenticated user.
    ///
    /// Fetches holdings, trade history (already most-recent-first), and the
    /// account deposit, then derives summary, profile, and prompt. Nothing
    /// is published anywhere — the caller owns the returned context.
    pub async fn build_context(&self, db: &Database, user: User) -> UserContext {
        debug!(user_id = %user.id, "building user context");

        let stocks = db.get_user_stocks(&user.id).await;
        let trades = db.get_trade_history(&user.id).await;
        let deposit = db
            .get_account(&user.id)
            .await
            .map(|a| a.deposit)
            .unwrap_or(0);

        let summary = self.portfolio_service.summarize(&stocks, deposit);
        let profile = self.profile_service.analyze(&stocks, &trades);
        let context_prompt = self.render_prompt(&user, &stocks, &trades, &summary, &profile);

        info!(
            user_id = %user.id,
            stocks = stocks.len(),
            trades = trades.len(),
            "user context ready"
        );

        UserContext {
            user,
            stocks,
            trades,
            summary,
            profile,
            context_prompt,
        }
    }

    /// Render the personalized advisor system prompt.
    ///
    /// The layout and wording are a contract with the chat backend's prompt
    /// tuning — section order, signs, and separators must not drift.
    #[must_use]
    pub fn render_prompt(
        &self,
        user: &User,
        stocks: &[UserStock],
        trades: &[Trade],
        summary: &PortfolioSummary,
        profile: &InvestorProfile,
    ) -> String {
        let mut stock_lines = String::new();
        for s in stocks {
            stock_lines.push_str(&format!(
                "\n- {} ({})\n  * 수량: {}주\n  * 평균단가: {}원\n  * 현재가: {}원\n  * 평가금액: {}원\n  * 손익: {}원 ({})",
                s.stock_name,
                s.stock_code,
                format_amount(i64::from(s.quantity)),
                format_amount(s.avg_price),
                format_amount(s.current_price),
                format_amount(s.total_value),
                format_signed(s.profit_loss),
                s.profit_rate,
            ));
        }

        let mut trade_lines = String::new();
        for t in trades.iter().take(RECENT_TRADE_LIMIT) {
            trade_lines.push_str(&format!(
                "\n- {}: {} {} {}주 @{}원\n  사유: {}",
                t.executed_at_display(),
                t.side,
                t.stock_name,
                format_amount(i64::from(t.quantity)),
                format_amount(t.price),
                t.description,
            ));
        }

        let sectors = profile
            .preferred_sectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        // The summary profit rate string carries its own minus sign; only
        // gains get an explicit plus, mirroring the profit/loss figure.
        let rate_sign = if summary.total_profit_loss >= 0 { "+" } else { "" };

        format!(
            "당신은 {name}님의 전용 금융 AI 상담사입니다. 다음은 {name}님의 상세 정보입니다:

## 🏛️ 기본 정보
- 이름: {name}
- 사용자 ID: {user_id}

## 💰 자산 현황
- 총 자산: {total_assets}원
- 투자 금액: {total_value}원
- 예수금: {deposit}원
- 평가손익: {profit_loss}원
- 수익률: {rate_sign}{profit_rate}%
- 보유종목 수: {stock_count}개

## 📈 보유종목 상세
{stock_lines}

## 📊 투자 성향 분석
- 투자 스타일: {style}
- 리스크 성향: {risk}
- 선호 섹터: {sectors}
- 거래 빈도: {frequency}

## 💱 최근 거래내역 (최대 5건)
{trade_lines}

## 🎯 상담 지침
1. {name}님의 이름을 자연스럽게 사용하여 개인화된 상담을 제공하세요.
2. 위 정보를 바탕으로 구체적이고 개인화된 투자 조언을 제공하세요.
3. {name}님의 투자 성향({style}, {risk})에 맞는 조언을 하세요.
4. 현재 보유종목의 손익 상황을 고려한 조언을 제공하세요.
5. 친근하고 전문적인 톤으로 대화하세요.
6. 구체적인 수치와 데이터를 활용하여 설득력 있는 조언을 하세요.

이제 {name}님과 자연스럽고 개인화된 금융 상담을 시작하세요.",
            name = user.name,
            user_id = user.id,
            total_assets = format_amount(summary.total_assets),
            total_value = format_amount(summary.total_value),
            deposit = format_amount(summary.deposit),
            profit_loss = format_signed(summary.total_profit_loss),
            rate_sign = rate_sign,
            profit_rate = summary.profit_rate,
            stock_count = summary.stock_count,
            stock_lines = stock_lines,
            style = profile.investment_style,
            risk = profile.risk_level,
            sectors = sectors,
            frequency = profile.trading_frequency,
            trade_lines = trade_lines,
        )
    }
}

impl Default for ContextService {
    fn default() -> Self {
        Self::new()
    }
}
