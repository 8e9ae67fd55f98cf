use serde::{Deserialize, Serialize};

use super::analytics::{InvestorProfile, PortfolioSummary};
use super::stock::UserStock;
use super::trade::Trade;
use super::user::User;

/// Everything the advisor knows about the authenticated user.
///
/// Built fresh on login (or an explicit refresh), owned by the session, and
/// dropped wholesale on logout — it is never persisted, and nothing of it
/// survives into the next session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub user: User,

    pub stocks: Vec<UserStock>,

    /// Trade history, most recent first
    pub trades: Vec<Trade>,

    pub summary: PortfolioSummary,

    pub profile: InvestorProfile,

    /// Rendered system prompt handed to the chat backend
    pub context_prompt: String,
}
