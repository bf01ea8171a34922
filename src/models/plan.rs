use serde::{Deserialize, Serialize};

/// Capital-risk parameters for a single trading day. One per (user, date);
/// replaced or deleted whole, never edited field-by-field. All four fields
/// must be positive for the plan to make sense; that check belongs to the
/// input boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPlan {
    pub initial_capital: f64,
    pub daily_profit_target_pct: f64,
    pub stop_loss_pct: f64,
    pub risk_per_trade_pct: f64,
}

/// Figures derived from a [`TradingPlan`]. Never persisted; recompute on
/// every read so a replaced plan can't leave stale numbers behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPlan {
    pub investment_per_trade: f64,
    pub max_trades: u32,
    pub profit_target_amount: f64,
    pub stop_loss_amount: f64,
}

impl TradingPlan {
    pub fn calculate(&self) -> CalculatedPlan {
        let investment_per_trade = self.initial_capital * (self.risk_per_trade_pct / 100.0);
        let stop_loss_amount = self.initial_capital * (self.stop_loss_pct / 100.0);
        let profit_target_amount = self.initial_capital * (self.daily_profit_target_pct / 100.0);
        let max_trades = if investment_per_trade > 0.0 {
            (stop_loss_amount / investment_per_trade).floor() as u32
        } else {
            0
        };

        CalculatedPlan {
            investment_per_trade,
            max_trades,
            profit_target_amount,
            stop_loss_amount,
        }
    }
}
