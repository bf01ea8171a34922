//! Aggregates derived from a day's ledger. Everything here is pure; callers
//! re-derive after each mutation instead of caching.

use serde::{Deserialize, Serialize};

use crate::models::{CalculatedPlan, Trade, TradeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub total_trades: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub total_pl: f64,
}

pub fn aggregate(trades: &[Trade]) -> DayStats {
    let total = trades.len() as u32;
    let wins = trades
        .iter()
        .filter(|t| t.result == TradeResult::Win)
        .count() as u32;
    let losses = total - wins;
    let win_rate = if total > 0 {
        wins as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let total_pl = trades.iter().map(|t| t.profit_or_loss).sum();

    DayStats {
        total_trades: total,
        wins,
        losses,
        win_rate,
        total_pl,
    }
}

/// How far the day's P/L has moved toward the profit target, in percent.
/// Unclamped; the renderer clamps to its bar.
pub fn progress_to_target(total_pl: f64, plan: &CalculatedPlan) -> f64 {
    if plan.profit_target_amount > 0.0 {
        total_pl / plan.profit_target_amount * 100.0
    } else {
        0.0
    }
}

/// How far a losing day has moved toward the stop, in percent. Zero while
/// the day is flat or positive.
pub fn progress_to_stop_loss(total_pl: f64, plan: &CalculatedPlan) -> f64 {
    if plan.stop_loss_amount > 0.0 && total_pl < 0.0 {
        total_pl.abs() / plan.stop_loss_amount * 100.0
    } else {
        0.0
    }
}
