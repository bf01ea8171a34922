//! Trade-entry lock: once the day hits its profit target or its stop loss,
//! no further trades should be entered.

use serde::{Deserialize, Serialize};

use crate::models::CalculatedPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStatus {
    Profit,
    Loss,
}

/// Evaluate the day's P/L against the plan bounds. Profit is checked first,
/// so a degenerate plan satisfying both bounds reports the target hit.
pub fn evaluate(total_pl: f64, plan: &CalculatedPlan) -> Option<LockStatus> {
    if total_pl >= plan.profit_target_amount {
        Some(LockStatus::Profit)
    } else if total_pl <= -plan.stop_loss_amount {
        Some(LockStatus::Loss)
    } else {
        None
    }
}

/// Whether trade entry is blocked: either bound was hit, or the viewed day
/// is not the current calendar day (historical days are read-only). The
/// ledger does not enforce this - callers check before `add_trade`.
pub fn entry_locked(status: Option<LockStatus>, is_today: bool) -> bool {
    status.is_some() || !is_today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> CalculatedPlan {
        CalculatedPlan {
            investment_per_trade: 200.0,
            max_trades: 5,
            profit_target_amount: 500.0,
            stop_loss_amount: 1_000.0,
        }
    }

    #[test]
    fn test_target_hit_locks_with_profit() {
        assert_eq!(evaluate(500.0, &plan()), Some(LockStatus::Profit));
        assert_eq!(evaluate(750.0, &plan()), Some(LockStatus::Profit));
    }

    #[test]
    fn test_stop_hit_locks_with_loss() {
        assert_eq!(evaluate(-1_000.0, &plan()), Some(LockStatus::Loss));
        assert_eq!(evaluate(-1_500.0, &plan()), Some(LockStatus::Loss));
    }

    #[test]
    fn test_between_bounds_stays_unlocked() {
        assert_eq!(evaluate(0.0, &plan()), None);
        assert_eq!(evaluate(499.99, &plan()), None);
        assert_eq!(evaluate(-999.99, &plan()), None);
    }

    #[test]
    fn test_entry_locked_combines_both_conditions() {
        assert!(!entry_locked(None, true));
        assert!(entry_locked(Some(LockStatus::Profit), true));
        assert!(entry_locked(Some(LockStatus::Loss), true));
        // Historical days are read-only regardless of P/L state.
        assert!(entry_locked(None, false));
    }
}
