use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of a compounding plan. `completed` is the only field that ever
/// changes after creation, toggled per (plan id, day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlanTarget {
    /// 1-based position in the plan.
    pub day: u32,
    pub starting_capital: f64,
    pub target_profit: f64,
    pub ending_capital: f64,
    pub completed: bool,
}

/// A multi-day compounding capital-growth schedule. At most one plan is
/// active per user; superseded plans move to a most-recently-archived-first
/// history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlan {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub starting_capital: f64,
    pub monthly_profit_goal_pct: f64,
    pub trading_days: u32,
    pub daily_targets: Vec<DailyPlanTarget>,
}
